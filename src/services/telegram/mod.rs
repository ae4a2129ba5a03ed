pub mod client;
pub mod notifier;

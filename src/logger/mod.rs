mod config;
#[cfg(test)]
pub mod test_utils;

pub use config::init_logger;

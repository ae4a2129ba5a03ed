pub mod homework;
pub mod telegram;

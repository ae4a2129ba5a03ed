pub mod build_env;
pub mod models;

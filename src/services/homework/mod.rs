pub mod api_client;
pub mod scheduler;
pub mod status;
pub mod validator;

pub mod config;
pub mod gcp;
pub mod http;
pub mod secrets;
pub mod storage;
pub mod synthesis;

pub mod config;
pub mod contents;
pub mod logger;

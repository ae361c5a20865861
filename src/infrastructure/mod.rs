pub mod config;
pub mod http;
pub mod huggingface;
pub mod repositories;

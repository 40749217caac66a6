pub mod cms;
pub mod config;
pub mod error;
pub mod openapi;
pub mod retry;
pub mod server;
pub mod services;

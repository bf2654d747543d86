pub mod config;
pub mod constants;
pub mod error;
pub mod formatters;
pub mod handlers;
pub mod models;
pub mod service;
pub mod startup;

pub use config::ServerConfig;
pub use startup::{build_router, Application};

pub mod analyzer;
pub mod app;
pub mod claims;
pub mod config;
pub mod error;
pub mod render;
pub mod scoring;
pub mod serper;
pub mod server;
pub mod types;

pub use analyzer::Analyzer;
pub use error::ProxyError;
pub use types::*;

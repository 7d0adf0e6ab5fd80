pub mod config;

pub use config::{AppConfig, RenderConfig, ServerConfig};

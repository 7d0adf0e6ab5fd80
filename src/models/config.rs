use serde::Deserialize;
use std::path::{Path, PathBuf};

use emoji_palette::{Background, EmojiRenderer, DEFAULT_MAX_SIDE};

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct AppConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Conversion settings
    #[serde(default)]
    pub render: RenderConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ServerConfig {
    /// Address the HTTP server binds to
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Largest accepted upload after data URL unwrapping
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

fn default_bind_addr() -> String {
    "0.0.0.0:3000".to_string()
}

fn default_max_upload_bytes() -> usize {
    10 * 1024 * 1024
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct RenderConfig {
    /// Longest side of the glyph grid
    #[serde(default = "default_max_side")]
    pub max_side: u32,

    /// Alpha at or above which a cell counts as opaque
    #[serde(default = "default_alpha_threshold")]
    pub alpha_threshold: u8,

    /// Light fraction above which transparent cells become black
    #[serde(default = "default_light_threshold")]
    pub light_threshold: f64,
}

fn default_max_side() -> u32 {
    DEFAULT_MAX_SIDE
}

fn default_alpha_threshold() -> u8 {
    EmojiRenderer::DEFAULT_ALPHA_THRESHOLD
}

fn default_light_threshold() -> f64 {
    Background::DEFAULT_LIGHT_THRESHOLD
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_side: default_max_side(),
            alpha_threshold: default_alpha_threshold(),
            light_threshold: default_light_threshold(),
        }
    }
}

impl RenderConfig {
    /// Build a renderer over the standard palette with these settings.
    pub fn renderer(&self) -> EmojiRenderer {
        EmojiRenderer::new()
            .max_side(self.max_side)
            .alpha_threshold(self.alpha_threshold)
            .light_threshold(self.light_threshold)
    }
}

impl AppConfig {
    /// Load configuration from `CONFIG_FILE` (if set), then apply
    /// environment overrides.
    pub fn load() -> Self {
        let config_file = std::env::var("CONFIG_FILE").ok().map(PathBuf::from);
        let mut config = match config_file {
            Some(path) => Self::load_from_path(&path),
            None => {
                tracing::debug!("CONFIG_FILE not set, using defaults");
                Self::default()
            }
        };
        config.apply_env_overrides(std::env::var("BIND_ADDR").ok());
        config
    }

    /// Load configuration from a YAML file, falling back to defaults when
    /// the file cannot be read or parsed.
    pub fn load_from_path(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml_str(&content) {
                Ok(config) => {
                    tracing::info!(
                        path = %path.display(),
                        bind_addr = %config.server.bind_addr,
                        max_side = config.render.max_side,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, path = %path.display(), "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Apply a `BIND_ADDR` value over the file/default setting.
    pub fn apply_env_overrides(&mut self, bind_addr: Option<String>) {
        if let Some(addr) = bind_addr.filter(|a| !a.trim().is_empty()) {
            self.server.bind_addr = addr;
        }
    }
}

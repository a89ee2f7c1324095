use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::ui::Theme;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub render: RenderConfig,
    pub appearance: AppearanceConfig,
    pub behavior: BehaviorConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Base endpoint of the render service the embed URL points at.
    pub base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceConfig {
    /// Theme preset name: "forge" or "paper"
    pub theme: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Preview tick interval in milliseconds
    pub tick_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            render: RenderConfig::default(),
            appearance: AppearanceConfig::default(),
            behavior: BehaviorConfig::default(),
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            base_url: crate::embed::DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            theme: "forge".to_string(),
        }
    }
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self { tick_ms: 1000 }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let expanded = shellexpand::tilde(path);
        let path = Path::new(expanded.as_ref());

        if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            tracing::info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    pub fn resolve_theme(&self) -> Theme {
        Theme::from_preset(&self.appearance.theme).unwrap_or_else(|| {
            tracing::warn!("Unknown theme preset '{}'", self.appearance.theme);
            Theme::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.render.base_url, crate::embed::DEFAULT_BASE_URL);
        assert_eq!(config.appearance.theme, "forge");
        assert_eq!(config.behavior.tick_ms, 1000);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: Config = toml::from_str(
            r#"
            [render]
            base_url = "http://localhost:8080/render"
            "#,
        )
        .unwrap();
        assert_eq!(config.render.base_url, "http://localhost:8080/render");
        assert_eq!(config.behavior.tick_ms, 1000);
        assert_eq!(config.appearance.theme, "forge");
    }

    #[test]
    fn test_unknown_theme_falls_back() {
        let config: Config = toml::from_str(
            r#"
            [appearance]
            theme = "no-such-theme"
            "#,
        )
        .unwrap();
        // Falls back to the default theme instead of failing.
        let _ = config.resolve_theme();
    }
}

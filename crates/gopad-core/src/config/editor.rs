use std::{fs, path::PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::theme::ThemeVariant;

pub fn default_placeholder() -> String {
    "Start typing...".into()
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Editor {
    #[serde(default)]
    pub theme: ThemeVariant,
    #[serde(default)]
    pub log_level: Option<String>,
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
    #[serde(default)]
    pub window: WindowConfig,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

impl Editor {
    pub const DEFAULT: &'static str = include_str!("../../../../config/editor.toml");

    /// A missing file is not an error, the embedded default is used instead.
    pub fn load_from_default_location() -> Result<Self> {
        let path = Self::get_default_location()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::parse(&fs::read_to_string(&path)?)
    }

    pub fn parse(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn get_default_location() -> Result<PathBuf> {
        let Some(directories) = directories::ProjectDirs::from("", "", "gopad") else {
            return Err(anyhow::Error::msg("Unable to find project directory"));
        };
        Ok(directories.config_dir().join("editor.toml"))
    }
}

impl Default for Editor {
    fn default() -> Self {
        toml::from_str(Self::DEFAULT).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let editor = Editor::default();
        assert_eq!(editor.theme, ThemeVariant::Light);
        assert_eq!(editor.placeholder, "Start typing...");
        assert_eq!(editor.window, WindowConfig::default());
        assert_eq!(editor.log_level, None);
    }

    #[test]
    fn partial_config_uses_defaults() {
        let editor = Editor::parse("theme = \"dark\"").unwrap();
        assert_eq!(editor.theme, ThemeVariant::Dark);
        assert_eq!(editor.placeholder, "Start typing...");
        assert_eq!(editor.window.width, 800.0);
    }

    #[test]
    fn unknown_theme_is_rejected() {
        assert!(Editor::parse("theme = \"solarized\"").is_err());
    }
}

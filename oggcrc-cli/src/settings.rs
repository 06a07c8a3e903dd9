use std::env;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CliError;

const DEFAULT_SETTINGS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../",
    "configs/default.toml"
));

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Logger {
    pub level: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Hex,
    Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Output {
    pub format: Format,
    #[serde(default)]
    pub uppercase: bool,
}

impl Output {
    pub fn render(&self, crc: u32) -> String {
        match (self.format, self.uppercase) {
            (Format::Hex, false) => format!("{crc:#010x}"),
            (Format::Hex, true) => format!("0x{crc:08X}"),
            (Format::Decimal, _) => crc.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub logger: Logger,
    pub output: Output,
}

impl Settings {
    /// Loads the compiled-in defaults, or `path` in their place, then applies
    /// the `OGGCRC_LOG_LEVEL` override.
    pub fn new(path: Option<&Path>) -> Result<Self, CliError> {
        let mut settings = match path {
            Some(path) => {
                let text = fs::read_to_string(path).map_err(|source| CliError::Io {
                    name: path.display().to_string(),
                    source,
                })?;
                Self::from_toml(&text)?
            }
            None => Self::from_toml(DEFAULT_SETTINGS)?,
        };

        if let Ok(level) = env::var("OGGCRC_LOG_LEVEL") {
            settings.logger.level = level;
        }

        Ok(settings)
    }

    pub fn from_toml(text: &str) -> Result<Self, CliError> {
        Ok(toml::from_str(text)?)
    }
}

//! Decoding of record files into untyped values.

use std::fmt;
use std::path::Path;

use clap::ValueEnum;
use serde_json::Value;

/// Text encodings a record file may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// JSON document.
    Json,
    /// YAML document.
    Yaml,
}

impl InputFormat {
    /// Picks a format from the file extension (`.json`, `.yaml`, `.yml`).
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    /// Decodes `text` into an untyped value.
    ///
    /// # Errors
    ///
    /// Returns an error string if the text is not well-formed in this format.
    pub fn decode(self, text: &str) -> Result<Value, String> {
        match self {
            Self::Json => serde_json::from_str(text).map_err(|e| format!("invalid JSON: {e}")),
            Self::Yaml => serde_yaml::from_str(text).map_err(|e| format!("invalid YAML: {e}")),
        }
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => f.write_str("json"),
            Self::Yaml => f.write_str("yaml"),
        }
    }
}

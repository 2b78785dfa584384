//! Formatting options, loadable from the config file.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which QA block payload layout the tutor prompt emits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QaShape {
    /// `{"question": "...", "answers": {"A": "...", ...}}`
    #[default]
    Nested,
    /// `{"A": "...", "B": "..."}` with an optional `"question"` entry.
    Flat,
}

impl fmt::Display for QaShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nested => write!(f, "nested"),
            Self::Flat => write!(f, "flat"),
        }
    }
}

impl FromStr for QaShape {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nested" => Ok(Self::Nested),
            "flat" => Ok(Self::Flat),
            other => Err(format!("unknown qa shape '{}' (expected nested or flat)", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    /// Rewrite literal `$` in assistant messages so only math tags produce math.
    pub escape_currency: bool,
    pub currency_replacement: String,
    pub qa_shape: QaShape,
    /// Extract every QA block in a paragraph instead of only the first.
    pub all_blocks: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            escape_currency: true,
            currency_replacement: "USD".to_string(),
            qa_shape: QaShape::Nested,
            all_blocks: false,
        }
    }
}

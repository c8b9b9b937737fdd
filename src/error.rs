//! Crate-level error types.

use std::fmt;

/// Errors produced by the parallax crate.
///
/// The per-frame control path never fails; these cover the setup and host
/// plumbing around it.
#[derive(Debug)]
pub enum ParallaxError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Options parsed but describe an impossible scene.
    InvalidOptions(String),
    /// Malformed scroll script line.
    Script {
        /// 1-based line number.
        line: usize,
        /// What was wrong with it.
        message: String,
    },
    /// Frame snapshot serialization failure.
    Export(String),
    /// Browser host setup failure.
    Web(String),
}

impl fmt::Display for ParallaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::InvalidOptions(msg) => write!(f, "invalid options: {msg}"),
            Self::Script { line, message } => {
                write!(f, "scroll script line {line}: {message}")
            }
            Self::Export(msg) => write!(f, "export error: {msg}"),
            Self::Web(msg) => write!(f, "web host error: {msg}"),
        }
    }
}

impl std::error::Error for ParallaxError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ParallaxError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for ParallaxError {
    fn from(e: serde_json::Error) -> Self {
        Self::Export(e.to_string())
    }
}

use std::str::FromStr;

use crate::error::MatchCopyError;

/// One discovery pass: a glob pattern matched against filename stems, plus
/// an optional extension allow-list. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternSpec {
    /// Shell-style glob (`*`, `?`, `[...]`) matched against the filename
    /// without its extension.
    pub pattern: String,
    /// Allowed extensions, stored with a leading dot. Empty means any
    /// extension is accepted.
    pub extensions: Vec<String>,
}

impl PatternSpec {
    /// Create a spec, normalizing every extension to carry a leading dot.
    pub fn new(pattern: impl Into<String>, extensions: &[String]) -> Self {
        Self {
            pattern: pattern.into(),
            extensions: extensions
                .iter()
                .map(|ext| normalize_extension(ext))
                .filter(|ext| ext.len() > 1)
                .collect(),
        }
    }
}

/// Ensure an extension string starts with exactly one dot.
fn normalize_extension(ext: &str) -> String {
    let trimmed = ext.trim();
    if trimmed.starts_with('.') {
        trimmed.to_string()
    } else {
        format!(".{}", trimmed)
    }
}

/// What to do with a matched file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferMode {
    Copy,
    Move,
}

impl FromStr for TransferMode {
    type Err = MatchCopyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "copy" | "c" => Ok(TransferMode::Copy),
            "move" | "m" => Ok(TransferMode::Move),
            other => Err(MatchCopyError::Configuration(format!(
                "mode value \"{}\" not recognized",
                other
            ))),
        }
    }
}

//! Error types for token parsing, reference validation, theme loading and
//! artifact generation.
//!
//! The two errors raised by the compiler core are [`ParseError`] (value
//! grammar) and [`ReferenceError`] (palette lookups). Generators return them
//! to the caller unmodified. [`ThemeError`] and [`GenerateError`] belong to
//! the collaborators around the core: loading a theme document and writing
//! artifacts to disk.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Every unit alias accepted by the value grammar, plus the palette form.
///
/// Listed in unknown-unit messages so the author can see what is accepted.
pub const VALID_UNITS: &str =
    "px, pixel, pixels, rem, root, em, parent, base, spacing, innerGutter, inner gutter, abs, absolute, palette";

/// Error returned when a token value string does not match the value grammar.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The leading token is not a number.
    #[error("Invalid value: \"{input}\". First part must be a number.")]
    InvalidNumber {
        /// The full value string as written in the theme.
        input: String,
    },

    /// The unit following the number is not one of the known aliases.
    #[error("Unknown unit: \"{unit}\" in \"{input}\". Valid units: {valid}", valid = VALID_UNITS)]
    UnknownUnit {
        /// The full value string as written in the theme.
        input: String,
        /// Everything after the number, joined with single spaces.
        unit: String,
    },
}

/// Error returned when a `"<key> palette"` reference names a missing color.
///
/// Carries the list of palette keys that do exist so the message can point
/// the author at the right spelling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceError {
    /// The palette key that was looked up.
    pub reference: String,
    /// Dotted path of the theme entry holding the reference, when known.
    pub field: Option<String>,
    /// Palette keys defined by the theme, in theme order.
    pub available: Vec<String>,
}

impl ReferenceError {
    pub(crate) fn new(
        reference: impl Into<String>,
        field: Option<&str>,
        available: Vec<String>,
    ) -> Self {
        Self {
            reference: reference.into(),
            field: field.map(str::to_string),
            available,
        }
    }
}

impl fmt::Display for ReferenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid palette reference \"{}\"", self.reference)?;
        if let Some(field) = &self.field {
            write!(f, " in {}", field)?;
        }
        write!(f, ". Available colors: {}", self.available.join(", "))
    }
}

impl std::error::Error for ReferenceError {}

/// Error type for loading a theme document.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    /// The document is not valid YAML/JSON or does not have the theme shape.
    #[error("Failed to parse theme{}: {message}", location(.path))]
    Parse {
        /// Source file, when the theme came from disk.
        path: Option<PathBuf>,
        /// Message from the deserializer.
        message: String,
    },

    /// The theme file could not be read.
    #[error("Failed to read theme {}: {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file extension does not name a supported format.
    #[error("Unsupported theme format for {} (expected .yaml, .yml or .json)", .path.display())]
    UnsupportedFormat { path: PathBuf },
}

fn location(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" {}", p.display()))
        .unwrap_or_default()
}

/// Error type for producing and persisting generated artifacts.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// The theme failed palette validation.
    #[error(transparent)]
    Reference(#[from] ReferenceError),

    /// The config structure could not be serialized.
    #[error("Failed to serialize Tailwind config: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The artifact could not be written.
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

//! Palette reference resolution and validation over raw token strings.
//!
//! This path is looser than [`parse_value`](crate::parse_value):
//! a value counts as a palette reference whenever it contains the word
//! `palette` anywhere, and its first whitespace-delimited token is taken as
//! the palette key. Everything else passes through untouched, so literal CSS
//! lengths such as `"1rem"` need no grammar at all.

use tracing::debug;

use crate::error::ReferenceError;
use crate::theme::{Theme, ThemeMode};

const PALETTE_MARKER: &str = "palette";

/// First whitespace-delimited token of a raw value.
///
/// Leading whitespace yields an empty key, which never names a palette entry.
pub(crate) fn reference_key(value: &str) -> &str {
    value.split(char::is_whitespace).next().unwrap_or_default()
}

/// Looks up a palette color. Empty colors count as absent.
fn palette_color<'a>(theme: &'a Theme, key: &str) -> Option<&'a str> {
    theme
        .base
        .palette
        .get(key)
        .map(String::as_str)
        .filter(|color| !color.is_empty())
}

/// Resolves a raw value, replacing a palette reference by its literal color.
///
/// # Example
///
/// ```rust
/// use tokensmith::{resolve_node, Theme};
///
/// let theme = Theme::new("t").palette("primary", "#0070f3");
/// assert_eq!(resolve_node(&theme, "primary palette").unwrap(), "#0070f3");
/// assert_eq!(resolve_node(&theme, "1rem").unwrap(), "1rem");
/// ```
pub fn resolve_node(theme: &Theme, value: &str) -> Result<String, ReferenceError> {
    if !value.contains(PALETTE_MARKER) {
        return Ok(value.to_string());
    }

    let key = reference_key(value);
    palette_color(theme, key)
        .map(str::to_string)
        .ok_or_else(|| ReferenceError::new(key, None, theme.palette_keys()))
}

/// Resolves a base token value for the stylesheet.
///
/// Same behavior as [`resolve_node`]; this is the entry point the CSS
/// generator uses for spacing, size, z-index and container values.
pub fn resolve_css_value(theme: &Theme, value: &str) -> Result<String, ReferenceError> {
    if value.contains(PALETTE_MARKER) {
        return resolve_node(theme, value);
    }
    Ok(value.to_string())
}

/// Checks that a palette reference inside `value` names an existing color.
///
/// Values without the word `palette` always pass. `field` is the dotted
/// path of the entry being checked and is included in the error.
pub fn validate_palette_references(
    theme: &Theme,
    value: &str,
    field: Option<&str>,
) -> Result<(), ReferenceError> {
    if !value.contains(PALETTE_MARKER) {
        return Ok(());
    }

    let key = reference_key(value);
    match palette_color(theme, key) {
        Some(_) => Ok(()),
        None => Err(ReferenceError::new(key, field, theme.palette_keys())),
    }
}

/// Validates every palette reference in the theme, stopping at the first
/// failure.
///
/// Checks `light.bg`, then `dark.bg`, then `base.spacing`, then `base.size`,
/// each in theme order. Errors carry a field path such as
/// `light.bg.background` or `base.spacing.sm`.
pub fn validate_theme_palette_references(theme: &Theme) -> Result<(), ReferenceError> {
    for mode in ThemeMode::ALL {
        for (key, value) in &theme.mode(mode).bg {
            let field = format!("{}.bg.{}", mode.field(), key);
            validate_palette_references(theme, value, Some(&field))?;
        }
    }

    for (category, tokens) in [("spacing", &theme.base.spacing), ("size", &theme.base.size)] {
        for (key, value) in tokens {
            let field = format!("base.{}.{}", category, key);
            validate_palette_references(theme, value, Some(&field))?;
        }
    }

    debug!(theme = %theme.name, "palette references validated");
    Ok(())
}

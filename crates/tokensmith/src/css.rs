//! CSS custom-property stylesheet generation.
//!
//! The stylesheet has three blocks, always in this order:
//!
//! ```css
//! :root {
//!   --mode-background: var(--color-white);
//! }
//!
//! .dark {
//!   --mode-background: var(--color-black);
//! }
//!
//! @theme {
//!   --color-white: #fff;
//!   --color-black: #000;
//!   --color-background: var(--mode-background);
//!   --space-sm: 0.5rem;
//! }
//! ```
//!
//! `:root` and `.dark` bind each semantic name to a palette variable for their
//! mode. `@theme` declares the palette, one alias per semantic name pointing
//! at its `--mode-*` variable, then spacing, size, z-index and container
//! tokens. Entries follow theme order within each group.

use tracing::debug;

use crate::error::ReferenceError;
use crate::resolve::{reference_key, resolve_css_value, validate_theme_palette_references};
use crate::theme::{BaseCategory, Theme, ThemeMode};

const INDENT: &str = "  ";

/// Builds the CSS stylesheet for a theme.
///
/// Validation runs first; a theme with a dangling palette reference yields
/// an error and no text.
///
/// # Errors
///
/// Returns the first [`ReferenceError`] found by
/// [`validate_theme_palette_references`], or one raised while resolving a
/// z-index or container value that references a missing color.
pub fn build_css_variables(theme: &Theme) -> Result<String, ReferenceError> {
    validate_theme_palette_references(theme)?;

    let mut blocks = Vec::with_capacity(3);
    for mode in ThemeMode::ALL {
        let lines = mode_lines(theme, mode);
        blocks.push(block(mode.selector(), &lines));
    }
    blocks.push(block("@theme", &theme_lines(theme)?));

    debug!(
        theme = %theme.name,
        palette = theme.base.palette.len(),
        semantic = theme.light.bg.len(),
        "built CSS variables"
    );

    Ok(blocks.join("\n\n"))
}

/// `--mode-<key>: var(--color-<ref>);` for each semantic entry of a mode.
///
/// The reference is cut straight from the raw value; validation has
/// already confirmed it exists.
fn mode_lines(theme: &Theme, mode: ThemeMode) -> Vec<String> {
    theme
        .mode(mode)
        .bg
        .iter()
        .map(|(key, value)| {
            let target = format!("var(--color-{})", reference_key(value));
            declaration("mode", key, &target)
        })
        .collect()
}

fn theme_lines(theme: &Theme) -> Result<Vec<String>, ReferenceError> {
    let mut lines = Vec::new();

    let palette = BaseCategory::Palette;
    for (key, color) in theme.base.category(palette) {
        lines.push(declaration(palette.css_prefix(), key, color));
    }

    // Semantic aliases come from the light keys; both modes share them.
    for key in theme.light.bg.keys() {
        lines.push(declaration(
            palette.css_prefix(),
            key,
            &format!("var(--mode-{})", key),
        ));
    }

    for category in &BaseCategory::ALL[1..] {
        for (key, value) in theme.base.category(*category) {
            let resolved = resolve_css_value(theme, value)?;
            lines.push(declaration(category.css_prefix(), key, &resolved));
        }
    }

    Ok(lines)
}

fn declaration(prefix: &str, key: &str, value: &str) -> String {
    format!("{}--{}-{}: {};", INDENT, prefix, key, value)
}

fn block(selector: &str, lines: &[String]) -> String {
    format!("{} {{\n{}\n}}", selector, lines.join("\n"))
}

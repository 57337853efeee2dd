//! Tailwind theme configuration generation.
//!
//! The config maps every base token to a symbolic `var(--<category>-<key>)`
//! reference, using the literal category name (`palette`, `spacing`, `size`,
//! `zIndex`, `container`). This is not the prefix scheme of the stylesheet
//! (`--color-*`, `--space-*`, `--z-*`), and the two are not reconciled.
//!
//! No validation or resolution happens here. A theme with dangling palette
//! references still produces a config.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::theme::{BaseCategory, Theme};

/// Header written above the generated TypeScript module.
pub const TS_HEADER: &str = "// Auto-generated from theme tokens\n// Do not edit manually\n";

/// Flat variable-reference mapping consumed by Tailwind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TailwindConfig {
    pub colors: IndexMap<String, String>,
    pub spacing: IndexMap<String, String>,
    /// Sizes plus containers, the latter keyed `container-<key>`.
    pub sizes: IndexMap<String, String>,
    #[serde(rename = "zIndex")]
    pub z_index: IndexMap<String, String>,
}

/// Builds the Tailwind config for a theme.
///
/// # Example
///
/// ```rust
/// use tokensmith::{build_tailwind_config, Theme};
///
/// let theme = Theme::new("t").spacing("sm", "0.5rem").container("md", "64rem");
/// let config = build_tailwind_config(&theme);
///
/// assert_eq!(config.spacing["sm"], "var(--spacing-sm)");
/// assert_eq!(config.sizes["container-md"], "var(--container-md)");
/// ```
pub fn build_tailwind_config(theme: &Theme) -> TailwindConfig {
    let mut config = TailwindConfig::default();

    for category in BaseCategory::ALL {
        for key in theme.base.category(category).keys() {
            let reference = format!("var(--{}-{})", category.name(), key);
            match category {
                BaseCategory::Palette => config.colors.insert(key.clone(), reference),
                BaseCategory::Spacing => config.spacing.insert(key.clone(), reference),
                BaseCategory::Size => config.sizes.insert(key.clone(), reference),
                BaseCategory::ZIndex => config.z_index.insert(key.clone(), reference),
                BaseCategory::Container => {
                    config.sizes.insert(format!("container-{}", key), reference)
                }
            };
        }
    }

    debug!(
        theme = %theme.name,
        colors = config.colors.len(),
        sizes = config.sizes.len(),
        "built Tailwind config"
    );

    config
}

/// Renders the config as a TypeScript module exporting `themeTailwind`.
///
/// The object is pretty-printed JSON with two-space indentation, fields in
/// the order `colors`, `spacing`, `sizes`, `zIndex`.
pub fn render_tailwind_ts(config: &TailwindConfig) -> Result<String, serde_json::Error> {
    let body = serde_json::to_string_pretty(config)?;
    Ok(format!(
        "{}\nexport const themeTailwind = {} as const;\n",
        TS_HEADER, body
    ))
}

//! The theme model: base token categories plus light/dark semantic mappings.
//!
//! A [`Theme`] is plain data. It can be built in code with the consuming
//! builder methods, or loaded from a YAML or JSON document:
//!
//! ```rust
//! use tokensmith::Theme;
//!
//! let theme = Theme::from_yaml(r##"
//! name: brand
//! base:
//!   palette:
//!     white: "#ffffff"
//!     black: "#000000"
//!   spacing:
//!     sm: 0.5rem
//!   zIndex:
//!     modal: 10
//! light:
//!   bg:
//!     background: white palette
//! dark:
//!   bg:
//!     background: black palette
//! "##).unwrap();
//!
//! assert_eq!(theme.base.z_index["modal"], "10");
//! assert_eq!(theme.palette_keys(), vec!["white", "black"]);
//! ```
//!
//! Every category keeps its entries in document order; the generators rely on
//! that order for reproducible output. A key may appear only once per
//! category.

use std::fmt;
use std::path::Path;

use indexmap::IndexMap;
use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};

use crate::error::ThemeError;

/// Ordered mapping from token name to its raw value string.
pub type TokenMap = IndexMap<String, String>;

/// The five fixed base token categories.
///
/// Each category has two names: the literal category name used for Tailwind
/// references (`var(--zIndex-modal)`) and the shorter prefix used for the CSS
/// custom properties (`--z-modal`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseCategory {
    Palette,
    Spacing,
    Size,
    ZIndex,
    Container,
}

impl BaseCategory {
    /// All categories in generation order.
    pub const ALL: [BaseCategory; 5] = [
        BaseCategory::Palette,
        BaseCategory::Spacing,
        BaseCategory::Size,
        BaseCategory::ZIndex,
        BaseCategory::Container,
    ];

    /// The category name as written in theme documents.
    pub fn name(self) -> &'static str {
        match self {
            BaseCategory::Palette => "palette",
            BaseCategory::Spacing => "spacing",
            BaseCategory::Size => "size",
            BaseCategory::ZIndex => "zIndex",
            BaseCategory::Container => "container",
        }
    }

    /// Prefix of the CSS custom properties emitted for this category.
    pub fn css_prefix(self) -> &'static str {
        match self {
            BaseCategory::Palette => "color",
            BaseCategory::Spacing => "space",
            BaseCategory::Size => "size",
            BaseCategory::ZIndex => "z",
            BaseCategory::Container => "container",
        }
    }
}

impl fmt::Display for BaseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Light or dark display mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    /// Both modes, light first.
    pub const ALL: [ThemeMode; 2] = [ThemeMode::Light, ThemeMode::Dark];

    /// CSS selector whose block carries this mode's `--mode-*` variables.
    pub fn selector(self) -> &'static str {
        match self {
            ThemeMode::Light => ":root",
            ThemeMode::Dark => ".dark",
        }
    }

    /// Field name of this mode in theme documents and field paths.
    pub fn field(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

/// Raw design values, one map per base category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseTokens {
    /// Color name → literal CSS color.
    #[serde(default, deserialize_with = "token_map")]
    pub palette: TokenMap,
    #[serde(default, deserialize_with = "token_map")]
    pub spacing: TokenMap,
    #[serde(default, deserialize_with = "token_map")]
    pub size: TokenMap,
    #[serde(default, rename = "zIndex", deserialize_with = "token_map")]
    pub z_index: TokenMap,
    #[serde(default, deserialize_with = "token_map")]
    pub container: TokenMap,
}

impl BaseTokens {
    /// Returns the entries of one category.
    pub fn category(&self, category: BaseCategory) -> &TokenMap {
        match category {
            BaseCategory::Palette => &self.palette,
            BaseCategory::Spacing => &self.spacing,
            BaseCategory::Size => &self.size,
            BaseCategory::ZIndex => &self.z_index,
            BaseCategory::Container => &self.container,
        }
    }

    fn category_mut(&mut self, category: BaseCategory) -> &mut TokenMap {
        match category {
            BaseCategory::Palette => &mut self.palette,
            BaseCategory::Spacing => &mut self.spacing,
            BaseCategory::Size => &mut self.size,
            BaseCategory::ZIndex => &mut self.z_index,
            BaseCategory::Container => &mut self.container,
        }
    }
}

/// Semantic tokens for one display mode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeTokens {
    /// Semantic background name → `"<paletteKey> palette"`.
    #[serde(default, deserialize_with = "token_map")]
    pub bg: TokenMap,
}

/// A complete theme definition.
///
/// # Example
///
/// ```rust
/// use tokensmith::{build_css_variables, Theme};
///
/// let theme = Theme::new("brand")
///     .palette("white", "#fff")
///     .palette("black", "#000")
///     .spacing("sm", "0.5rem")
///     .light_bg("background", "white palette")
///     .dark_bg("background", "black palette");
///
/// let css = build_css_variables(&theme).unwrap();
/// assert!(css.contains("--mode-background: var(--color-white);"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    /// Informational identifier.
    pub name: String,
    #[serde(default)]
    pub base: BaseTokens,
    #[serde(default)]
    pub light: ModeTokens,
    #[serde(default)]
    pub dark: ModeTokens,
}

impl Theme {
    /// Creates an empty theme with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets a token in a base category, returning `self` for chaining.
    ///
    /// Setting an existing key replaces its value and keeps its position.
    pub fn token(
        mut self,
        category: BaseCategory,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.base
            .category_mut(category)
            .insert(key.into(), value.into());
        self
    }

    pub fn palette(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.token(BaseCategory::Palette, key, value)
    }

    pub fn spacing(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.token(BaseCategory::Spacing, key, value)
    }

    pub fn size(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.token(BaseCategory::Size, key, value)
    }

    pub fn z_index(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.token(BaseCategory::ZIndex, key, value)
    }

    pub fn container(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.token(BaseCategory::Container, key, value)
    }

    /// Sets a semantic background for one mode.
    pub fn bg(mut self, mode: ThemeMode, key: impl Into<String>, value: impl Into<String>) -> Self {
        let tokens = match mode {
            ThemeMode::Light => &mut self.light,
            ThemeMode::Dark => &mut self.dark,
        };
        tokens.bg.insert(key.into(), value.into());
        self
    }

    pub fn light_bg(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.bg(ThemeMode::Light, key, value)
    }

    pub fn dark_bg(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.bg(ThemeMode::Dark, key, value)
    }

    /// Returns the semantic tokens of one mode.
    pub fn mode(&self, mode: ThemeMode) -> &ModeTokens {
        match mode {
            ThemeMode::Light => &self.light,
            ThemeMode::Dark => &self.dark,
        }
    }

    /// Palette keys in theme order.
    pub fn palette_keys(&self) -> Vec<String> {
        self.base.palette.keys().cloned().collect()
    }

    /// Parses a theme from a YAML document.
    pub fn from_yaml(yaml: &str) -> Result<Self, ThemeError> {
        serde_yaml::from_str(yaml).map_err(|e| ThemeError::Parse {
            path: None,
            message: e.to_string(),
        })
    }

    /// Parses a theme from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ThemeError> {
        serde_json::from_str(json).map_err(|e| ThemeError::Parse {
            path: None,
            message: e.to_string(),
        })
    }

    /// Loads a theme file, choosing the format from its extension.
    ///
    /// `.yaml` and `.yml` are read as YAML, `.json` as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::UnsupportedFormat`] for any other extension,
    /// [`ThemeError::Load`] if the file cannot be read, and
    /// [`ThemeError::Parse`] if its content is not a valid theme.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ThemeError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        let parse: fn(&str) -> Result<Self, ThemeError> = match extension.as_deref() {
            Some("yaml") | Some("yml") => Self::from_yaml,
            Some("json") => Self::from_json,
            _ => {
                return Err(ThemeError::UnsupportedFormat {
                    path: path.to_path_buf(),
                })
            }
        };

        let content = std::fs::read_to_string(path).map_err(|source| ThemeError::Load {
            path: path.to_path_buf(),
            source,
        })?;

        parse(&content).map_err(|err| match err {
            ThemeError::Parse { message, .. } => ThemeError::Parse {
                path: Some(path.to_path_buf()),
                message,
            },
            other => other,
        })
    }
}

// =============================================================================
// Token map deserialization
// =============================================================================

/// Deserializes a category, rejecting repeated keys and accepting bare numbers.
fn token_map<'de, D>(deserializer: D) -> Result<TokenMap, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_map(TokenMapVisitor)
}

struct TokenMapVisitor;

impl<'de> Visitor<'de> for TokenMapVisitor {
    type Value = TokenMap;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a mapping of token names to values")
    }

    fn visit_unit<E: de::Error>(self) -> Result<TokenMap, E> {
        Ok(TokenMap::new())
    }

    fn visit_map<A>(self, mut access: A) -> Result<TokenMap, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut map = TokenMap::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((TokenText(key), TokenText(value))) =
            access.next_entry::<TokenText, TokenText>()?
        {
            if map.contains_key(&key) {
                return Err(de::Error::custom(format_args!("duplicate token `{}`", key)));
            }
            map.insert(key, value);
        }
        Ok(map)
    }
}

/// A token name or value written either as a string or as a bare number.
struct TokenText(String);

impl<'de> Deserialize<'de> for TokenText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(TokenTextVisitor)
    }
}

struct TokenTextVisitor;

impl Visitor<'_> for TokenTextVisitor {
    type Value = TokenText;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string or number")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<TokenText, E> {
        Ok(TokenText(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<TokenText, E> {
        Ok(TokenText(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<TokenText, E> {
        Ok(TokenText(v.to_string()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<TokenText, E> {
        Ok(TokenText(v.to_string()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<TokenText, E> {
        Ok(TokenText(v.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Category naming
    // =========================================================================

    #[test]
    fn test_category_names_and_prefixes_differ() {
        let pairs: Vec<_> = BaseCategory::ALL
            .iter()
            .map(|c| (c.name(), c.css_prefix()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("palette", "color"),
                ("spacing", "space"),
                ("size", "size"),
                ("zIndex", "z"),
                ("container", "container"),
            ]
        );
    }

    #[test]
    fn test_mode_selectors() {
        assert_eq!(ThemeMode::Light.selector(), ":root");
        assert_eq!(ThemeMode::Dark.selector(), ".dark");
        assert_eq!(ThemeMode::Dark.field(), "dark");
    }

    // =========================================================================
    // Builder
    // =========================================================================

    #[test]
    fn test_builder_preserves_insertion_order() {
        let theme = Theme::new("t")
            .palette("zeta", "#111")
            .palette("alpha", "#222")
            .palette("mid", "#333");
        assert_eq!(theme.palette_keys(), vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_builder_replace_keeps_position() {
        let theme = Theme::new("t")
            .spacing("sm", "1px")
            .spacing("md", "2px")
            .spacing("sm", "3px");
        let entries: Vec<_> = theme.base.spacing.iter().collect();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], (&"sm".to_string(), &"3px".to_string()));
    }

    #[test]
    fn test_builder_routes_categories() {
        let theme = Theme::new("t")
            .size("lg", "3rem")
            .z_index("modal", "10")
            .container("md", "64rem")
            .light_bg("root", "white palette")
            .dark_bg("root", "black palette");

        assert_eq!(theme.base.category(BaseCategory::Size)["lg"], "3rem");
        assert_eq!(theme.base.category(BaseCategory::ZIndex)["modal"], "10");
        assert_eq!(theme.base.category(BaseCategory::Container)["md"], "64rem");
        assert_eq!(theme.mode(ThemeMode::Light).bg["root"], "white palette");
        assert_eq!(theme.mode(ThemeMode::Dark).bg["root"], "black palette");
    }

    // =========================================================================
    // Loading
    // =========================================================================

    #[test]
    fn test_from_yaml_full_document() {
        let yaml = r##"
name: sample
base:
  palette:
    primary: "#0070f3"
    white: "#ffffff"
  spacing:
    sm: 0.5rem
  size:
    small: 2rem
  zIndex:
    dropdown: 1000
  container:
    sm: 40rem
light:
  bg:
    background: white palette
dark:
  bg:
    background: primary palette
"##;
        let theme = Theme::from_yaml(yaml).unwrap();
        assert_eq!(theme.name, "sample");
        assert_eq!(theme.palette_keys(), vec!["primary", "white"]);
        assert_eq!(theme.base.spacing["sm"], "0.5rem");
        assert_eq!(theme.base.z_index["dropdown"], "1000");
        assert_eq!(theme.base.container["sm"], "40rem");
        assert_eq!(theme.light.bg["background"], "white palette");
        assert_eq!(theme.dark.bg["background"], "primary palette");
    }

    #[test]
    fn test_from_yaml_defaults_missing_sections() {
        let theme = Theme::from_yaml("name: bare").unwrap();
        assert!(theme.base.palette.is_empty());
        assert!(theme.light.bg.is_empty());
        assert!(theme.dark.bg.is_empty());
    }

    #[test]
    fn test_from_yaml_numeric_values_become_text() {
        let yaml = "name: n\nbase:\n  zIndex:\n    modal: 10\n    overlay: -1\n    half: 1.5\n";
        let theme = Theme::from_yaml(yaml).unwrap();
        assert_eq!(theme.base.z_index["modal"], "10");
        assert_eq!(theme.base.z_index["overlay"], "-1");
        assert_eq!(theme.base.z_index["half"], "1.5");
    }

    #[test]
    fn test_from_yaml_numeric_keys() {
        let yaml = "name: n\nbase:\n  zIndex:\n    100: 100\n";
        let theme = Theme::from_yaml(yaml).unwrap();
        assert_eq!(theme.base.z_index["100"], "100");
    }

    #[test]
    fn test_from_yaml_ignores_unknown_categories() {
        let yaml = "name: n\nbase:\n  shadow:\n    sm: 0 1px 2px\n  spacing:\n    sm: 1px\n";
        let theme = Theme::from_yaml(yaml).unwrap();
        assert_eq!(theme.base.spacing.len(), 1);
    }

    #[test]
    fn test_from_json_rejects_duplicate_keys() {
        let json = r##"{"name":"d","base":{"palette":{"red":"#f00","red":"#e00"}}}"##;
        let err = Theme::from_json(json).unwrap_err();
        assert!(err.to_string().contains("duplicate token `red`"));
    }

    #[test]
    fn test_from_yaml_requires_name() {
        let err = Theme::from_yaml("base: {}").unwrap_err();
        assert!(matches!(err, ThemeError::Parse { path: None, .. }));
    }

    #[test]
    fn test_from_file_dispatches_on_extension() {
        let dir = tempfile::tempdir().unwrap();

        let yaml_path = dir.path().join("brand.yml");
        std::fs::write(&yaml_path, "name: from-yaml\n").unwrap();
        assert_eq!(Theme::from_file(&yaml_path).unwrap().name, "from-yaml");

        let json_path = dir.path().join("brand.JSON");
        std::fs::write(&json_path, r#"{"name": "from-json"}"#).unwrap();
        assert_eq!(Theme::from_file(&json_path).unwrap().name, "from-json");
    }

    #[test]
    fn test_from_file_unsupported_extension() {
        let err = Theme::from_file("theme.toml").unwrap_err();
        assert!(matches!(err, ThemeError::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_from_file_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Theme::from_file(dir.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(err, ThemeError::Load { .. }));
    }

    #[test]
    fn test_from_file_parse_error_carries_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.yaml");
        std::fs::write(&path, "name: [unclosed").unwrap();
        match Theme::from_file(&path).unwrap_err() {
            ThemeError::Parse { path: Some(p), .. } => assert_eq!(p, path),
            other => panic!("Expected Parse with path, got {:?}", other),
        }
    }
}

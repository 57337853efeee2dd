//! # Tokensmith - Design Token Compiler
//!
//! `tokensmith` compiles a theme (a color palette, spacing, size, z-index
//! and container scales, plus light/dark semantic backgrounds) into two
//! artifacts:
//!
//! - a CSS stylesheet of custom properties ([`build_css_variables`])
//! - a flat key → `var(...)` mapping for Tailwind ([`build_tailwind_config`])
//!
//! ## Core Concepts
//!
//! - [`Theme`]: the token source, built in code or loaded from YAML/JSON
//! - Palette reference: a value written `"<key> palette"`, pointing at a
//!   palette color
//! - [`ValueNode`]: typed form of a value such as `"1.5 em"` or `"2 base"`
//! - [`ReferenceError`]: raised when a palette reference names a missing color
//!
//! ## Quick Start
//!
//! ```rust
//! use tokensmith::{build_css_variables, build_tailwind_config, Theme};
//!
//! let theme = Theme::new("brand")
//!     .palette("white", "#ffffff")
//!     .palette("ink", "#111111")
//!     .spacing("sm", "0.5rem")
//!     .light_bg("background", "white palette")
//!     .dark_bg("background", "ink palette");
//!
//! let css = build_css_variables(&theme).unwrap();
//! assert!(css.contains("--color-white: #ffffff;"));
//! assert!(css.contains("--space-sm: 0.5rem;"));
//!
//! let config = build_tailwind_config(&theme);
//! assert_eq!(config.spacing["sm"], "var(--spacing-sm)");
//! ```
//!
//! ## Validation
//!
//! The stylesheet generator validates every palette reference in
//! `light.bg`, `dark.bg`, `base.spacing` and `base.size` before producing
//! any text, and fails on the first dangling one:
//!
//! ```rust
//! use tokensmith::{build_css_variables, Theme};
//!
//! let theme = Theme::new("broken")
//!     .palette("white", "#fff")
//!     .light_bg("background", "snow palette");
//!
//! let err = build_css_variables(&theme).unwrap_err();
//! assert!(err.to_string().contains("light.bg.background"));
//! ```
//!
//! The Tailwind config never validates; it only emits symbolic references.

mod css;
mod demo;
mod error;
pub mod output;
mod resolve;
mod tailwind;
mod theme;
mod value;

// Error types
pub use error::{GenerateError, ParseError, ReferenceError, ThemeError, VALID_UNITS};

// Theme model
pub use theme::{BaseCategory, BaseTokens, ModeTokens, Theme, ThemeMode, TokenMap};

// Value grammar
pub use value::{parse_value, resolve_value_node, ValueNode};

// Reference resolution and validation
pub use resolve::{
    resolve_css_value, resolve_node, validate_palette_references,
    validate_theme_palette_references,
};

// Generators
pub use css::build_css_variables;
pub use tailwind::{build_tailwind_config, render_tailwind_ts, TailwindConfig, TS_HEADER};

// File writers
pub use output::{write_output, write_tailwind_ts, write_theme_css};

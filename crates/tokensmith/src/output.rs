//! Writing generated artifacts to disk.
//!
//! Both writers generate their text before touching the filesystem, so a
//! theme that fails validation leaves no directories or partial files
//! behind. Relative paths are resolved against the current directory.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::css::build_css_variables;
use crate::error::GenerateError;
use crate::tailwind::{build_tailwind_config, render_tailwind_ts};
use crate::theme::Theme;

/// Writes `contents` to `path`, creating missing parent directories.
///
/// Returns the absolute path that was written.
pub fn write_output(path: &Path, contents: &str) -> Result<PathBuf, GenerateError> {
    let full_path = absolute(path)?;

    if let Some(parent) = full_path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| GenerateError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    std::fs::write(&full_path, contents).map_err(|source| GenerateError::Write {
        path: full_path.clone(),
        source,
    })?;

    info!(path = %full_path.display(), bytes = contents.len(), "wrote artifact");
    Ok(full_path)
}

/// Generates the theme stylesheet and writes it to `path`.
pub fn write_theme_css(theme: &Theme, path: impl AsRef<Path>) -> Result<PathBuf, GenerateError> {
    let css = build_css_variables(theme)?;
    let written = write_output(path.as_ref(), &css)?;
    info!(path = %written.display(), "generated CSS variables");
    Ok(written)
}

/// Generates the Tailwind config module and writes it to `path`.
pub fn write_tailwind_ts(theme: &Theme, path: impl AsRef<Path>) -> Result<PathBuf, GenerateError> {
    let module = render_tailwind_ts(&build_tailwind_config(theme))?;
    let written = write_output(path.as_ref(), &module)?;
    info!(path = %written.display(), "generated Tailwind config");
    Ok(written)
}

fn absolute(path: &Path) -> Result<PathBuf, GenerateError> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir().map_err(|source| GenerateError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(cwd.join(path))
}

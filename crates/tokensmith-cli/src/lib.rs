//! Command-line front end for `tokensmith`.
//!
//! The binary is a thin shell around [`run`], which takes parsed arguments
//! and a writer for stdout so the commands can be driven in-process by
//! tests.
//!
//! ```text
//! tokensmith generate [--theme FILE] [--css PATH] [--config PATH]
//! tokensmith check    [--theme FILE]
//! tokensmith print    <css|config> [--theme FILE]
//! ```
//!
//! Without `--theme`, commands use the built-in demo theme.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use tokensmith::{
    build_css_variables, build_tailwind_config, render_tailwind_ts,
    validate_theme_palette_references, write_tailwind_ts, write_theme_css, Theme,
};

/// Default stylesheet destination, relative to the working directory.
pub const DEFAULT_CSS_PATH: &str = "./styles/theme.css";

/// Default Tailwind module destination, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "./lib/generated/tailwind-theme.ts";

/// Compile design tokens into CSS variables and a Tailwind theme config.
#[derive(Debug, Parser)]
#[command(name = "tokensmith", version)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Write the stylesheet and the Tailwind config module
    Generate {
        #[command(flatten)]
        source: ThemeSource,

        /// Stylesheet destination
        #[arg(long, value_name = "PATH", default_value = DEFAULT_CSS_PATH)]
        css: PathBuf,

        /// Tailwind config module destination
        #[arg(long, value_name = "PATH", default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,
    },

    /// Validate palette references without writing anything
    Check {
        #[command(flatten)]
        source: ThemeSource,
    },

    /// Print a generated artifact to stdout
    Print {
        /// Which artifact to print
        #[arg(value_enum)]
        artifact: Artifact,

        #[command(flatten)]
        source: ThemeSource,
    },
}

#[derive(Debug, Clone, Args)]
pub struct ThemeSource {
    /// Theme file (.yaml, .yml or .json); defaults to the built-in demo theme
    #[arg(long, value_name = "FILE")]
    pub theme: Option<PathBuf>,
}

impl ThemeSource {
    fn load(&self) -> Result<Theme> {
        match &self.theme {
            Some(path) => {
                debug!(path = %path.display(), "loading theme");
                Theme::from_file(path)
                    .with_context(|| format!("could not load theme from {}", path.display()))
            }
            None => {
                debug!("using demo theme");
                Ok(Theme::demo())
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Artifact {
    /// The CSS custom-property stylesheet
    Css,
    /// The Tailwind config TypeScript module
    Config,
}

/// Runs a parsed command, writing user-facing output to `out`.
pub fn run(cli: &Cli, out: &mut dyn Write) -> Result<()> {
    match &cli.command {
        Command::Generate { source, css, config } => {
            let theme = source.load()?;
            generate(&theme, css, config, out)
        }
        Command::Check { source } => {
            let theme = source.load()?;
            validate_theme_palette_references(&theme)
                .with_context(|| format!("theme '{}' has invalid palette references", theme.name))?;
            writeln!(out, "Theme '{}' is valid", theme.name)?;
            Ok(())
        }
        Command::Print { artifact, source } => {
            let theme = source.load()?;
            let text = match artifact {
                Artifact::Css => build_css_variables(&theme)?,
                Artifact::Config => render_tailwind_ts(&build_tailwind_config(&theme))?,
            };
            write!(out, "{}", text)?;
            if !text.ends_with('\n') {
                writeln!(out)?;
            }
            Ok(())
        }
    }
}

fn generate(theme: &Theme, css: &Path, config: &Path, out: &mut dyn Write) -> Result<()> {
    info!(theme = %theme.name, "generating theme files");

    let css_path = write_theme_css(theme, css)
        .with_context(|| format!("could not generate {}", css.display()))?;
    writeln!(out, "Generated CSS variables at {}", css_path.display())?;

    let config_path = write_tailwind_ts(theme, config)
        .with_context(|| format!("could not generate {}", config.display()))?;
    writeln!(out, "Generated Tailwind config at {}", config_path.display())?;

    Ok(())
}

/// Log filter directive for the given flags.
pub fn log_level(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Installs the stderr log subscriber. `RUST_LOG` takes precedence over the
/// flags. Does nothing if a subscriber is already installed.
pub fn init_logging(verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level(verbose, quiet)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

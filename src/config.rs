//! Command line configuration and site settings file.

use anyhow::{Result, bail};
use clap::Parser;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::generators::SiteOptions;

const DEFAULT_SITE_NAME: &str = "Blog";
const DEFAULT_BASE_URL: &str = "http://localhost";

/// Command line configuration for Folio.
#[derive(Debug, Clone, Parser)]
#[command(name = "folio", version, about, long_about = None)]
pub struct Config {
    /// Directory containing Markdown posts
    #[arg(default_value = "posts")]
    pub posts: PathBuf,

    /// Output directory
    #[arg(short, long, default_value = "dist")]
    pub output: PathBuf,

    /// Site name (overrides settings file)
    #[arg(long)]
    pub name: Option<String>,

    /// Absolute site URL used in the sitemap (overrides settings file)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Path to a TOML settings file
    #[arg(long)]
    pub settings: Option<PathBuf>,

    /// Do not open the generated index in a browser
    #[arg(long)]
    pub no_open: bool,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the posts directory or an explicit settings file
    /// does not exist.
    pub fn validate(&self) -> Result<()> {
        if !self.posts.is_dir() {
            bail!("Posts directory does not exist: {}", self.posts.display());
        }

        if let Some(settings) = &self.settings
            && !settings.is_file()
        {
            bail!("Settings file does not exist: {}", settings.display());
        }

        Ok(())
    }

    /// Merges command line values over optional file settings.
    ///
    /// Command line values win; missing values fall back to the settings
    /// file, then to built-in defaults.
    pub fn site_options(&self, settings: Option<SiteSettings>) -> SiteOptions {
        let settings = settings.unwrap_or_default();

        SiteOptions {
            output: self.output.clone(),
            name: self
                .name
                .clone()
                .or(settings.name)
                .unwrap_or_else(|| DEFAULT_SITE_NAME.to_string()),
            description: settings.description,
            base_url: self
                .base_url
                .clone()
                .or(settings.base_url)
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }
}

/// Errors produced while loading the settings file.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to read settings file at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse settings file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Site settings loaded from a TOML file.
///
/// ```toml
/// name = "Writing"
/// base_url = "https://example.com"
/// description = "Notes on building software"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteSettings {
    pub name: Option<String>,
    pub base_url: Option<String>,
    pub description: Option<String>,
}

impl SiteSettings {
    /// Loads settings from a TOML file.
    ///
    /// # Returns
    ///
    /// `Ok(None)` when the file does not exist
    ///
    /// # Errors
    ///
    /// Returns error if the file exists but cannot be read or parsed
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Option<Self>, SettingsError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let settings = toml::from_str(&content).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Some(settings))
    }
}

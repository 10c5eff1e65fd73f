//! Site configuration management for `quill.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── cms        # [cms], [[cms.collections]]
//! │   ├── site       # [site], [site.logo], locale
//! │   └── social     # [[socials]]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # SiteConfig, Site (this file)
//! ```
//!
//! # Loading
//!
//! [`SiteConfig`] mirrors the file. [`SiteConfig::into_site`] validates it
//! and resolves everything derived from it (link titles, editing branch,
//! locale list) into a [`Site`], which is immutable from then on and is
//! handed by reference to whatever renders or edits the blog.

pub mod section;
pub mod types;
mod util;

pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};
pub use util::{find_config_file, process_env};

use crate::log;
use section::{
    CmsConfig, LocaleList, LogoConfig, SiteInfoConfig, SocialCatalog, SocialLinkConfig,
};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Default config filename
pub const CONFIG_FILE: &str = "quill.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing quill.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Path the config was read from (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Site metadata, locale and logo
    #[serde(default)]
    pub site: SiteInfoConfig,

    /// Social links in display order
    #[serde(default)]
    pub socials: Vec<SocialLinkConfig>,

    /// Content schema and editor settings
    #[serde(default)]
    pub cms: CmsConfig,
}

impl SiteConfig {
    /// Read, validate and resolve the config at `path` against the process
    /// environment.
    pub fn load(path: &Path) -> Result<Site, ConfigError> {
        Self::from_path(path)?.into_site(process_env)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from file path with unknown field detection.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (mut config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        config.config_path = path.to_path_buf();
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    pub fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {field}");
        }
    }

    /// Validate every section.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate(&mut diag);
        self.cms.validate(&mut diag);

        diag.print_warnings();
        diag.into_result().map_err(ConfigError::Diagnostics)
    }

    /// Validate and resolve into the immutable [`Site`].
    ///
    /// `lookup` reads environment variables (branch and locale resolution).
    pub fn into_site<F>(self, lookup: F) -> Result<Site, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        self.validate()?;

        // Metadata is known to be valid here, titles can be interpolated.
        let socials = SocialCatalog::build(&self.site, &self.socials)?;
        let branch = self.cms.resolve_branch(&lookup);
        let locale = LocaleList::new(self.site.locale.clone());

        crate::debug!(
            "config";
            "loaded {} social links, {} collections, branch `{}`",
            socials.len(),
            self.cms.collections.len(),
            branch
        );

        Ok(Site {
            config_path: self.config_path,
            info: self.site,
            locale,
            socials,
            cms: self.cms,
            branch,
        })
    }
}

// ============================================================================
// loaded site
// ============================================================================

/// Validated, fully resolved configuration.
///
/// Built once at startup and never mutated; share it by reference.
#[derive(Debug, Clone)]
pub struct Site {
    /// Path the config was read from (empty when built from a string)
    pub config_path: PathBuf,
    pub info: SiteInfoConfig,
    pub locale: LocaleList,
    pub socials: SocialCatalog,
    pub cms: CmsConfig,
    /// Branch the editing tool commits to
    pub branch: String,
}

impl Site {
    #[inline]
    pub fn logo(&self) -> &LogoConfig {
        &self.info.logo
    }

    /// Directory containing the config file, the project root.
    pub fn root(&self) -> &Path {
        self.config_path.parent().unwrap_or(Path::new(""))
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Minimal valid `[site]` table for tests.
#[cfg(test)]
pub const TEST_SITE: &str = r#"[site]
website = "https://example.com/"
author = "Alice"
desc = "A test blog"
title = "Test Blog"
"#;

/// Parse config with a minimal `[site]` table.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let config = format!("{TEST_SITE}{extra}");
    let (parsed, ignored) = SiteConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

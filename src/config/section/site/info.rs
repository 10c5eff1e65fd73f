//! `[site]` configuration.
//!
//! Basic site information: canonical URL, author, title, description,
//! social preview image, theme toggle and pagination size.

use super::{LogoConfig, locale};
use crate::config::ConfigDiagnostics;
use macros::Config;
use serde::{Deserialize, Serialize};

/// Social preview image used when `og_image` is not set.
pub const DEFAULT_OG_IMAGE: &str = "og.jpg";

/// Site metadata consumed by the page renderer.
#[derive(Debug, Clone, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "site")]
pub struct SiteInfoConfig {
    /// Canonical site URL.
    #[config(default = "https://example.com/", inline_doc)]
    pub website: String,

    /// Author name.
    #[config(default = "Your Name", inline_doc)]
    pub author: String,

    /// Site description.
    #[config(default = "A personal blog", inline_doc)]
    pub desc: String,

    /// Site title.
    #[config(default = "My Blog", inline_doc)]
    pub title: String,

    /// Default social preview image, relative to the public folder.
    #[config(inline_doc)]
    pub og_image: Option<String>,

    /// Show the light/dark theme switcher.
    #[config(default = "true", inline_doc)]
    pub light_and_dark_mode: bool,

    /// Number of posts per index page.
    #[config(default = "4", inline_doc)]
    pub post_per_page: i64,

    /// Locale tags (BCP 47). Empty means the environment default.
    #[config(default = "[]", inline_doc)]
    pub locale: Vec<String>,

    /// Logo display options (`[site.logo]`).
    #[config(skip)]
    pub logo: LogoConfig,
}

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            website: String::new(),
            author: String::new(),
            desc: String::new(),
            title: String::new(),
            og_image: None,
            light_and_dark_mode: true,
            post_per_page: 4,
            locale: Vec::new(),
            logo: LogoConfig::default(),
        }
    }
}

impl SiteInfoConfig {
    /// Social preview image, falling back to [`DEFAULT_OG_IMAGE`].
    pub fn og_image(&self) -> &str {
        self.og_image.as_deref().unwrap_or(DEFAULT_OG_IMAGE)
    }

    /// Absolute URL of the social preview image, resolved against `website`.
    pub fn og_image_url(&self) -> Option<String> {
        let base = url::Url::parse(&self.website).ok()?;
        base.join(self.og_image()).ok().map(String::from)
    }

    /// Validate site metadata.
    ///
    /// # Checks
    /// - `website` must be an absolute http(s) URL with a host
    /// - `author`, `desc` and `title` must not be empty
    /// - `og_image`, when set, must not be empty
    /// - `post_per_page` must be positive
    /// - `locale` tags must be well-formed
    /// - `[site.logo]` dimensions must be positive when enabled
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        self.validate_website(diag);

        for (field, value) in [
            (Self::FIELDS.author, &self.author),
            (Self::FIELDS.desc, &self.desc),
            (Self::FIELDS.title, &self.title),
        ] {
            if value.trim().is_empty() {
                diag.error(field, "must not be empty");
            }
        }

        if self.og_image.as_deref().is_some_and(|img| img.trim().is_empty()) {
            diag.error_with_hint(
                Self::FIELDS.og_image,
                "must not be empty",
                format!("remove the key to use the default \"{DEFAULT_OG_IMAGE}\""),
            );
        }

        if self.post_per_page <= 0 {
            diag.error_with_hint(
                Self::FIELDS.post_per_page,
                format!("must be a positive integer, got {}", self.post_per_page),
                "e.g.: post_per_page = 4",
            );
        }

        locale::validate_tags(&self.locale, Self::FIELDS.locale, diag);
        self.logo.validate(diag);
    }

    fn validate_website(&self, diag: &mut ConfigDiagnostics) {
        if self.website.trim().is_empty() {
            diag.error_with_hint(
                Self::FIELDS.website,
                "must not be empty",
                "set it to the canonical URL, e.g.: \"https://example.com/\"",
            );
            return;
        }
        // `Url::parse` ignores surrounding spaces.
        if self.website.trim() != self.website {
            diag.error_with_hint(
                Self::FIELDS.website,
                "must not have leading or trailing whitespace",
                format!("use \"{}\"", self.website.trim()),
            );
            return;
        }

        match url::Url::parse(&self.website) {
            Ok(parsed) => {
                if !matches!(parsed.scheme(), "http" | "https") {
                    diag.error_with_hint(
                        Self::FIELDS.website,
                        format!(
                            "scheme '{}' not supported, must be http or https",
                            parsed.scheme()
                        ),
                        "use format like https://example.com/",
                    );
                } else if parsed.host_str().is_none_or(str::is_empty) {
                    diag.error_with_hint(
                        Self::FIELDS.website,
                        "URL must have a valid host",
                        "use format like https://example.com/",
                    );
                }
            }
            Err(e) => {
                diag.error_with_hint(
                    Self::FIELDS.website,
                    format!("invalid URL: {e}"),
                    "use format like https://example.com/",
                );
            }
        }
    }
}

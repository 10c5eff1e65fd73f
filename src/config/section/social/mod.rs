//! `[[socials]]` configuration.
//!
//! Declaration order is display order. Inactive entries stay in the catalog
//! so they can be switched back on without re-authoring them.
//!
//! # Example
//!
//! ```toml
//! [[socials]]
//! name = "Github"
//! href = "https://github.com/alice"
//! link_title = "{author} on Github"
//!
//! [[socials]]
//! name = "Mail"
//! href = "mailto:alice@example.com"
//!
//! [[socials]]
//! name = "Twitch"
//! href = "https://twitch.tv/alice"
//! active = false
//! ```

mod platform;
mod title;

pub use platform::SocialPlatform;
pub use title::{TemplateError, TitleTemplate};

use crate::config::{ConfigDiagnostics, ConfigError, FieldPath, section::SiteInfoConfig};
use serde::{Deserialize, Serialize};

const SECTION: &str = "socials";

/// One `[[socials]]` declaration as written in `quill.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinkConfig {
    /// Platform, selects the icon.
    pub name: SocialPlatform,

    /// Link target. Non-HTTP schemes such as `mailto:` are allowed.
    pub href: String,

    /// Title template; defaults to the platform's template.
    #[serde(default)]
    pub link_title: Option<String>,

    /// Show the link.
    #[serde(default = "default_active")]
    pub active: bool,
}

const fn default_active() -> bool {
    true
}

impl SocialLinkConfig {
    /// Template for this entry's title, explicit or platform default.
    pub fn title_template(&self) -> Result<TitleTemplate, TemplateError> {
        match &self.link_title {
            Some(template) => TitleTemplate::parse(template),
            None => TitleTemplate::parse(&self.name.default_title_template()),
        }
    }
}

/// A social link with its title resolved against the site metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    #[serde(rename = "name")]
    pub platform: SocialPlatform,
    pub href: String,
    pub link_title: String,
    pub active: bool,
}

/// Ordered, validated social links.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SocialCatalog {
    links: Vec<SocialLink>,
}

impl SocialCatalog {
    /// Resolve `decls` against `info`.
    ///
    /// Fails with [`ConfigError::DuplicateEntry`] when a platform is declared
    /// twice, and with diagnostics for malformed `href`s or title templates.
    pub fn build(info: &SiteInfoConfig, decls: &[SocialLinkConfig]) -> Result<Self, ConfigError> {
        check_duplicates(decls)?;

        let mut diag = ConfigDiagnostics::new();
        let mut links = Vec::with_capacity(decls.len());

        for (i, decl) in decls.iter().enumerate() {
            validate_href(&decl.href, FieldPath::indexed(SECTION, i, "href"), &mut diag);

            match decl.title_template() {
                Ok(template) => links.push(SocialLink {
                    platform: decl.name,
                    href: decl.href.clone(),
                    link_title: template.render(info),
                    active: decl.active,
                }),
                Err(e) => diag.error_with_hint(
                    FieldPath::indexed(SECTION, i, "link_title"),
                    e.to_string(),
                    "e.g.: link_title = \"{author} on Github\"",
                ),
            }
        }

        if !decls.is_empty() && !decls.iter().any(|d| d.active) {
            diag.warn(FieldPath::new(SECTION), "no social link is active");
        }

        diag.print_warnings();
        diag.into_result()?;

        Ok(Self { links })
    }

    /// All links in display order, active or not.
    pub fn iter(&self) -> impl Iterator<Item = &SocialLink> + '_ {
        self.links.iter()
    }

    /// Visible links in display order.
    pub fn active_only(&self) -> impl Iterator<Item = &SocialLink> + '_ {
        self.links.iter().filter(|link| link.active)
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

fn check_duplicates(decls: &[SocialLinkConfig]) -> Result<(), ConfigError> {
    for (i, decl) in decls.iter().enumerate() {
        if let Some(first) = decls[..i].iter().position(|d| d.name == decl.name) {
            return Err(ConfigError::DuplicateEntry {
                platform: decl.name,
                first: first + 1,
                second: i + 1,
            });
        }
    }
    Ok(())
}

/// `href` must be an absolute URL; http(s) links also need a host.
fn validate_href(href: &str, field: FieldPath, diag: &mut ConfigDiagnostics) {
    match url::Url::parse(href) {
        Ok(parsed) => match parsed.scheme() {
            "http" | "https" if parsed.host_str().is_none_or(str::is_empty) => {
                diag.error(field, format!("'{href}' has no host"));
            }
            "javascript" | "data" => {
                diag.error(field, format!("scheme '{}' is not allowed", parsed.scheme()));
            }
            _ => {}
        },
        Err(e) => {
            diag.error_with_hint(
                field,
                format!("invalid URL '{href}': {e}"),
                "use an absolute URL like https://github.com/alice or mailto:alice@example.com",
            );
        }
    }
}

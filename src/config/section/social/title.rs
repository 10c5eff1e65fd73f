//! Link title templates.
//!
//! A template is plain text with `{author}` and `{title}` placeholders,
//! rendered against the current `[site]` values when the catalog is built.

use crate::config::section::SiteInfoConfig;
use regex::{Captures, Regex};
use std::sync::LazyLock;
use thiserror::Error;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{([^{}]*)\}").unwrap());

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("unknown placeholder `{{{0}}}`")]
    UnknownPlaceholder(String),

    #[error("must reference {{author}} or {{title}}")]
    NoPlaceholder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placeholder {
    Author,
    Title,
}

impl Placeholder {
    fn parse(name: &str) -> Option<Self> {
        match name.trim() {
            "author" => Some(Self::Author),
            "title" => Some(Self::Title),
            _ => None,
        }
    }

    fn value<'a>(&self, info: &'a SiteInfoConfig) -> &'a str {
        match self {
            Self::Author => &info.author,
            Self::Title => &info.title,
        }
    }
}

/// A checked link title template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleTemplate(String);

impl TitleTemplate {
    /// Surrounding whitespace of the template itself is dropped.
    pub fn parse(template: &str) -> Result<Self, TemplateError> {
        let template = template.trim();
        let mut found = false;
        for caps in PLACEHOLDER.captures_iter(template) {
            let name = &caps[1];
            if Placeholder::parse(name).is_none() {
                return Err(TemplateError::UnknownPlaceholder(name.to_string()));
            }
            found = true;
        }
        if !found {
            return Err(TemplateError::NoPlaceholder);
        }
        Ok(Self(template.to_string()))
    }

    pub fn render(&self, info: &SiteInfoConfig) -> String {
        PLACEHOLDER
            .replace_all(&self.0, |caps: &Captures| {
                // `parse` only accepts known placeholders.
                Placeholder::parse(&caps[1])
                    .map(|p| p.value(info).to_string())
                    .unwrap_or_default()
            })
            .into_owned()
    }
}

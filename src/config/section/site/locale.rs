//! Site locale list.
//!
//! An empty list is not an omission: it tells the renderer to use the
//! locale of the environment it runs in.

use crate::config::{ConfigDiagnostics, FieldPath};
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// Locale used when the environment does not name one.
pub const FALLBACK_LOCALE: &str = "en";

/// Environment variables consulted for the runtime locale, in priority order.
const LOCALE_ENV: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

/// Loose BCP 47 shape: a 2-3 letter language followed by alphanumeric subtags.
static LOCALE_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]{2,3}(?:-[A-Za-z0-9]{1,8})*$").unwrap());

/// Ordered locale tags of the site.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LocaleList(Vec<String>);

impl LocaleList {
    pub fn new(tags: Vec<String>) -> Self {
        Self(tags)
    }

    /// `true` when the environment default should be used.
    #[inline]
    pub fn uses_environment_default(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn tags(&self) -> &[String] {
        &self.0
    }

    /// Tags to render with: the configured ones, or the runtime locale when
    /// the list is empty.
    pub fn resolve<F>(&self, lookup: F) -> Vec<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        if self.0.is_empty() {
            vec![runtime_locale(lookup)]
        } else {
            self.0.clone()
        }
    }
}

/// Check whether `tag` looks like a BCP 47 language tag.
pub fn is_valid_tag(tag: &str) -> bool {
    LOCALE_TAG.is_match(tag)
}

/// Report malformed or repeated tags in `tags`.
pub fn validate_tags(tags: &[String], field: FieldPath, diag: &mut ConfigDiagnostics) {
    for (i, tag) in tags.iter().enumerate() {
        let path = FieldPath::element(field.as_str(), i);
        if !is_valid_tag(tag) {
            diag.error_with_hint(
                path,
                format!("'{tag}' is not a valid locale tag"),
                "use BCP 47 tags like \"en\" or \"es-ES\", or [] for the environment default",
            );
        } else if tags[..i].iter().any(|t| t.eq_ignore_ascii_case(tag)) {
            diag.warn(path, format!("locale '{tag}' is listed more than once"));
        }
    }
}

/// Derive a locale tag from POSIX locale variables.
///
/// `es_ES.UTF-8` becomes `es-ES`; `C`, `POSIX` and unparseable values fall
/// back to [`FALLBACK_LOCALE`].
pub fn runtime_locale<F>(lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = LOCALE_ENV
        .iter()
        .filter_map(|var| lookup(*var))
        .find(|value| !value.is_empty())
    else {
        return FALLBACK_LOCALE.to_string();
    };

    let base = raw
        .split(['.', '@'])
        .next()
        .unwrap_or_default()
        .replace('_', "-");

    if base == "C" || base == "POSIX" || !is_valid_tag(&base) {
        FALLBACK_LOCALE.to_string()
    } else {
        base
    }
}

//! Type-safe config field path.

use owo_colors::OwoColorize;
use std::borrow::Cow;
use std::fmt;

/// Dotted path of a config field, used to point diagnostics at the
/// offending key.
///
/// Static paths come from `#[derive(Config)]`:
///
/// ```ignore
/// #[derive(Config)]
/// #[config(section = "site")]
/// pub struct SiteInfoConfig {
///     pub website: String,
/// }
///
/// diag.error(SiteInfoConfig::FIELDS.website, "must not be empty");
/// ```
///
/// Entries of array tables (`[[socials]]`, `[[cms.collections]]`) have no
/// static path and are built with [`FieldPath::indexed`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath(Cow<'static, str>);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(Cow::Borrowed(path))
    }

    /// Path of `field` inside the `index`-th entry of the array at `array`,
    /// e.g. `socials[2].href`.
    pub fn indexed(array: &str, index: usize, field: &str) -> Self {
        Self(Cow::Owned(format!("{array}[{index}].{field}")))
    }

    /// Path of the `index`-th element of a scalar array, e.g. `site.locale[0]`.
    pub fn element(array: &str, index: usize) -> Self {
        Self(Cow::Owned(format!("{array}[{index}]")))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

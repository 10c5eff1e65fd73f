//! `[site.logo]` configuration.
//!
//! # Example
//!
//! ```toml
//! [site.logo]
//! enable = true
//! svg = false
//! width = 116
//! height = 46
//! ```

use crate::config::ConfigDiagnostics;
use macros::Config;
use serde::{Deserialize, Serialize};

/// Logo image display options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "site.logo")]
pub struct LogoConfig {
    /// Show an image logo instead of the site title.
    #[config(default = "false", inline_doc)]
    pub enable: bool,

    /// The logo is an SVG (width/height become advisory).
    #[config(default = "false", inline_doc)]
    pub svg: bool,

    /// Logo width in pixels.
    #[config(default = "116", inline_doc)]
    pub width: u32,

    /// Logo height in pixels.
    #[config(default = "46", inline_doc)]
    pub height: u32,
}

impl Default for LogoConfig {
    fn default() -> Self {
        Self {
            enable: false,
            svg: false,
            width: 116,
            height: 46,
        }
    }
}

/// How the renderer should treat the configured logo dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoSize {
    /// Vector logo: dimensions are a hint, the image scales freely.
    Advisory { width: u32, height: u32 },
    /// Raster logo: dimensions are the exact pixel size.
    Exact { width: u32, height: u32 },
}

impl LogoConfig {
    #[inline]
    pub const fn size(&self) -> LogoSize {
        if self.svg {
            LogoSize::Advisory {
                width: self.width,
                height: self.height,
            }
        } else {
            LogoSize::Exact {
                width: self.width,
                height: self.height,
            }
        }
    }

    /// Dimensions must be positive whenever the logo is shown.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !self.enable {
            return;
        }
        if self.width == 0 {
            diag.error(Self::FIELDS.width, "must be greater than 0");
        }
        if self.height == 0 {
            diag.error(Self::FIELDS.height, "must be greater than 0");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_svg_size_is_advisory() {
        let logo = LogoConfig {
            enable: true,
            svg: true,
            ..LogoConfig::default()
        };
        assert_eq!(
            logo.size(),
            LogoSize::Advisory {
                width: 116,
                height: 46
            }
        );
    }

    #[test]
    fn test_raster_size_is_exact() {
        let logo = LogoConfig {
            enable: true,
            ..LogoConfig::default()
        };
        assert!(matches!(logo.size(), LogoSize::Exact { width: 116, .. }));
    }

    #[test]
    fn test_zero_dimensions_only_matter_when_enabled() {
        let mut logo = LogoConfig {
            width: 0,
            height: 0,
            ..LogoConfig::default()
        };
        let mut diag = ConfigDiagnostics::new();
        logo.validate(&mut diag);
        assert!(diag.is_empty());

        logo.enable = true;
        logo.validate(&mut diag);
        assert!(diag.has_error_at("site.logo.width"));
        assert!(diag.has_error_at("site.logo.height"));
    }
}

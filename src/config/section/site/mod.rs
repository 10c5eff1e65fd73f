//! `[site]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [site]
//! website = "https://example.com/"
//! author = "Alice"
//! desc = "A personal blog"
//! title = "Alice's Blog"
//! og_image = "og.jpg"
//! light_and_dark_mode = true
//! post_per_page = 4
//! locale = ["en-US"]
//!
//! [site.logo]
//! enable = false
//! svg = false
//! width = 116
//! height = 46
//! ```

mod info;
pub mod locale;
mod logo;

pub use info::{DEFAULT_OG_IMAGE, SiteInfoConfig};
pub use locale::LocaleList;
pub use logo::{LogoConfig, LogoSize};

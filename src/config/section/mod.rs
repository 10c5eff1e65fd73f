//! Configuration section definitions.
//!
//! Each module corresponds to a section in `quill.toml`:
//!
//! | Module   | TOML Section               | Purpose                               |
//! |----------|----------------------------|---------------------------------------|
//! | `site`   | `[site]`, `[site.logo]`    | Site metadata, locale, logo           |
//! | `social` | `[[socials]]`              | Social link catalog                   |
//! | `cms`    | `[cms]`, `[[cms.collections]]` | Content schema and editor settings |

pub mod cms;
pub mod site;
pub mod social;

pub use cms::{CmsBuildConfig, CmsConfig, CmsMediaConfig, Collection, FieldDescriptor, LookupError};
pub use site::{LocaleList, LogoConfig, SiteInfoConfig};
pub use social::{SocialCatalog, SocialLink, SocialLinkConfig, SocialPlatform};

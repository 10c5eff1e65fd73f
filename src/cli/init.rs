//! Configuration file generation.
//!
//! Writes a commented `quill.toml` for a new blog.

use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

use crate::config::{
    CONFIG_FILE,
    section::{CmsBuildConfig, CmsConfig, CmsMediaConfig, LogoConfig, SiteInfoConfig},
};
use crate::log;

/// Example social link appended to the template.
const SOCIALS_TEMPLATE: &str = r#"# Social links, rendered in this order
# [[socials]]
# name = "Github"
# href = "https://github.com/you"
# link_title = "{title} on Github"
# active = true
"#;

/// Example collection appended to the template.
const COLLECTION_TEMPLATE: &str = r#"# Content types exposed to the editor
# [[cms.collections]]
# name = "post"
# label = "Posts"
# path = "src/content/blog"
#
# [[cms.collections.fields]]
# type = "string"
# name = "title"
# label = "Title"
# is_title = true
# required = true
#
# [[cms.collections.fields]]
# type = "rich-text"
# name = "body"
# label = "Body"
# is_body = true
"#;

/// Generate quill.toml content with comments
pub fn generate_config_template() -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "# Quill configuration file (v{})\n\n",
        env!("CARGO_PKG_VERSION")
    ));

    for section in [
        SiteInfoConfig::template_with_header(),
        LogoConfig::template_with_header(),
        SOCIALS_TEMPLATE.to_string(),
        CmsConfig::template_with_header(),
        CmsBuildConfig::template_with_header(),
        CmsMediaConfig::template_with_header(),
    ] {
        out.push_str(&section);
        out.push('\n');
    }
    out.push_str(COLLECTION_TEMPLATE);

    out
}

/// Write a default quill.toml into `root`, creating the directory if needed.
///
/// An existing config file is never overwritten.
pub fn write_config(root: &Path) -> Result<()> {
    let path = root.join(CONFIG_FILE);
    if path.exists() {
        bail!(
            "'{}' already exists.\n\
             Remove it or choose a different directory.",
            path.display()
        );
    }

    fs::create_dir_all(root)
        .with_context(|| format!("Failed to create directory '{}'", root.display()))?;
    fs::write(&path, generate_config_template())
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    Ok(())
}

/// Create a config for a new blog in `root`.
pub fn new_site(root: &Path) -> Result<()> {
    write_config(root)?;
    log!("init"; "wrote {}", root.join(CONFIG_FILE).display());
    Ok(())
}

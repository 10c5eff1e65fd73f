//! `quill export`: the loaded site as JSON for the build pipeline.

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::cli::args::ExportArgs;
use crate::config::{
    Site,
    section::{CmsBuildConfig, CmsMediaConfig, LogoConfig, SocialLink},
};
use crate::log;

/// Flattened view of a [`Site`] with every fallback applied.
#[derive(Debug, Serialize)]
pub struct SiteExport<'a> {
    pub website: &'a str,
    pub author: &'a str,
    pub desc: &'a str,
    pub title: &'a str,
    pub og_image: &'a str,
    pub og_image_url: Option<String>,
    pub light_and_dark_mode: bool,
    pub post_per_page: i64,
    pub locale: Vec<String>,
    pub logo: &'a LogoConfig,
    pub socials: Vec<&'a SocialLink>,
    pub cms: CmsExport<'a>,
}

/// Editor settings and content locations.
#[derive(Debug, Serialize)]
pub struct CmsExport<'a> {
    pub branch: &'a str,
    pub build: &'a CmsBuildConfig,
    pub media: &'a CmsMediaConfig,
    pub collections: Vec<CollectionExport<'a>>,
}

#[derive(Debug, Serialize)]
pub struct CollectionExport<'a> {
    pub name: &'a str,
    pub label: &'a str,
    pub dir: &'a Path,
    pub extension: &'a str,
    pub title_field: Option<&'a str>,
    pub body_field: Option<&'a str>,
    pub required: Vec<&'a str>,
}

impl<'a> SiteExport<'a> {
    /// `lookup` resolves the locale when none is configured.
    pub fn new<F>(site: &'a Site, all_socials: bool, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let info = &site.info;
        let socials = if all_socials {
            site.socials.iter().collect()
        } else {
            site.socials.active_only().collect()
        };

        Self {
            website: &info.website,
            author: &info.author,
            desc: &info.desc,
            title: &info.title,
            og_image: info.og_image(),
            og_image_url: info.og_image_url(),
            light_and_dark_mode: info.light_and_dark_mode,
            post_per_page: info.post_per_page,
            locale: site.locale.resolve(lookup),
            logo: site.logo(),
            socials,
            cms: CmsExport {
                branch: &site.branch,
                build: &site.cms.build,
                media: &site.cms.media,
                collections: site
                    .cms
                    .collections
                    .iter()
                    .map(|c| CollectionExport {
                        name: &c.name,
                        label: &c.label,
                        dir: c.dir(),
                        extension: c.format.extension(),
                        title_field: c.title_field().map(|f| f.name.as_str()),
                        body_field: c.body_field().map(|f| f.name.as_str()),
                        required: c.required_fields().map(|f| f.name.as_str()).collect(),
                    })
                    .collect(),
            },
        }
    }
}

/// Serialize `site` and write it to `--output` or stdout.
pub fn export<F>(site: &Site, args: &ExportArgs, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    let view = SiteExport::new(site, args.all, lookup);
    let formatted = if args.pretty {
        serde_json::to_string_pretty(&view)?
    } else {
        serde_json::to_string(&view)?
    };

    match &args.output {
        Some(path) => write_file(path, &formatted)?,
        None => println!("{formatted}"),
    }
    Ok(())
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    let mut file = fs::File::create(path)
        .with_context(|| format!("Failed to create '{}'", path.display()))?;
    writeln!(file, "{content}")?;
    log!("export"; "wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use serde_json::Value;
    use tempfile::TempDir;

    const EXTRA: &str = r#"
[[cms.collections]]
name = "post"
label = "Posts"
path = "/src/content/blog"

[[cms.collections.fields]]
type = "string"
name = "title"
label = "Title"
is_title = true
required = true

[[cms.collections.fields]]
type = "datetime"
name = "pubDatetime"
label = "Published"
required = true

[[cms.collections.fields]]
type = "rich-text"
name = "body"
label = "Body"
is_body = true

[[socials]]
name = "Github"
href = "https://github.com/alice"

[[socials]]
name = "Twitter"
href = "https://twitter.com/alice"
active = false
"#;

    fn site() -> Site {
        test_parse_config(EXTRA).into_site(|_| None).unwrap()
    }

    fn to_json(site: &Site, all: bool) -> Value {
        let lang = |k: &str| (k == "LANG").then(|| "de_DE.UTF-8".to_string());
        serde_json::to_value(SiteExport::new(site, all, lang)).unwrap()
    }

    #[test]
    fn test_export_applies_fallbacks() {
        let json = to_json(&site(), false);
        assert_eq!(json["og_image"], "og.jpg");
        assert_eq!(json["og_image_url"], "https://example.com/og.jpg");
        assert_eq!(json["locale"], serde_json::json!(["de-DE"]));
        assert_eq!(json["cms"]["branch"], "main");
    }

    #[test]
    fn test_export_active_socials_only() {
        let site = site();
        let socials = to_json(&site, false)["socials"].clone();
        assert_eq!(socials.as_array().unwrap().len(), 1);
        assert_eq!(socials[0]["name"], "Github");
        assert_eq!(socials[0]["link_title"], "Alice on Github");

        let all = to_json(&site, true)["socials"].clone();
        assert_eq!(all.as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_export_collection_roles() {
        let json = to_json(&site(), false);
        let post = &json["cms"]["collections"][0];
        assert_eq!(post["dir"], "src/content/blog");
        assert_eq!(post["extension"], "md");
        assert_eq!(post["title_field"], "title");
        assert_eq!(post["body_field"], "body");
        assert_eq!(post["required"], serde_json::json!(["title", "pubDatetime"]));
    }

    #[test]
    fn test_export_to_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("site.json");
        let args = ExportArgs {
            pretty: true,
            all: false,
            output: Some(path.clone()),
        };
        export(&site(), &args, |_| None).unwrap();

        let json: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["title"], "Test Blog");
    }
}

//! Human-readable views of a loaded site.
//!
//! Backs the `check`, `socials`, `schema` and `branch` commands. Everything
//! here only reads the [`Site`]; output goes to stdout.

use anyhow::Result;
use owo_colors::OwoColorize;
use std::io::Write;

use crate::config::{
    Site,
    section::{Collection, FieldDescriptor},
};
use crate::log;
use crate::utils::plural::plural_count;

/// `quill check`: confirm the config loaded and summarize it.
pub fn check(site: &Site) {
    let active = site.socials.active_only().count();
    log!("check"; "{} is valid", site.config_path.display());
    log!(
        "check";
        "{}, {} active, {}, branch `{}`",
        plural_count(site.socials.len(), "social link"),
        active,
        plural_count(site.cms.collections.len(), "collection"),
        site.branch
    );
}

/// `quill socials`: one line per link in display order.
pub fn socials(out: &mut impl Write, site: &Site, all: bool) -> Result<()> {
    for link in site.socials.iter().filter(|l| all || l.active) {
        let marker = if link.active { " " } else { "-" };
        writeln!(
            out,
            "{marker} {:<10} {:<40} {}",
            link.platform.as_str(),
            link.href,
            link.link_title
        )?;
    }
    Ok(())
}

/// `quill schema [collection] [field]`.
///
/// Unknown names surface as [`LookupError`](crate::config::section::LookupError).
pub fn schema(
    out: &mut impl Write,
    site: &Site,
    collection: Option<&str>,
    field: Option<&str>,
) -> Result<()> {
    match (collection, field) {
        (None, _) => {
            for c in &site.cms.collections {
                writeln!(
                    out,
                    "{:<12} {:<28} {}",
                    c.name,
                    c.dir().display(),
                    plural_count(c.fields.len(), "field")
                )?;
            }
        }
        (Some(name), None) => write_collection(out, site.cms.collection(name)?)?,
        (Some(name), Some(field)) => write_field(out, site.cms.field(name, field)?)?,
    }
    Ok(())
}

/// `quill schema <collection> --slug <slug>`: where that content item lives.
pub fn content_path(out: &mut impl Write, site: &Site, collection: &str, slug: &str) -> Result<()> {
    let path = site.cms.collection(collection)?.content_path(slug)?;
    writeln!(out, "{}", site.root().join(path).display())?;
    Ok(())
}

fn write_collection(out: &mut impl Write, collection: &Collection) -> Result<()> {
    writeln!(
        out,
        "{} ({}) in {}",
        collection.label.bold(),
        collection.name,
        collection.dir().display()
    )?;
    for field in &collection.fields {
        let mut flags = Vec::new();
        if field.required {
            flags.push("required");
        }
        if field.is_title {
            flags.push("title");
        }
        if field.is_body {
            flags.push("body");
        }
        writeln!(
            out,
            "  {:<16} {:<12} {}",
            field.name,
            field.type_label(),
            flags.join(", ")
        )?;
    }
    Ok(())
}

fn write_field(out: &mut impl Write, field: &FieldDescriptor) -> Result<()> {
    writeln!(out, "name:     {}", field.name)?;
    writeln!(out, "label:    {}", field.label)?;
    writeln!(out, "type:     {}", field.type_label())?;
    writeln!(out, "required: {}", field.required)?;
    if field.is_title {
        writeln!(out, "role:     title")?;
    } else if field.is_body {
        writeln!(out, "role:     body")?;
    }
    if let Some(ui) = &field.ui {
        writeln!(out, "widget:   {}", ui.component)?;
    }
    if let Some(description) = &field.description {
        writeln!(out, "help:     {description}")?;
    }
    Ok(())
}

/// `quill branch`.
pub fn branch(out: &mut impl Write, site: &Site) -> Result<()> {
    writeln!(out, "{}", site.branch)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    const SCHEMA: &str = r#"
[[socials]]
name = "Github"
href = "https://github.com/alice"

[[socials]]
name = "Mail"
href = "mailto:alice@example.com"
active = false

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
type = "string"
name = "tags"
label = "Tags"
list = true

[[cms.collections.fields]]
type = "rich-text"
name = "body"
label = "Body"
is_body = true
"#;

    fn site() -> Site {
        test_parse_config(SCHEMA).into_site(|_| None).unwrap()
    }

    fn render(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_socials_active_only() {
        let site = site();
        let out = render(|b| socials(b, &site, false));
        assert_eq!(out.lines().count(), 1);
        assert!(out.contains("Alice on Github"));

        let out = render(|b| socials(b, &site, true));
        assert_eq!(out.lines().count(), 2);
        assert!(out.lines().nth(1).unwrap().starts_with('-'));
    }

    #[test]
    fn test_schema_listing() {
        let site = site();
        let out = render(|b| schema(b, &site, None, None));
        assert!(out.contains("post"));
        assert!(out.contains("src/content/blog"));
        assert!(out.contains("3 fields"));
    }

    #[test]
    fn test_schema_collection() {
        let site = site();
        let out = render(|b| schema(b, &site, Some("post"), None));
        assert!(out.contains("required, title"));
        assert!(out.contains("string[]"));
    }

    #[test]
    fn test_schema_field_lookup() {
        let site = site();
        let out = render(|b| schema(b, &site, Some("post"), Some("body")));
        assert!(out.contains("role:     body"));

        let mut buf = Vec::new();
        assert!(schema(&mut buf, &site, Some("post"), Some("nonexistent")).is_err());
        assert!(schema(&mut buf, &site, Some("page"), None).is_err());
    }

    #[test]
    fn test_content_path_by_slug() {
        let site = site();
        let out = render(|b| content_path(b, &site, "post", "hola-mundo"));
        assert_eq!(out, "src/content/blog/hola-mundo.md\n");

        let mut buf = Vec::new();
        assert!(content_path(&mut buf, &site, "post", "../secrets").is_err());
        assert!(content_path(&mut buf, &site, "post", "  ").is_err());
        assert!(content_path(&mut buf, &site, "page", "hola-mundo").is_err());
    }

    #[test]
    fn test_branch() {
        let site = site();
        assert_eq!(render(|b| branch(b, &site)), "main\n");
    }
}

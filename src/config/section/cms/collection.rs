//! Content collections (`[[cms.collections]]`).

use super::{
    LookupError,
    field::{FieldDescriptor, FieldKind},
    slug::{SlugError, validate_slug},
};
use crate::config::{ConfigDiagnostics, FieldPath};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};
use std::sync::LazyLock;

/// Field and collection names double as front matter keys.
static MACHINE_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap());

/// File format of the content files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentFormat {
    #[default]
    Md,
    Mdx,
    Markdown,
    Json,
    Yaml,
    Toml,
}

impl ContentFormat {
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Md => "md",
            Self::Mdx => "mdx",
            Self::Markdown => "markdown",
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Toml => "toml",
        }
    }
}

/// One editable content type and the directory holding its files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    /// Machine name, e.g. `post`.
    pub name: String,

    /// Display name, e.g. `Posts`.
    pub label: String,

    /// Storage directory relative to the project root, e.g. `src/content/blog`.
    pub path: PathBuf,

    #[serde(default)]
    pub format: ContentFormat,

    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
}

impl Collection {
    /// Look up a field by machine name.
    pub fn field(&self, name: &str) -> Result<&FieldDescriptor, LookupError> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .ok_or_else(|| LookupError::FieldNotFound {
                collection: self.name.clone(),
                field: name.to_string(),
            })
    }

    pub fn title_field(&self) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.is_title)
    }

    pub fn body_field(&self) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.is_body)
    }

    /// Fields an author must fill before saving.
    pub fn required_fields(&self) -> impl Iterator<Item = &FieldDescriptor> + '_ {
        self.fields.iter().filter(|f| f.required)
    }

    /// Storage directory with any leading `/` removed.
    pub fn dir(&self) -> &Path {
        self.path.strip_prefix("/").unwrap_or(self.path.as_path())
    }

    /// File addressed by `slug`, relative to the project root.
    pub fn content_path(&self, slug: &str) -> Result<PathBuf, SlugError> {
        let slug = validate_slug(slug)?;
        Ok(self
            .dir()
            .join(format!("{slug}.{}", self.format.extension())))
    }

    /// Validate the collection at position `index` of `cms.collections`.
    ///
    /// # Checks
    /// - `name` is a machine key, `label` and `path` are not empty
    /// - `path` stays inside the project (no `..`)
    /// - field names are machine keys and unique
    /// - exactly one `is_title` field, a single `string`
    /// - exactly one `is_body` field, a single `rich-text`
    pub fn validate(&self, index: usize, diag: &mut ConfigDiagnostics) {
        let at = |field: &str| FieldPath::indexed("cms.collections", index, field);

        if !MACHINE_KEY.is_match(&self.name) {
            diag.error_with_hint(
                at("name"),
                format!("'{}' is not a valid collection name", self.name),
                "use letters, digits and underscores, e.g.: \"post\"",
            );
        }
        if self.label.trim().is_empty() {
            diag.error(at("label"), "must not be empty");
        }
        if self.path.as_os_str().is_empty() {
            diag.error(at("path"), "must not be empty");
        } else if self.path.components().any(|c| c == Component::ParentDir) {
            diag.error(at("path"), "must stay inside the project directory");
        }

        if self.fields.is_empty() {
            diag.error(at("fields"), "collection declares no fields");
            return;
        }

        let fields_path = format!("cms.collections[{index}].fields");
        self.validate_fields(&fields_path, diag);
        self.validate_primary(&fields_path, at("fields"), diag);
    }

    fn validate_fields(&self, fields_path: &str, diag: &mut ConfigDiagnostics) {
        for (i, field) in self.fields.iter().enumerate() {
            let at = |key: &str| FieldPath::indexed(fields_path, i, key);

            if !MACHINE_KEY.is_match(&field.name) {
                diag.error_with_hint(
                    at("name"),
                    format!("'{}' is not a valid field name", field.name),
                    "use letters, digits and underscores, e.g.: \"pubDatetime\"",
                );
            } else if self.fields[..i].iter().any(|f| f.name == field.name) {
                diag.error(
                    at("name"),
                    format!("field '{}' is declared more than once", field.name),
                );
            }

            if field.label.trim().is_empty() {
                diag.error(at("label"), "must not be empty");
            }

            if field.is_title && field.is_body {
                diag.error(at("is_body"), "a field cannot be both title and body");
            }
        }
    }

    /// Exactly one title and one body field, of the right shape.
    fn validate_primary(&self, fields_path: &str, fields: FieldPath, diag: &mut ConfigDiagnostics) {
        let titles: Vec<usize> = positions(&self.fields, |f| f.is_title);
        let bodies: Vec<usize> = positions(&self.fields, |f| f.is_body);

        match titles.as_slice() {
            [] => diag.error_with_hint(
                fields.clone(),
                "no field is marked is_title",
                "mark the heading field with is_title = true",
            ),
            [i] => {
                let field = &self.fields[*i];
                if field.kind != FieldKind::String || field.list {
                    diag.error(
                        FieldPath::indexed(fields_path, *i, "type"),
                        format!("title field must be a single string, got {}", field.type_label()),
                    );
                }
                if !field.required {
                    diag.warn(
                        FieldPath::indexed(fields_path, *i, "required"),
                        "title field is not required",
                    );
                }
            }
            [_, rest @ ..] => {
                for i in rest {
                    diag.error(
                        FieldPath::indexed(fields_path, *i, "is_title"),
                        "only one field may be marked is_title",
                    );
                }
            }
        }

        match bodies.as_slice() {
            [] => diag.error_with_hint(
                fields,
                "no field is marked is_body",
                "add a rich-text field with is_body = true",
            ),
            [i] => {
                let field = &self.fields[*i];
                if field.kind != FieldKind::RichText || field.list {
                    diag.error(
                        FieldPath::indexed(fields_path, *i, "type"),
                        format!("body field must be a single rich-text, got {}", field.type_label()),
                    );
                }
            }
            [_, rest @ ..] => {
                for i in rest {
                    diag.error(
                        FieldPath::indexed(fields_path, *i, "is_body"),
                        "only one field may be marked is_body",
                    );
                }
            }
        }
    }
}

fn positions(fields: &[FieldDescriptor], pred: impl Fn(&FieldDescriptor) -> bool) -> Vec<usize> {
    fields
        .iter()
        .enumerate()
        .filter(|(_, f)| pred(f))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(kind: FieldKind, name: &str) -> FieldDescriptor {
        FieldDescriptor {
            kind,
            name: name.into(),
            label: name.to_uppercase(),
            description: None,
            required: true,
            is_title: false,
            is_body: false,
            list: false,
            ui: None,
        }
    }

    fn post() -> Collection {
        let mut title = field(FieldKind::String, "title");
        title.is_title = true;
        let mut body = field(FieldKind::RichText, "body");
        body.is_body = true;
        body.required = false;
        let mut draft = field(FieldKind::Boolean, "draft");
        draft.required = false;

        Collection {
            name: "post".into(),
            label: "Posts".into(),
            path: PathBuf::from("/src/content/blog"),
            format: ContentFormat::Md,
            fields: vec![
                title,
                field(FieldKind::String, "author"),
                field(FieldKind::Datetime, "pubDatetime"),
                draft,
                body,
            ],
        }
    }

    fn errors_of(collection: &Collection) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        collection.validate(0, &mut diag);
        diag
    }

    #[test]
    fn test_valid_collection() {
        let diag = errors_of(&post());
        assert!(diag.is_empty(), "{diag}");
    }

    #[test]
    fn test_field_lookup() {
        let post = post();
        assert!(post.field("title").unwrap().is_title);
        assert_eq!(
            post.field("nonexistent"),
            Err(LookupError::FieldNotFound {
                collection: "post".into(),
                field: "nonexistent".into(),
            })
        );
    }

    #[test]
    fn test_primary_and_required_fields() {
        let post = post();
        assert_eq!(post.title_field().map(|f| f.name.as_str()), Some("title"));
        assert_eq!(post.body_field().map(|f| f.name.as_str()), Some("body"));
        let required: Vec<_> = post.required_fields().map(|f| f.name.as_str()).collect();
        assert_eq!(required, vec!["title", "author", "pubDatetime"]);
    }

    #[test]
    fn test_content_path() {
        let post = post();
        assert_eq!(
            post.content_path("hola-mundo").unwrap(),
            PathBuf::from("src/content/blog/hola-mundo.md")
        );
        assert_eq!(post.content_path("../etc"), Err(SlugError::Separator("../etc".into())));
    }

    #[test]
    fn test_duplicate_field_name() {
        let mut post = post();
        post.fields.push(field(FieldKind::String, "author"));
        assert!(errors_of(&post).has_error_at("cms.collections[0].fields[5].name"));
    }

    #[test]
    fn test_missing_title_and_body() {
        let mut post = post();
        for f in &mut post.fields {
            f.is_title = false;
            f.is_body = false;
        }
        let diag = errors_of(&post);
        assert_eq!(diag.len(), 2);
        assert!(diag.has_error_at("cms.collections[0].fields"));
    }

    #[test]
    fn test_second_title_rejected() {
        let mut post = post();
        post.fields[1].is_title = true;
        assert!(errors_of(&post).has_error_at("cms.collections[0].fields[1].is_title"));
    }

    #[test]
    fn test_body_must_be_rich_text() {
        let mut post = post();
        post.fields[4].kind = FieldKind::String;
        assert!(errors_of(&post).has_error_at("cms.collections[0].fields[4].type"));
    }

    #[test]
    fn test_title_must_not_be_list() {
        let mut post = post();
        post.fields[0].list = true;
        assert!(errors_of(&post).has_error_at("cms.collections[0].fields[0].type"));
    }

    #[test]
    fn test_bad_names_and_path() {
        let mut post = post();
        post.name = "blog posts".into();
        post.path = PathBuf::from("../outside");
        post.fields[2].name = "pub-date".into();
        let diag = errors_of(&post);
        assert!(diag.has_error_at("cms.collections[0].name"));
        assert!(diag.has_error_at("cms.collections[0].path"));
        assert!(diag.has_error_at("cms.collections[0].fields[2].name"));
    }

    #[test]
    fn test_format_extension() {
        let mut post = post();
        post.format = ContentFormat::Mdx;
        assert_eq!(
            post.content_path("x").unwrap(),
            PathBuf::from("src/content/blog/x.mdx")
        );
    }
}

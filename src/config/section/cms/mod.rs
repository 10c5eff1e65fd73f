//! `[cms]` section configuration.
//!
//! Describes the content types the editing tool exposes and where it stores
//! them. The schema is declarative only: the editing tool renders forms from
//! it and enforces `required`/`type` on save.
//!
//! # Example
//!
//! ```toml
//! [cms]
//! branch_env = ["HEAD", "VERCEL_GIT_COMMIT_REF"]
//!
//! [cms.build]
//! output_folder = "admin"
//! public_folder = "public"
//!
//! [[cms.collections]]
//! name = "post"
//! label = "Posts"
//! path = "src/content/blog"
//!
//! [[cms.collections.fields]]
//! type = "string"
//! name = "title"
//! label = "Title"
//! is_title = true
//! required = true
//!
//! [[cms.collections.fields]]
//! type = "rich-text"
//! name = "body"
//! label = "Body"
//! is_body = true
//! ```

mod branch;
mod collection;
mod field;
mod slug;

pub use branch::{DEFAULT_BRANCH, default_branch_env, resolve_branch};
pub use collection::{Collection, ContentFormat};
pub use field::{FieldDescriptor, FieldKind, FieldUi};
pub use slug::{SlugError, validate_slug};

use crate::config::{ConfigDiagnostics, FieldPath};
use macros::Config;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lookup failures in the content schema.
///
/// Asking for an undeclared name is a bug in the caller, not a
/// configuration problem.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("collection `{collection}` is not declared")]
    CollectionNotFound { collection: String },

    #[error("field `{field}` is not declared in collection `{collection}`")]
    FieldNotFound { collection: String, field: String },
}

/// Content editing settings.
#[derive(Debug, Clone, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "cms")]
pub struct CmsConfig {
    /// Branch the editor commits to; overrides `branch_env` when set.
    #[config(inline_doc)]
    pub branch: Option<String>,

    /// Environment variables naming the branch, checked in order.
    #[config(default = "[\"HEAD\", \"VERCEL_GIT_COMMIT_REF\"]", inline_doc)]
    pub branch_env: Vec<String>,

    /// Client id of the hosted editing backend.
    #[config(inline_doc)]
    pub client_id: Option<String>,

    /// Read-only token of the hosted editing backend.
    #[config(inline_doc)]
    pub token: Option<String>,

    /// Admin build folders (`[cms.build]`).
    #[config(skip)]
    pub build: CmsBuildConfig,

    /// Media folders (`[cms.media]`).
    #[config(skip)]
    pub media: CmsMediaConfig,

    /// Editable content types (`[[cms.collections]]`).
    #[config(skip)]
    pub collections: Vec<Collection>,
}

impl Default for CmsConfig {
    fn default() -> Self {
        Self {
            branch: None,
            branch_env: default_branch_env(),
            client_id: None,
            token: None,
            build: CmsBuildConfig::default(),
            media: CmsMediaConfig::default(),
            collections: Vec::new(),
        }
    }
}

/// Where the editing UI is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "cms.build")]
pub struct CmsBuildConfig {
    /// Admin UI output folder, inside the public folder.
    #[config(default = "admin", inline_doc)]
    pub output_folder: String,

    /// Public folder of the site.
    #[config(default = "public", inline_doc)]
    pub public_folder: String,
}

impl Default for CmsBuildConfig {
    fn default() -> Self {
        Self {
            output_folder: "admin".into(),
            public_folder: "public".into(),
        }
    }
}

/// Where uploaded media is stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "cms.media")]
pub struct CmsMediaConfig {
    /// Media directory inside the public folder ("" for its root).
    #[config(default = "", inline_doc)]
    pub media_root: String,

    /// Public folder media paths are relative to.
    #[config(default = "public", inline_doc)]
    pub public_folder: String,
}

impl Default for CmsMediaConfig {
    fn default() -> Self {
        Self {
            media_root: String::new(),
            public_folder: "public".into(),
        }
    }
}

impl CmsConfig {
    /// Look up a collection by machine name.
    pub fn collection(&self, name: &str) -> Result<&Collection, LookupError> {
        self.collections
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| LookupError::CollectionNotFound {
                collection: name.to_string(),
            })
    }

    /// Look up `field` of `collection`.
    pub fn field(&self, collection: &str, field: &str) -> Result<&FieldDescriptor, LookupError> {
        self.collection(collection)?.field(field)
    }

    /// Branch the editor should use, see [`resolve_branch`].
    pub fn resolve_branch<F>(&self, lookup: F) -> String
    where
        F: Fn(&str) -> Option<String>,
    {
        resolve_branch(self.branch.as_deref(), &self.branch_env, lookup)
    }

    /// Validate editing settings and every collection.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.branch.as_deref().is_some_and(|b| b.trim().is_empty()) {
            diag.error_with_hint(
                Self::FIELDS.branch,
                "must not be empty",
                "remove the key to resolve the branch from the environment",
            );
        }

        for (i, var) in self.branch_env.iter().enumerate() {
            if var.trim().is_empty() {
                diag.error(
                    FieldPath::element(Self::FIELDS.branch_env.as_str(), i),
                    "variable name must not be empty",
                );
            }
        }

        if self.build.output_folder.trim().is_empty() {
            diag.error(CmsBuildConfig::FIELDS.output_folder, "must not be empty");
        }
        if self.build.public_folder.trim().is_empty() {
            diag.error(CmsBuildConfig::FIELDS.public_folder, "must not be empty");
        }
        if self.media.public_folder.trim().is_empty() {
            diag.error(CmsMediaConfig::FIELDS.public_folder, "must not be empty");
        }

        for (i, collection) in self.collections.iter().enumerate() {
            if self.collections[..i].iter().any(|c| c.name == collection.name) {
                diag.error(
                    FieldPath::indexed("cms.collections", i, "name"),
                    format!("collection '{}' is declared more than once", collection.name),
                );
            }
            collection.validate(i, diag);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const POST: &str = r#"
[[collections]]
name = "post"
label = "Posts"
path = "/src/content/blog"

[[collections.fields]]
type = "string"
name = "title"
label = "Title"
is_title = true
required = true

[[collections.fields]]
type = "image"
name = "ogImage"
label = "Og Image"

[[collections.fields]]
type = "rich-text"
name = "body"
label = "Body"
is_body = true
"#;

    fn cms() -> CmsConfig {
        toml::from_str(POST).unwrap()
    }

    #[test]
    fn test_defaults() {
        let cms = CmsConfig::default();
        assert_eq!(cms.branch_env, vec!["HEAD", "VERCEL_GIT_COMMIT_REF"]);
        assert_eq!(cms.build.output_folder, "admin");
        assert_eq!(cms.media.public_folder, "public");
        assert!(cms.collections.is_empty());
    }

    #[test]
    fn test_parsed_schema_is_valid() {
        let mut diag = ConfigDiagnostics::new();
        cms().validate(&mut diag);
        assert!(diag.is_empty(), "{diag}");
    }

    #[test]
    fn test_lookup() {
        let cms = cms();
        assert!(cms.field("post", "title").unwrap().is_title);
        assert_eq!(cms.field("post", "ogImage").unwrap().kind, FieldKind::Image);
        assert!(matches!(
            cms.field("post", "nonexistent"),
            Err(LookupError::FieldNotFound { .. })
        ));
        assert!(matches!(
            cms.collection("page"),
            Err(LookupError::CollectionNotFound { .. })
        ));
    }

    #[test]
    fn test_duplicate_collection() {
        let mut cms = cms();
        cms.collections.push(cms.collections[0].clone());
        let mut diag = ConfigDiagnostics::new();
        cms.validate(&mut diag);
        assert!(diag.has_error_at("cms.collections[1].name"));
    }

    #[test]
    fn test_branch_from_config_or_environment() {
        let mut cms = cms();
        assert_eq!(cms.resolve_branch(|_| None), DEFAULT_BRANCH);
        assert_eq!(
            cms.resolve_branch(|k| (k == "HEAD").then(|| "deploy".to_string())),
            "deploy"
        );

        cms.branch = Some("content".into());
        assert_eq!(cms.resolve_branch(|_| Some("deploy".into())), "content");
    }

    #[test]
    fn test_empty_branch_rejected() {
        let mut cms = cms();
        cms.branch = Some(String::new());
        cms.branch_env.push(" ".into());
        let mut diag = ConfigDiagnostics::new();
        cms.validate(&mut diag);
        assert!(diag.has_error_at("cms.branch"));
        assert!(diag.has_error_at("cms.branch_env[2]"));
    }
}

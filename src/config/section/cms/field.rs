//! Content field descriptors.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Primitive kind of a content field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldKind {
    /// Single-line text.
    String,
    /// Long text / markdown body.
    RichText,
    Boolean,
    Datetime,
    /// Reference to an image in the media folder.
    Image,
}

impl FieldKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::RichText => "rich-text",
            Self::Boolean => "boolean",
            Self::Datetime => "datetime",
            Self::Image => "image",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Editor widget hint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldUi {
    pub component: String,
}

/// One editable field of a collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    #[serde(rename = "type")]
    pub kind: FieldKind,

    /// Machine key, unique within the collection.
    pub name: String,

    /// Display name.
    pub label: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub required: bool,

    /// Primary heading of the content.
    #[serde(default)]
    pub is_title: bool,

    /// Primary content body.
    #[serde(default)]
    pub is_body: bool,

    /// Holds an ordered list of values instead of one.
    #[serde(default)]
    pub list: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ui: Option<FieldUi>,
}

impl FieldDescriptor {
    /// Human readable type, e.g. `string[]` for a list of strings.
    pub fn type_label(&self) -> String {
        if self.list {
            format!("{}[]", self.kind)
        } else {
            self.kind.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tags_field() {
        let field: FieldDescriptor = toml::from_str(
            r#"type = "string"
name = "tags"
label = "Tags"
description = "Tags for this post"
list = true
ui = { component = "tags" }"#,
        )
        .unwrap();
        assert_eq!(field.kind, FieldKind::String);
        assert!(field.list);
        assert!(!field.required);
        assert_eq!(field.ui.as_ref().map(|ui| ui.component.as_str()), Some("tags"));
        assert_eq!(field.type_label(), "string[]");
    }

    #[test]
    fn test_parse_rich_text() {
        let field: FieldDescriptor =
            toml::from_str("type = \"rich-text\"\nname = \"body\"\nlabel = \"Body\"\nis_body = true")
                .unwrap();
        assert_eq!(field.kind, FieldKind::RichText);
        assert!(field.is_body);
        assert_eq!(field.type_label(), "rich-text");
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let result: Result<FieldDescriptor, _> =
            toml::from_str("type = \"number\"\nname = \"n\"\nlabel = \"N\"");
        assert!(result.is_err());
    }
}

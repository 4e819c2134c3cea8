//! Element templates.
//!
//! A template is a serialized property bag an element is built from, the
//! counterpart of an interface-builder document:
//!
//! ```toml
//! kind = "Button"
//!
//! [properties]
//! backgroundColourStyleId = "primary"
//! textStyleId = "headline"
//! ```
//!
//! Property values are raw style ids. An empty string clears the slot.

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An error loading an [ElementTemplate].
#[derive(Error, Debug)]
pub enum TemplateError {
    /// The template is not valid TOML or has the wrong shape.
    #[error("Failed to parse element template: {details}")]
    Parse {
        /// What went wrong.
        details: String,
    },
    /// The template file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A serialized element: its kind and its style id properties.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementTemplate {
    kind: String,
    #[serde(default)]
    properties: IndexMap<String, String>,
}

impl ElementTemplate {
    /// Create an empty template of the given kind.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            properties: IndexMap::new(),
        }
    }

    /// Add a property and return self.
    pub fn with_property(mut self, property: impl Into<String>, id: impl Into<String>) -> Self {
        self.properties.insert(property.into(), id.into());
        self
    }

    /// Parse a template from TOML.
    pub fn from_toml(source: &str) -> Result<Self, TemplateError> {
        toml::from_str(source).map_err(|err| TemplateError::Parse {
            details: err.to_string(),
        })
    }

    /// Read and parse a TOML template file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, TemplateError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml(&source)
    }

    /// Serialize the template to TOML.
    pub fn to_toml(&self) -> Result<String, TemplateError> {
        toml::to_string(self).map_err(|err| TemplateError::Parse {
            details: err.to_string(),
        })
    }

    /// The element kind, e.g. `View`.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// The properties in document order.
    pub fn properties(&self) -> impl Iterator<Item = (&str, &String)> {
        self.properties
            .iter()
            .map(|(property, id)| (property.as_str(), id))
    }

    /// The raw id of a property.
    pub fn property(&self, property: &str) -> Option<&str> {
        self.properties.get(property).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_template() {
        let template = ElementTemplate::from_toml(
            r#"
            kind = "Label"

            [properties]
            textStyleId = "headline"
            backgroundColourStyleId = ""
            "#,
        )
        .unwrap();

        assert_eq!(template.kind(), "Label");
        assert_eq!(template.property("textStyleId"), Some("headline"));
        assert_eq!(template.property("backgroundColourStyleId"), Some(""));
        assert_eq!(
            template.properties().map(|(p, _)| p).collect::<Vec<_>>(),
            vec!["textStyleId", "backgroundColourStyleId"]
        );
    }

    #[test]
    fn test_properties_are_optional() {
        let template = ElementTemplate::from_toml("kind = \"View\"").unwrap();
        assert_eq!(template.properties().count(), 0);
    }

    #[test]
    fn test_missing_kind_is_an_error() {
        let result = ElementTemplate::from_toml("[properties]\ntintColourStyleId = \"tint\"");
        assert!(matches!(result, Err(TemplateError::Parse { .. })));
    }

    #[test]
    fn test_builder_round_trips_through_toml() {
        let template = ElementTemplate::new("Slider").with_property("thumbTintColourStyleId", "accent");
        let parsed = ElementTemplate::from_toml(&template.to_toml().unwrap()).unwrap();
        assert_eq!(parsed, template);
    }
}

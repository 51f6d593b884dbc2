//! Domain model consumed by the generator
//!
//! The model is the already-validated abstract syntax tree of an Ovelha source
//! file: an ordered list of class declarations, each with attributes and
//! method signatures. Parsing the Ovelha grammar happens upstream; this crate
//! reads the serialized tree (JSON or TOML) and never mutates it.
//!
//! # Example Document
//!
//! ```json
//! {
//!   "classes": [
//!     {
//!       "name": "Person",
//!       "features": [
//!         { "kind": "attribute", "name": "name", "type": "text" },
//!         { "kind": "attribute", "name": "age", "type": "integer" },
//!         {
//!           "kind": "method",
//!           "name": "greet",
//!           "type": "text",
//!           "parameters": [{ "name": "other", "type": "Person" }]
//!         }
//!       ]
//!     }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the identity field every generated entity carries
pub const IDENTITY_FIELD: &str = "id";

/// Errors raised while loading a serialized model
#[derive(Debug, Error)]
pub enum ModelError {
    /// The source file could not be read
    #[error("Failed to read model source {path}: {source}")]
    Io {
        /// Source path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The source is not a valid JSON model document
    #[error("Invalid JSON model: {0}")]
    Json(#[from] serde_json::Error),

    /// The source is not a valid TOML model document
    #[error("Invalid TOML model: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Root of the domain model
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    /// Class declarations in source order
    #[serde(default)]
    pub classes: Vec<ClassDecl>,
}

/// One class declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDecl {
    /// Class name, used verbatim for type, file and route derivation
    pub name: String,
    /// Attributes and methods in source order
    #[serde(default)]
    pub features: Vec<Feature>,
}

/// A class member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Feature {
    /// Typed attribute
    Attribute {
        /// Attribute name
        name: String,
        /// Attribute type
        #[serde(rename = "type")]
        type_ref: TypeRef,
    },
    /// Method signature
    Method {
        /// Method name
        name: String,
        /// Return type
        #[serde(rename = "type")]
        type_ref: TypeRef,
        /// Parameters in declaration order
        #[serde(default)]
        parameters: Vec<Parameter>,
    },
}

/// A method parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    /// Parameter name
    pub name: String,
    /// Parameter type
    #[serde(rename = "type")]
    pub type_ref: TypeRef,
}

/// Type name as written in the model: a primitive alias or a class name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeRef(String);

impl TypeRef {
    /// Create a type reference
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The type name as written
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TypeRef {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Borrowed view of an attribute
#[derive(Debug, Clone, Copy)]
pub struct AttributeRef<'a> {
    /// Attribute name
    pub name: &'a str,
    /// Attribute type
    pub type_ref: &'a TypeRef,
}

/// Borrowed view of a method signature
#[derive(Debug, Clone, Copy)]
pub struct MethodRef<'a> {
    /// Method name
    pub name: &'a str,
    /// Return type
    pub type_ref: &'a TypeRef,
    /// Parameters
    pub parameters: &'a [Parameter],
}

/// A validation gap found in an otherwise accepted model
///
/// Diagnostics never block generation; they are reported so the upstream
/// validator can be tightened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The same attribute name appears more than once in a class
    DuplicateAttribute {
        /// Owning class
        class_name: String,
        /// Repeated attribute name
        attribute: String,
    },
    /// An attribute shadows the generated identity field
    ShadowsIdentity {
        /// Owning class
        class_name: String,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateAttribute {
                class_name,
                attribute,
            } => write!(
                f,
                "class {class_name} declares attribute '{attribute}' more than once"
            ),
            Self::ShadowsIdentity { class_name } => write!(
                f,
                "class {class_name} declares an attribute named '{IDENTITY_FIELD}', which collides with the generated identity field"
            ),
        }
    }
}

impl Model {
    /// Create a model from class declarations
    #[must_use]
    pub const fn new(classes: Vec<ClassDecl>) -> Self {
        Self { classes }
    }

    /// Parse a model from a JSON document
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not a valid model
    pub fn from_json_str(input: &str) -> Result<Self, ModelError> {
        Ok(serde_json::from_str(input)?)
    }

    /// Parse a model from a TOML document
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not a valid model
    pub fn from_toml_str(input: &str) -> Result<Self, ModelError> {
        Ok(toml::from_str(input)?)
    }

    /// Load a model from disk, choosing the format by file extension
    ///
    /// `.toml` files are read as TOML; everything else is read as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let content = fs::read_to_string(path).map_err(|source| ModelError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let is_toml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        if is_toml {
            Self::from_toml_str(&content)
        } else {
            Self::from_json_str(&content)
        }
    }

    /// Collect validation gaps the upstream validator let through
    #[must_use]
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for class in &self.classes {
            let mut seen = HashSet::new();
            let mut duplicates = HashSet::new();
            let mut shadows_identity = false;

            for attribute in class.attributes() {
                if attribute.name == IDENTITY_FIELD && !shadows_identity {
                    shadows_identity = true;
                    diagnostics.push(Diagnostic::ShadowsIdentity {
                        class_name: class.name.clone(),
                    });
                }
                if !seen.insert(attribute.name) && duplicates.insert(attribute.name) {
                    diagnostics.push(Diagnostic::DuplicateAttribute {
                        class_name: class.name.clone(),
                        attribute: attribute.name.to_string(),
                    });
                }
            }
        }

        diagnostics
    }
}

impl ClassDecl {
    /// Create a class declaration
    pub fn new(name: impl Into<String>, features: Vec<Feature>) -> Self {
        Self {
            name: name.into(),
            features,
        }
    }

    /// Attributes in declaration order
    pub fn attributes(&self) -> impl Iterator<Item = AttributeRef<'_>> {
        self.features.iter().filter_map(|feature| match feature {
            Feature::Attribute { name, type_ref } => Some(AttributeRef { name, type_ref }),
            Feature::Method { .. } => None,
        })
    }

    /// Methods in declaration order
    pub fn methods(&self) -> impl Iterator<Item = MethodRef<'_>> {
        self.features.iter().filter_map(|feature| match feature {
            Feature::Method {
                name,
                type_ref,
                parameters,
            } => Some(MethodRef {
                name,
                type_ref,
                parameters,
            }),
            Feature::Attribute { .. } => None,
        })
    }

    /// Whether the class declares at least one attribute
    #[must_use]
    pub fn has_attributes(&self) -> bool {
        self.attributes().next().is_some()
    }
}

impl Feature {
    /// Shorthand for an attribute
    pub fn attribute(name: impl Into<String>, type_ref: impl Into<String>) -> Self {
        Self::Attribute {
            name: name.into(),
            type_ref: TypeRef::new(type_ref),
        }
    }

    /// Shorthand for a method
    pub fn method(
        name: impl Into<String>,
        type_ref: impl Into<String>,
        parameters: Vec<Parameter>,
    ) -> Self {
        Self::Method {
            name: name.into(),
            type_ref: TypeRef::new(type_ref),
            parameters,
        }
    }
}

impl Parameter {
    /// Create a parameter
    pub fn new(name: impl Into<String>, type_ref: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_ref: TypeRef::new(type_ref),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERSON_JSON: &str = r#"{
        "classes": [
            {
                "name": "Person",
                "features": [
                    { "kind": "attribute", "name": "name", "type": "text" },
                    { "kind": "method", "name": "greet", "type": "void",
                      "parameters": [{ "name": "other", "type": "Person" }] },
                    { "kind": "attribute", "name": "age", "type": "integer" }
                ]
            },
            { "name": "Empty" }
        ]
    }"#;

    #[test]
    fn test_parse_json_model() {
        let model = Model::from_json_str(PERSON_JSON).unwrap();
        assert_eq!(model.classes.len(), 2);

        let person = &model.classes[0];
        let attributes: Vec<_> = person.attributes().map(|a| a.name).collect();
        assert_eq!(attributes, vec!["name", "age"]);

        let methods: Vec<_> = person.methods().collect();
        assert_eq!(methods.len(), 1);
        assert_eq!(methods[0].name, "greet");
        assert_eq!(methods[0].parameters[0].type_ref.as_str(), "Person");

        assert!(model.classes[1].features.is_empty());
        assert!(!model.classes[1].has_attributes());
    }

    #[test]
    fn test_parse_toml_model() {
        let input = r#"
            [[classes]]
            name = "Pet"

            [[classes.features]]
            kind = "attribute"
            name = "nickname"
            type = "text"
        "#;

        let model = Model::from_toml_str(input).unwrap();
        assert_eq!(model.classes[0].name, "Pet");
        assert_eq!(
            model.classes[0].features[0],
            Feature::attribute("nickname", "text")
        );
    }

    #[test]
    fn test_empty_document_is_empty_model() {
        let model = Model::from_json_str("{}").unwrap();
        assert!(model.classes.is_empty());
    }

    #[test]
    fn test_invalid_json_is_rejected() {
        let result = Model::from_json_str(r#"{ "classes": [ { "features": [] } ] }"#);
        assert!(matches!(result, Err(ModelError::Json(_))));
    }

    #[test]
    fn test_diagnostics_report_duplicates_once() {
        let model = Model::new(vec![ClassDecl::new(
            "Book",
            vec![
                Feature::attribute("title", "text"),
                Feature::attribute("title", "text"),
                Feature::attribute("title", "text"),
                Feature::attribute("id", "integer"),
            ],
        )]);

        let diagnostics = model.diagnostics();
        assert_eq!(
            diagnostics,
            vec![
                Diagnostic::DuplicateAttribute {
                    class_name: "Book".to_string(),
                    attribute: "title".to_string(),
                },
                Diagnostic::ShadowsIdentity {
                    class_name: "Book".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_clean_model_has_no_diagnostics() {
        let model = Model::from_json_str(PERSON_JSON).unwrap();
        assert!(model.diagnostics().is_empty());
    }
}

use crate::document::Property;
use crate::error::{Error, Result};
use indexmap::IndexMap;
use serde::Deserialize;

/// Lookup interface onto the data layer's model metadata.
///
/// The surrounding application backs this with whatever live data layer it
/// maintains; the [`StaticRegistry`] implementation in this module covers the
/// CLI (loaded from a JSON descriptor) and tests.
pub trait ModelRegistry {
    /// Whether the registry knows a model by this name.
    fn has_model(&self, name: &str) -> bool;

    /// Native field kinds for a model.
    ///
    /// # Errors
    ///
    /// Returns an error when the lookup itself fails; reconciliation treats
    /// that as a per-schema warning, never a fatal condition.
    fn fields_of(&self, name: &str) -> Result<IndexMap<String, FieldKind>>;
}

/// Native kind of a single model field, as reported by the data layer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum FieldKind {
    /// Date/time-valued field
    Temporal,
    /// Primary-key or object-id style field
    Identifier,
    /// Any other kind, by its native name
    Other(String),
}

impl From<String> for FieldKind {
    fn from(kind: String) -> Self {
        match kind.to_ascii_lowercase().as_str() {
            "date" | "datetime" | "timestamp" | "temporal" => FieldKind::Temporal,
            "objectid" | "uuid" | "identifier" => FieldKind::Identifier,
            _ => FieldKind::Other(kind),
        }
    }
}

impl FieldKind {
    /// Property descriptor inferred for this kind.
    pub fn descriptor(&self) -> Property {
        match self {
            FieldKind::Temporal => Property::of_type("string", Some("date")),
            FieldKind::Identifier => Property::of_type("string", Some("uuid")),
            FieldKind::Other(kind) => Property::of_type(&kind.to_lowercase(), None),
        }
    }
}

/// Registry backed by a static model description.
///
/// Deserializes from a JSON object of the shape
/// `{"User": {"name": "String", "createdAt": "Date"}}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct StaticRegistry {
    models: IndexMap<String, IndexMap<String, FieldKind>>,
}

impl StaticRegistry {
    /// Add or replace a model's field map.
    pub fn insert(&mut self, name: impl Into<String>, fields: IndexMap<String, FieldKind>) {
        self.models.insert(name.into(), fields);
    }
}

impl ModelRegistry for StaticRegistry {
    fn has_model(&self, name: &str) -> bool {
        self.models.contains_key(name)
    }

    fn fields_of(&self, name: &str) -> Result<IndexMap<String, FieldKind>> {
        self.models
            .get(name)
            .cloned()
            .ok_or_else(|| Error::RegistryError {
                model: name.to_string(),
                message: "model not present in registry".to_string(),
            })
    }
}

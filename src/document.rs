use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// OpenAPI specification version stamped on every generated document.
pub const OPENAPI_VERSION: &str = "3.0.0";

/// Verb (lower-case HTTP method) to operation mapping for one path.
pub type PathOperations = IndexMap<String, Operation>;

/// One security requirement: scheme name to scope list.
pub type SecurityRequirement = IndexMap<String, Vec<String>>;

/// The aggregate API description assembled over one pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// OpenAPI version
    pub openapi: String,
    /// Document metadata
    pub info: Info,
    /// Server list, built from the public URL
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub servers: Vec<Server>,
    /// Global tag list (sorted, deduplicated union of operation tags)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Route templates mapped to verb -> operation
    pub paths: IndexMap<String, PathOperations>,
    /// Reusable schemas and security schemes
    pub components: Components,
}

impl Default for Document {
    fn default() -> Self {
        Self {
            openapi: OPENAPI_VERSION.to_string(),
            info: Info::default(),
            servers: Vec::new(),
            tags: Vec::new(),
            paths: IndexMap::new(),
            components: Components::default(),
        }
    }
}

impl Document {
    /// Iterate all operations across all paths.
    pub fn operations(&self) -> impl Iterator<Item = &Operation> {
        self.paths.values().flat_map(|verbs| verbs.values())
    }

    /// Mutably iterate all operations across all paths.
    pub fn operations_mut(&mut self) -> impl Iterator<Item = &mut Operation> {
        self.paths.values_mut().flat_map(|verbs| verbs.values_mut())
    }
}

/// OpenAPI Info object
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Info {
    /// Document title
    pub title: String,
    /// Documented API version
    pub version: String,
    /// Declared license
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<License>,
}

/// OpenAPI License object
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct License {
    /// License name
    pub name: String,
}

/// OpenAPI Server object
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Server {
    /// Base URL of the server
    pub url: String,
}

/// One verb on one declared path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    /// Category tags derived from the path controller
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Unique operation identity
    #[serde(rename = "operationId", default, skip_serializing_if = "Option::is_none")]
    pub operation_id: Option<String>,
    /// Security requirements attached by the assembler
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub security: Vec<SecurityRequirement>,
    /// Declared request/response metadata, carried through unmodified
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

/// A named data shape; properties may be enriched from the model registry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    /// Field name to type descriptor mapping
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub properties: IndexMap<String, Property>,
    /// Any other declared schema keys
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

/// Type descriptor for a single schema property.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Property {
    /// The type of the property
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub property_type: Option<String>,
    /// Format refinement for primitive types (e.g. "date", "uuid")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Any other declared descriptor keys
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl Property {
    /// Descriptor with a bare type and optional format.
    pub fn of_type(property_type: &str, format: Option<&str>) -> Self {
        Self {
            property_type: Some(property_type.to_string()),
            format: format.map(str::to_string),
            extra: IndexMap::new(),
        }
    }
}

/// OpenAPI Components object
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Components {
    /// Schema definitions
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub schemas: IndexMap<String, Schema>,
    /// Security scheme definitions
    #[serde(
        rename = "securitySchemes",
        default,
        skip_serializing_if = "IndexMap::is_empty"
    )]
    pub security_schemes: IndexMap<String, SecurityScheme>,
}

/// One declared auth mechanism (apiKey family: query, header, or cookie).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecurityScheme {
    /// Scheme type; always "apiKey" for the schemes this crate produces
    #[serde(rename = "type")]
    pub scheme_type: String,
    /// Where the credential is carried (query, header, cookie)
    #[serde(rename = "in")]
    pub location: String,
    /// Name of the parameter, header, or cookie
    pub name: String,
    /// Human-readable description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

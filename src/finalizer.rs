use crate::document::{Document, Info, License, Server, OPENAPI_VERSION};
use log::debug;

/// License name stamped when the project declares none.
pub const FALLBACK_LICENSE: &str = "UNLICENSED";

/// Project metadata overlaid onto the finished document.
#[derive(Debug, Clone, Default)]
pub struct ProjectMeta {
    /// Project name; upper-cased for the document title
    pub name: String,
    /// Project version
    pub version: String,
    /// Declared license, if any
    pub license: Option<String>,
}

/// Stamps document-level metadata onto the merged document.
pub struct DocumentFinalizer;

impl DocumentFinalizer {
    /// Overlay version, title, license, and server URL, in place.
    ///
    /// Only the metadata keys are touched; paths and components populated by
    /// earlier stages are left as they are.
    pub fn finalize(document: &mut Document, project: &ProjectMeta, public_url: &str) {
        debug!("Finalizing document for project {}", project.name);

        document.openapi = OPENAPI_VERSION.to_string();
        document.info = Info {
            title: project.name.to_uppercase(),
            version: project.version.clone(),
            license: Some(License {
                name: project
                    .license
                    .clone()
                    .unwrap_or_else(|| FALLBACK_LICENSE.to_string()),
            }),
        };
        document.servers = vec![Server {
            url: public_url.to_string(),
        }];
    }
}

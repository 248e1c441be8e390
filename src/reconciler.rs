use crate::diagnostics::{Diagnostics, Warning};
use crate::document::Document;
use crate::registry::ModelRegistry;
use log::debug;

/// Overlays registry-inferred field descriptors onto declared schemas.
///
/// Enrichment is best-effort: schema names absent from the registry are
/// skipped silently, and a lookup failure for one schema never aborts the
/// others. Declared properties always win; inferred descriptors only fill
/// gaps.
pub struct SchemaReconciler;

impl SchemaReconciler {
    /// Reconcile every schema known to the registry, in place.
    pub fn reconcile(
        document: &mut Document,
        registry: &dyn ModelRegistry,
        diagnostics: &mut Diagnostics,
    ) {
        for (name, schema) in document.components.schemas.iter_mut() {
            if !registry.has_model(name) {
                continue;
            }

            let fields = match registry.fields_of(name) {
                Ok(fields) => fields,
                Err(e) => {
                    diagnostics.record(Warning::RegistryLookup {
                        schema: name.clone(),
                        message: e.to_string(),
                    });
                    continue;
                }
            };

            let mut inferred = 0usize;
            for (field, kind) in fields {
                schema
                    .properties
                    .entry(field)
                    .or_insert_with(|| {
                        inferred += 1;
                        kind.descriptor()
                    });
            }
            debug!("Reconciled schema {}: {} fields inferred", name, inferred);
        }
    }
}

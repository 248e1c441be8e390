//! Deterministic deep-merge of fragments into one document.
//!
//! Merge semantics are per-field, not generic: a later fragment's operation for
//! the same path+verb replaces the earlier one entirely, while a later
//! fragment's schema merges into the earlier one key-by-key. Fragment order is
//! therefore an observable part of the output; callers feed fragments in
//! discovery (sorted path) order.

use crate::document::{Document, PathOperations, Schema};
use crate::fragment::Fragment;
use indexmap::IndexMap;
use log::debug;

/// Folds fragments into a single document.
pub struct DocumentMerger;

impl DocumentMerger {
    /// Merge fragments, in input order, into a fresh document.
    ///
    /// Fragments are consumed; they have no life after the merge.
    pub fn merge(fragments: Vec<Fragment>) -> Document {
        let mut document = Document::default();

        for fragment in fragments {
            debug!(
                "Merging fragment from {} ({} paths, {} schemas)",
                fragment.source.display(),
                fragment.paths.len(),
                fragment.schemas.len()
            );
            merge_paths(&mut document.paths, fragment.paths);
            merge_schemas(&mut document.components.schemas, fragment.schemas);
        }

        document
    }
}

/// Union path keys; replace whole operations on path+verb collision.
///
/// Verb keys are normalized to lower case here, keeping the document invariant
/// in one place.
pub(crate) fn merge_paths(
    target: &mut IndexMap<String, PathOperations>,
    incoming: IndexMap<String, PathOperations>,
) {
    for (path, verbs) in incoming {
        let entry = target.entry(path).or_insert_with(PathOperations::new);
        for (verb, operation) in verbs {
            entry.insert(verb.to_ascii_lowercase(), operation);
        }
    }
}

/// Union schema names; merge colliding schemas key-by-key.
pub(crate) fn merge_schemas(
    target: &mut IndexMap<String, Schema>,
    incoming: IndexMap<String, Schema>,
) {
    for (name, schema) in incoming {
        if let Some(existing) = target.get_mut(&name) {
            merge_schema(existing, schema);
        } else {
            target.insert(name, schema);
        }
    }
}

/// Per-property union: later properties replace same-named earlier ones, the
/// rest of the earlier schema survives.
fn merge_schema(target: &mut Schema, incoming: Schema) {
    for (field, descriptor) in incoming.properties {
        target.properties.insert(field, descriptor);
    }
    for (key, value) in incoming.extra {
        target.extra.insert(key, value);
    }
}

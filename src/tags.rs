use crate::document::Document;
use std::collections::BTreeSet;

/// Derives the document's global tag list from its operations.
pub struct TagCollector;

impl TagCollector {
    /// Set `document.tags` to the sorted, deduplicated union of every
    /// operation's tag list. Untagged operations contribute nothing.
    pub fn collect(document: &mut Document) {
        let tags: BTreeSet<String> = document
            .operations()
            .flat_map(|operation| operation.tags.iter().cloned())
            .collect();
        document.tags = tags.into_iter().collect();
    }
}

//! Path classification: tags and operation identifiers by naming convention.
//!
//! Every declared path is matched against the grammar
//! `/<kind>/<controller>[/<params>]`. The controller token becomes the
//! operation's category tag; the `(kind, verb, params)` tuple is looked up in
//! an ordered rule table to derive the operation identifier. The table is the
//! whole contract — no branching logic hides outside it.

use crate::diagnostics::{Diagnostics, Warning};
use crate::document::Document;
use heck::ToTitleCase;
use log::debug;
use once_cell::sync::Lazy;
use pluralizer::pluralize;
use regex::Regex;

/// Path grammar: `/<kind>/<controller>[/<params>]`, where `kind` and
/// `controller` are word/dot token sequences and `params` is the remaining
/// suffix (possibly empty).
static PATH_GRAMMAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^/(?P<kind>[\w.]+)/(?P<controller>[\w.]+)/?(?P<params>.*)$")
        .expect("path grammar regex is valid")
});

/// Whether an operation label uses the singular or plural controller name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NameForm {
    Singular,
    Plural,
}

/// One row of the classification table.
struct Rule {
    /// Path kind this row applies to
    kind: &'static str,
    /// Verb to match; `None` matches any verb
    verb: Option<&'static str>,
    /// Params suffix to match; `None` matches any suffix
    params: Option<&'static str>,
    /// Leading label token of the operation identifier
    action: &'static str,
    /// Controller name form used in the label
    form: NameForm,
    /// Trailing label token, when present
    suffix: Option<&'static str>,
    /// Extra tag appended to the operation, when present
    extra_tag: Option<&'static str>,
}

/// Ordered classification table; the first matching row wins.
#[rustfmt::skip]
const CLASSIFICATION_TABLE: &[Rule] = &[
    Rule { kind: "api", verb: Some("delete"), params: None,          action: "Delete",   form: NameForm::Singular, suffix: None,             extra_tag: None },
    Rule { kind: "api", verb: Some("get"),    params: Some(""),      action: "List",     form: NameForm::Plural,   suffix: None,             extra_tag: None },
    Rule { kind: "api", verb: Some("get"),    params: Some(":id"),   action: "Retrieve", form: NameForm::Singular, suffix: None,             extra_tag: None },
    Rule { kind: "api", verb: Some("get"),    params: Some("count"), action: "Count",    form: NameForm::Plural,   suffix: None,             extra_tag: None },
    Rule { kind: "api", verb: Some("get"),    params: Some("meta"),  action: "Retrieve", form: NameForm::Plural,   suffix: Some("Metadata"), extra_tag: None },
    Rule { kind: "api", verb: Some("post"),   params: Some(""),      action: "Create",   form: NameForm::Singular, suffix: None,             extra_tag: None },
    Rule { kind: "api", verb: Some("post"),   params: Some(":id"),   action: "Update",   form: NameForm::Singular, suffix: None,             extra_tag: None },
    Rule { kind: "go",  verb: None,           params: None,          action: "Redirect", form: NameForm::Singular, suffix: None,             extra_tag: Some("Redirect") },
];

/// Derives categorization and operation identity from declared paths.
pub struct PathClassifier;

impl PathClassifier {
    /// Classify every path in the document, in place.
    ///
    /// Paths outside the grammar are left untouched and recorded as warnings.
    /// Verb/params combinations with no table row keep their operations tagged
    /// but get no operation identifier. Classification is idempotent: tags are
    /// assigned, never appended to.
    pub fn classify(document: &mut Document, diagnostics: &mut Diagnostics) {
        for (path, operations) in document.paths.iter_mut() {
            let captures = match PATH_GRAMMAR.captures(path) {
                Some(captures) => captures,
                None => {
                    diagnostics.record(Warning::UnclassifiedPath { path: path.clone() });
                    continue;
                }
            };

            let kind = &captures["kind"];
            let params = &captures["params"];
            let controller_name = captures["controller"].to_title_case();
            let controller_singular = pluralize(&controller_name, 1, false);

            for (verb, operation) in operations.iter_mut() {
                // Categorise by controller
                operation.tags = vec![controller_name.clone()];

                let rule = match lookup(kind, verb, params) {
                    Some(rule) => rule,
                    None => continue,
                };

                let name = match rule.form {
                    NameForm::Singular => &controller_singular,
                    NameForm::Plural => &controller_name,
                };
                let operation_id = match rule.suffix {
                    Some(suffix) => format!("{} {} {}", rule.action, name, suffix),
                    None => format!("{} {}", rule.action, name),
                };

                debug!("Classified {} {} as {}", verb, path, operation_id);
                operation.operation_id = Some(operation_id);

                if let Some(tag) = rule.extra_tag {
                    operation.tags.push(tag.to_string());
                }
            }
        }
    }
}

/// First table row matching the `(kind, verb, params)` tuple.
fn lookup(kind: &str, verb: &str, params: &str) -> Option<&'static Rule> {
    CLASSIFICATION_TABLE.iter().find(|rule| {
        rule.kind == kind
            && rule.verb.map_or(true, |v| v == verb)
            && rule.params.map_or(true, |p| p == params)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Operation, PathOperations};

    fn document_with(path: &str, verbs: &[&str]) -> Document {
        let mut document = Document::default();
        let mut operations = PathOperations::new();
        for verb in verbs {
            operations.insert(verb.to_string(), Operation::default());
        }
        document.paths.insert(path.to_string(), operations);
        document
    }

    fn classify(document: &mut Document) -> Diagnostics {
        let mut diagnostics = Diagnostics::new();
        PathClassifier::classify(document, &mut diagnostics);
        diagnostics
    }

    #[test]
    fn test_list_operation() {
        let mut document = document_with("/api/users", &["get"]);
        let diagnostics = classify(&mut document);

        let operation = &document.paths["/api/users"]["get"];
        assert_eq!(operation.tags, vec!["Users".to_string()]);
        assert_eq!(operation.operation_id.as_deref(), Some("List Users"));
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_retrieve_operation_is_singular() {
        let mut document = document_with("/api/users/:id", &["get"]);
        classify(&mut document);

        let operation = &document.paths["/api/users/:id"]["get"];
        assert_eq!(operation.operation_id.as_deref(), Some("Retrieve User"));
    }

    #[test]
    fn test_count_and_meta_operations() {
        let mut document = document_with("/api/users/count", &["get"]);
        classify(&mut document);
        assert_eq!(
            document.paths["/api/users/count"]["get"]
                .operation_id
                .as_deref(),
            Some("Count Users")
        );

        let mut document = document_with("/api/users/meta", &["get"]);
        classify(&mut document);
        assert_eq!(
            document.paths["/api/users/meta"]["get"]
                .operation_id
                .as_deref(),
            Some("Retrieve Users Metadata")
        );
    }

    #[test]
    fn test_create_and_update_operations() {
        let mut document = document_with("/api/users", &["post"]);
        classify(&mut document);
        assert_eq!(
            document.paths["/api/users"]["post"].operation_id.as_deref(),
            Some("Create User")
        );

        let mut document = document_with("/api/users/:id", &["post"]);
        classify(&mut document);
        assert_eq!(
            document.paths["/api/users/:id"]["post"]
                .operation_id
                .as_deref(),
            Some("Update User")
        );
    }

    #[test]
    fn test_delete_matches_any_params() {
        let mut document = document_with("/api/users/:id", &["delete"]);
        classify(&mut document);
        assert_eq!(
            document.paths["/api/users/:id"]["delete"]
                .operation_id
                .as_deref(),
            Some("Delete User")
        );

        let mut document = document_with("/api/users", &["delete"]);
        classify(&mut document);
        assert_eq!(
            document.paths["/api/users"]["delete"]
                .operation_id
                .as_deref(),
            Some("Delete User")
        );
    }

    #[test]
    fn test_redirect_kind_any_verb() {
        let mut document = document_with("/go/invoices", &["get", "post"]);
        classify(&mut document);

        for verb in ["get", "post"] {
            let operation = &document.paths["/go/invoices"][verb];
            assert_eq!(
                operation.tags,
                vec!["Invoices".to_string(), "Redirect".to_string()]
            );
            assert_eq!(operation.operation_id.as_deref(), Some("Redirect Invoice"));
        }
    }

    #[test]
    fn test_uncovered_combination_leaves_operation_id_unset() {
        let mut document = document_with("/api/users", &["put"]);
        let diagnostics = classify(&mut document);

        let operation = &document.paths["/api/users"]["put"];
        // Still tagged by controller, but no identity
        assert_eq!(operation.tags, vec!["Users".to_string()]);
        assert!(operation.operation_id.is_none());
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_grammar_mismatch_records_warning() {
        let mut document = document_with("/weird", &["get"]);
        let diagnostics = classify(&mut document);

        let operation = &document.paths["/weird"]["get"];
        assert!(operation.tags.is_empty());
        assert!(operation.operation_id.is_none());
        assert_eq!(
            diagnostics.warnings(),
            &[Warning::UnclassifiedPath {
                path: "/weird".to_string()
            }]
        );
    }

    #[test]
    fn test_multi_word_controller_title_case() {
        let mut document = document_with("/api/user-profiles", &["get"]);
        classify(&mut document);

        let operation = &document.paths["/api/user-profiles"]["get"];
        assert_eq!(operation.tags, vec!["User Profiles".to_string()]);
        assert_eq!(operation.operation_id.as_deref(), Some("List User Profiles"));
    }

    #[test]
    fn test_classification_is_idempotent() {
        let mut document = document_with("/go/invoices", &["get"]);
        classify(&mut document);
        let first = document.paths["/go/invoices"]["get"].clone();

        classify(&mut document);
        let second = &document.paths["/go/invoices"]["get"];

        assert_eq!(second.tags, first.tags);
        assert_eq!(second.operation_id, first.operation_id);
    }

    #[test]
    fn test_unknown_kind_is_tagged_but_unnamed() {
        let mut document = document_with("/admin/users", &["get"]);
        let diagnostics = classify(&mut document);

        let operation = &document.paths["/admin/users"]["get"];
        assert_eq!(operation.tags, vec!["Users".to_string()]);
        assert!(operation.operation_id.is_none());
        assert!(diagnostics.is_empty());
    }
}

use crate::document::{Document, SecurityRequirement, SecurityScheme};
use indexmap::IndexMap;
use log::debug;

/// Security enablement flags lifted from runtime configuration.
#[derive(Debug, Clone, Default)]
pub struct SecurityFlags {
    /// API key accepted as a query parameter
    pub api_key_query: bool,
    /// API key accepted as a request header
    pub header_token: bool,
    /// Session-cookie auth
    pub session_cookie: bool,
    /// Name of the session cookie when enabled
    pub cookie_name: String,
}

/// Scheme name for the query-parameter API key.
pub const API_KEY_SCHEME: &str = "apiKey";
/// Scheme name for the header token.
pub const AUTH_HEADER_SCHEME: &str = "authHeader";
/// Scheme name for the session cookie.
pub const COOKIE_SCHEME: &str = "cookie";

/// Builds the security-scheme section and attaches requirements to operations.
pub struct SecurityAssembler;

impl SecurityAssembler {
    /// Declare enabled schemes and attach them to every operation, in place.
    ///
    /// Check order is query, header, cookie; that order is preserved both in
    /// the schemes map and in each operation's requirement list. Requirement
    /// lists are rebuilt from scratch, so re-assembly never duplicates
    /// entries. Requirements apply to every operation regardless of category.
    pub fn assemble(document: &mut Document, flags: &SecurityFlags) {
        let mut schemes: IndexMap<String, SecurityScheme> = IndexMap::new();

        if flags.api_key_query {
            schemes.insert(
                API_KEY_SCHEME.to_string(),
                SecurityScheme {
                    scheme_type: "apiKey".to_string(),
                    location: "query".to_string(),
                    name: "apiKey".to_string(),
                    description: None,
                },
            );
        }
        if flags.header_token {
            schemes.insert(
                AUTH_HEADER_SCHEME.to_string(),
                SecurityScheme {
                    scheme_type: "apiKey".to_string(),
                    location: "header".to_string(),
                    name: "authHeader".to_string(),
                    description: None,
                },
            );
        }
        if flags.session_cookie {
            schemes.insert(
                COOKIE_SCHEME.to_string(),
                SecurityScheme {
                    scheme_type: "apiKey".to_string(),
                    location: "cookie".to_string(),
                    name: flags.cookie_name.clone(),
                    description: Some("Session cookie".to_string()),
                },
            );
        }

        debug!("Assembled {} security schemes", schemes.len());

        let requirements: Vec<SecurityRequirement> = schemes
            .keys()
            .map(|scheme| {
                let mut requirement = SecurityRequirement::new();
                requirement.insert(scheme.clone(), Vec::new());
                requirement
            })
            .collect();

        for operation in document.operations_mut() {
            operation.security = requirements.clone();
        }

        document.components.security_schemes = schemes;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Operation, PathOperations};

    fn flags(query: bool, header: bool, cookie: bool) -> SecurityFlags {
        SecurityFlags {
            api_key_query: query,
            header_token: header,
            session_cookie: cookie,
            cookie_name: "connect.sid".to_string(),
        }
    }

    fn document_with_operations() -> Document {
        let mut document = Document::default();
        let mut verbs = PathOperations::new();
        verbs.insert("get".to_string(), Operation::default());
        verbs.insert("post".to_string(), Operation::default());
        document.paths.insert("/api/users".to_string(), verbs);
        let mut verbs = PathOperations::new();
        verbs.insert("get".to_string(), Operation::default());
        document.paths.insert("/go/invoices".to_string(), verbs);
        document
    }

    #[test]
    fn test_all_flags_disabled() {
        let mut document = document_with_operations();
        SecurityAssembler::assemble(&mut document, &flags(false, false, false));

        assert!(document.components.security_schemes.is_empty());
        assert!(document.operations().all(|op| op.security.is_empty()));
    }

    #[test]
    fn test_all_flags_enabled_order_preserved() {
        let mut document = document_with_operations();
        SecurityAssembler::assemble(&mut document, &flags(true, true, true));

        let names: Vec<&String> = document.components.security_schemes.keys().collect();
        assert_eq!(names, vec!["apiKey", "authHeader", "cookie"]);

        for operation in document.operations() {
            let referenced: Vec<&String> = operation
                .security
                .iter()
                .flat_map(|requirement| requirement.keys())
                .collect();
            assert_eq!(referenced, vec!["apiKey", "authHeader", "cookie"]);
        }
    }

    #[test]
    fn test_cookie_scheme_uses_configured_name() {
        let mut document = document_with_operations();
        SecurityAssembler::assemble(&mut document, &flags(false, false, true));

        let scheme = &document.components.security_schemes[COOKIE_SCHEME];
        assert_eq!(scheme.scheme_type, "apiKey");
        assert_eq!(scheme.location, "cookie");
        assert_eq!(scheme.name, "connect.sid");
        assert!(scheme.description.is_some());
    }

    #[test]
    fn test_header_scheme_shape() {
        let mut document = document_with_operations();
        SecurityAssembler::assemble(&mut document, &flags(false, true, false));

        let scheme = &document.components.security_schemes[AUTH_HEADER_SCHEME];
        assert_eq!(scheme.location, "header");
        assert_eq!(scheme.name, "authHeader");

        for operation in document.operations() {
            assert_eq!(operation.security.len(), 1);
            assert!(operation.security[0].contains_key(AUTH_HEADER_SCHEME));
            assert!(operation.security[0][AUTH_HEADER_SCHEME].is_empty());
        }
    }

    #[test]
    fn test_reassembly_does_not_duplicate() {
        let mut document = document_with_operations();
        SecurityAssembler::assemble(&mut document, &flags(true, true, false));
        SecurityAssembler::assemble(&mut document, &flags(true, true, false));

        assert_eq!(document.components.security_schemes.len(), 2);
        for operation in document.operations() {
            assert_eq!(operation.security.len(), 2);
        }
    }

    #[test]
    fn test_requirements_attach_to_every_category() {
        let mut document = document_with_operations();
        SecurityAssembler::assemble(&mut document, &flags(true, false, false));

        // Both /api and /go operations carry the requirement
        assert!(document
            .operations()
            .all(|op| op.security.len() == 1));
    }
}

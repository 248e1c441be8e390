//! The aggregation-and-enrichment pipeline.
//!
//! Stages run strictly in sequence, each consuming the previous stage's
//! output and mutating the document in place:
//!
//! scan -> read -> merge -> classify -> reconcile -> assemble -> collect tags
//! -> finalize -> serialize -> (render)
//!
//! Only argument validation aborts a run; every per-item failure is isolated,
//! recorded in [`Diagnostics`], and leaves the rest of the document intact.

use crate::classifier::PathClassifier;
use crate::context::DocContext;
use crate::diagnostics::{Diagnostics, Warning};
use crate::document::Document;
use crate::finalizer::DocumentFinalizer;
use crate::fragment::{Fragment, FragmentReader};
use crate::merger::DocumentMerger;
use crate::reconciler::SchemaReconciler;
use crate::registry::ModelRegistry;
use crate::renderer::RenderPipeline;
use crate::scanner::AnnotationScanner;
use crate::security::SecurityAssembler;
use crate::serializer::{serialize_json, serialize_yaml, write_to_file, OutputFormat};
use crate::tags::TagCollector;
use anyhow::Result;
use log::{debug, info};
use std::path::{Path, PathBuf};

/// File name of the Markdown rendering.
const MARKDOWN_FILE: &str = "rest.md";
/// File name of the HTML rendering.
const HTML_FILE: &str = "rest.html";

/// Artifacts produced by one pipeline run.
#[derive(Debug)]
pub struct DocArtifacts {
    /// The finished document, as written to disk
    pub document: Document,
    /// Path of the canonical serialized document
    pub spec_path: PathBuf,
    /// Path of the Markdown rendering, when one was produced
    pub markdown_path: Option<PathBuf>,
    /// Path of the HTML rendering, when one was produced
    pub html_path: Option<PathBuf>,
    /// Everything that was skipped along the way
    pub diagnostics: Diagnostics,
}

/// Run the enrichment core over already-read fragments. No I/O.
pub fn build_document(
    fragments: Vec<Fragment>,
    ctx: &DocContext,
    registry: &dyn ModelRegistry,
    diagnostics: &mut Diagnostics,
) -> Document {
    let mut document = DocumentMerger::merge(fragments);
    PathClassifier::classify(&mut document, diagnostics);
    SchemaReconciler::reconcile(&mut document, registry, diagnostics);
    SecurityAssembler::assemble(&mut document, &ctx.security);
    TagCollector::collect(&mut document);
    DocumentFinalizer::finalize(&mut document, &ctx.project, &ctx.public_url);
    document
}

/// Discover, aggregate, enrich, serialize, and (when a renderer is supplied)
/// render the project's API description.
///
/// The canonical document always lands in `ctx.output_dir`. Markdown and HTML
/// are only produced when `renderer` is present; a failure in either render
/// stage is recorded and the run still succeeds, with earlier artifacts left
/// on disk.
///
/// # Errors
///
/// Returns an error only for filesystem failures writing the artifacts or a
/// document that cannot be serialized.
pub fn generate(
    project_root: &Path,
    ctx: &DocContext,
    registry: &dyn ModelRegistry,
    renderer: Option<&dyn RenderPipeline>,
) -> Result<DocArtifacts> {
    let mut diagnostics = Diagnostics::new();

    info!(
        "Scanning {} for .{} annotation files",
        project_root.display(),
        ctx.annotation_ext
    );
    let scanner = AnnotationScanner::new(project_root.to_path_buf(), ctx.annotation_ext.clone());
    let files = scanner.scan(&mut diagnostics);
    info!("Found {} annotation files", files.len());

    let fragments = FragmentReader::read_files(&files, &mut diagnostics);
    info!("Read {} fragments", fragments.len());

    let document = build_document(fragments, ctx, registry, &mut diagnostics);
    info!(
        "Built document with {} paths, {} schemas, {} tags",
        document.paths.len(),
        document.components.schemas.len(),
        document.tags.len()
    );

    let content = match ctx.format {
        OutputFormat::Json => serialize_json(&document)?,
        OutputFormat::Yaml => serialize_yaml(&document)?,
    };
    let spec_path = ctx.output_dir.join(ctx.format.file_name());
    write_to_file(&content, &spec_path)?;
    info!("Wrote {}", spec_path.display());

    let mut markdown_path = None;
    let mut html_path = None;

    if let Some(renderer) = renderer {
        let mut html_options = ctx.html.clone();
        if html_options.logo_url.is_none() {
            html_options.logo_url = Some(ctx.public_url.clone());
        }

        match renderer.to_markdown(&document, &ctx.markdown) {
            Ok(markdown) => {
                let path = ctx.output_dir.join(MARKDOWN_FILE);
                write_to_file(&markdown, &path)?;
                info!("Wrote {}", path.display());
                markdown_path = Some(path);

                match renderer.to_html(&markdown, &html_options) {
                    Ok(html) => {
                        let path = ctx.output_dir.join(HTML_FILE);
                        write_to_file(&html, &path)?;
                        info!("Wrote {}", path.display());
                        html_path = Some(path);
                    }
                    Err(e) => diagnostics.record(Warning::RenderFailed {
                        stage: "html",
                        message: e.to_string(),
                    }),
                }
            }
            Err(e) => diagnostics.record(Warning::RenderFailed {
                stage: "markdown",
                message: e.to_string(),
            }),
        }
    } else {
        debug!("No render pipeline configured; skipping markdown and html output");
    }

    Ok(DocArtifacts {
        document,
        spec_path,
        markdown_path,
        html_path,
        diagnostics,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Property;
    use crate::registry::{FieldKind, StaticRegistry};
    use crate::security::SecurityFlags;
    use indexmap::IndexMap;
    use std::path::PathBuf;

    fn context() -> DocContext {
        DocContext {
            project: crate::finalizer::ProjectMeta {
                name: "demo".to_string(),
                version: "1.0.0".to_string(),
                license: None,
            },
            security: SecurityFlags {
                api_key_query: true,
                cookie_name: String::new(),
                ..Default::default()
            },
            public_url: "https://demo.test".to_string(),
            ..Default::default()
        }
    }

    fn user_fragment() -> Fragment {
        let mut fragment = Fragment {
            source: PathBuf::from("users.apidoc"),
            ..Default::default()
        };
        let mut verbs = crate::document::PathOperations::new();
        verbs.insert("get".to_string(), crate::document::Operation::default());
        fragment.paths.insert("/api/users".to_string(), verbs);
        let mut schema = crate::document::Schema::default();
        schema
            .properties
            .insert("name".to_string(), Property::of_type("string", None));
        fragment.schemas.insert("User".to_string(), schema);
        fragment
    }

    #[test]
    fn test_build_document_runs_all_stages() {
        let mut registry = StaticRegistry::default();
        let mut fields = IndexMap::new();
        fields.insert("createdAt".to_string(), FieldKind::Temporal);
        registry.insert("User", fields);

        let mut diagnostics = Diagnostics::new();
        let document =
            build_document(vec![user_fragment()], &context(), &registry, &mut diagnostics);

        // Classifier
        let operation = &document.paths["/api/users"]["get"];
        assert_eq!(operation.operation_id.as_deref(), Some("List Users"));
        // Reconciler
        assert!(document.components.schemas["User"]
            .properties
            .contains_key("createdAt"));
        // Assembler
        assert_eq!(operation.security.len(), 1);
        // Tag collector
        assert_eq!(document.tags, vec!["Users".to_string()]);
        // Finalizer
        assert_eq!(document.info.title, "DEMO");
        assert_eq!(document.info.license.as_ref().unwrap().name, "UNLICENSED");
        assert_eq!(document.servers[0].url, "https://demo.test");
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_build_document_is_idempotent_over_enrichment() {
        let registry = StaticRegistry::default();
        let ctx = context();

        let mut diagnostics = Diagnostics::new();
        let mut document =
            build_document(vec![user_fragment()], &ctx, &registry, &mut diagnostics);

        // Re-run the in-place stages over the already-enriched document
        PathClassifier::classify(&mut document, &mut diagnostics);
        SecurityAssembler::assemble(&mut document, &ctx.security);
        TagCollector::collect(&mut document);

        let operation = &document.paths["/api/users"]["get"];
        assert_eq!(operation.tags, vec!["Users".to_string()]);
        assert_eq!(operation.security.len(), 1);
        assert_eq!(document.tags, vec!["Users".to_string()]);
    }
}

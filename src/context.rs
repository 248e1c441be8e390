use crate::finalizer::ProjectMeta;
use crate::renderer::{HtmlOptions, MarkdownOptions};
use crate::scanner::DEFAULT_EXTENSION;
use crate::security::SecurityFlags;
use crate::serializer::OutputFormat;
use std::path::PathBuf;

/// Default directory receiving the generated artifacts.
pub const DEFAULT_OUTPUT_DIR: &str = "dist/docs";

/// Everything one pipeline run needs, threaded explicitly through every stage.
///
/// There is no ambient configuration: a caller constructs a context, hands it
/// to [`crate::pipeline::generate`], and the same value flows through each
/// stage as an argument.
#[derive(Debug, Clone)]
pub struct DocContext {
    /// Project name/version/license stamped onto the document
    pub project: ProjectMeta,
    /// Security enablement flags
    pub security: SecurityFlags,
    /// Public base URL advertised in the server list
    pub public_url: String,
    /// Directory receiving the generated artifacts
    pub output_dir: PathBuf,
    /// Extension of annotation files discovered in the project tree
    pub annotation_ext: String,
    /// Canonical document format
    pub format: OutputFormat,
    /// Markdown conversion options
    pub markdown: MarkdownOptions,
    /// HTML rendering options
    pub html: HtmlOptions,
}

impl Default for DocContext {
    fn default() -> Self {
        Self {
            project: ProjectMeta::default(),
            security: SecurityFlags::default(),
            public_url: "http://localhost".to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            annotation_ext: DEFAULT_EXTENSION.to_string(),
            format: OutputFormat::Json,
            markdown: MarkdownOptions::default(),
            html: HtmlOptions::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_context() {
        let ctx = DocContext::default();
        assert_eq!(ctx.output_dir, PathBuf::from("dist/docs"));
        assert_eq!(ctx.annotation_ext, "apidoc");
        assert_eq!(ctx.format, OutputFormat::Json);
        assert!(ctx.markdown.code_samples);
        assert!(ctx.html.inline_assets);
        assert!(!ctx.security.api_key_query);
    }
}

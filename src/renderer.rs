use crate::document::Document;
use crate::error::Result;
use std::path::PathBuf;

/// Options forwarded to the Markdown conversion collaborator.
#[derive(Debug, Clone)]
pub struct MarkdownOptions {
    /// Generate request code samples alongside each operation
    pub code_samples: bool,
    /// Custom template set overriding the collaborator's defaults
    pub user_templates: Option<PathBuf>,
}

impl Default for MarkdownOptions {
    fn default() -> Self {
        Self {
            code_samples: true,
            user_templates: None,
        }
    }
}

/// Options forwarded to the HTML rendering collaborator.
#[derive(Debug, Clone)]
pub struct HtmlOptions {
    /// Inline all assets into the produced page
    pub inline_assets: bool,
    /// Logo image path
    pub logo: Option<PathBuf>,
    /// Link target for the logo; the pipeline fills in the public URL when unset
    pub logo_url: Option<String>,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            inline_assets: true,
            logo: None,
            logo_url: None,
        }
    }
}

/// External conversion pipeline turning the finished document into reference
/// documentation.
///
/// This crate does not ship an implementation; the surrounding application
/// provides one. Errors from either stage are caught by the pipeline, recorded
/// as warnings, and never abort a run.
pub trait RenderPipeline {
    /// Convert the document to Markdown.
    fn to_markdown(&self, document: &Document, options: &MarkdownOptions) -> Result<String>;

    /// Convert the Markdown to a standalone HTML page.
    fn to_html(&self, markdown: &str, options: &HtmlOptions) -> Result<String>;
}

//! Structured diagnostics collected across a pipeline run.
//!
//! Recovered failures never abort the run; they are logged and recorded here so
//! callers (and tests) can assert on which paths or fragments were skipped.

use std::fmt;
use std::path::PathBuf;

/// A single recovered failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// An annotation file could not be read.
    UnreadableFile {
        /// File that failed to read
        file: PathBuf,
        /// Underlying error text
        message: String,
    },
    /// An annotation block was not a well-formed partial document.
    MalformedFragment {
        /// File containing the block
        file: PathBuf,
        /// Underlying error text
        message: String,
    },
    /// A declared path does not match the `/type/controller[/params]` grammar.
    UnclassifiedPath {
        /// The offending path template
        path: String,
    },
    /// The model registry failed while looking up a schema's fields.
    RegistryLookup {
        /// Schema whose lookup failed
        schema: String,
        /// Underlying error text
        message: String,
    },
    /// A render stage failed; artifacts written before it remain on disk.
    RenderFailed {
        /// Which stage failed ("markdown" or "html")
        stage: &'static str,
        /// Underlying error text
        message: String,
    },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Warning::UnreadableFile { file, message } => {
                write!(f, "Unable to read annotation file {}: {}", file.display(), message)
            }
            Warning::MalformedFragment { file, message } => {
                write!(f, "Skipping malformed annotation block in {}: {}", file.display(), message)
            }
            Warning::UnclassifiedPath { path } => {
                write!(f, "Unable to parse path {}", path)
            }
            Warning::RegistryLookup { schema, message } => {
                write!(f, "Model registry lookup failed for schema {}: {}", schema, message)
            }
            Warning::RenderFailed { stage, message } => {
                write!(f, "Render pipeline failed at {} stage: {}", stage, message)
            }
        }
    }
}

/// Ordered collection of warnings for one pipeline run.
#[derive(Debug, Default)]
pub struct Diagnostics {
    warnings: Vec<Warning>,
}

impl Diagnostics {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Log and record a warning.
    pub fn record(&mut self, warning: Warning) {
        log::warn!("{}", warning);
        self.warnings.push(warning);
    }

    /// All warnings recorded so far, in order.
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Number of recorded warnings.
    pub fn len(&self) -> usize {
        self.warnings.len()
    }

    /// Whether nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }
}

//! OpenAPI from annotations - one enriched API document from scattered files.
//!
//! This library discovers source-annotated route-description files across a
//! project, merges them into a single normalized OpenAPI 3.0 document, and
//! enriches that document with inferred metadata: categorization tags,
//! operation identifiers derived from the path naming convention, security
//! requirements built from configuration flags, and schema shapes pulled from
//! a data-model registry.
//!
//! # Architecture
//!
//! The pipeline stages run strictly in sequence:
//!
//! 1. [`scanner`] - Discovers annotation files across the project tree
//! 2. [`fragment`] - Reads fenced annotation blocks into partial documents
//! 3. [`merger`] - Deep-merges fragments with deterministic conflict rules
//! 4. [`classifier`] - Derives tags and operation identifiers from path grammar
//! 5. [`reconciler`] - Overlays registry-inferred field types onto schemas
//! 6. [`security`] - Assembles security schemes and per-operation requirements
//! 7. [`tags`] - Collects the global tag list
//! 8. [`finalizer`] - Stamps document-level metadata
//! 9. [`serializer`] - Serializes the document to JSON or YAML
//!
//! [`pipeline`] wires the stages together; [`diagnostics`] carries everything
//! that was skipped along the way. Markdown/HTML conversion is delegated to an
//! external [`renderer::RenderPipeline`] collaborator.
//!
//! # Example Usage
//!
//! ```no_run
//! use openapi_from_annotations::context::DocContext;
//! use openapi_from_annotations::pipeline;
//! use openapi_from_annotations::registry::StaticRegistry;
//! use std::path::Path;
//!
//! let ctx = DocContext::default();
//! let registry = StaticRegistry::default();
//!
//! let artifacts = pipeline::generate(Path::new("./my-project"), &ctx, &registry, None).unwrap();
//! println!("Wrote {}", artifacts.spec_path.display());
//! for warning in artifacts.diagnostics.warnings() {
//!     eprintln!("skipped: {}", warning);
//! }
//! ```
//!
//! # Command-Line Interface
//!
//! For command-line usage, see the [`cli`] module which provides a complete
//! CLI application.

pub mod cli;
pub mod classifier;
pub mod context;
pub mod diagnostics;
pub mod document;
pub mod error;
pub mod finalizer;
pub mod fragment;
pub mod merger;
pub mod pipeline;
pub mod reconciler;
pub mod registry;
pub mod renderer;
pub mod scanner;
pub mod security;
pub mod serializer;
pub mod tags;

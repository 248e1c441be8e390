use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use std::path::PathBuf;

use crate::scanner;
use crate::serializer::OutputFormat;

/// Aggregates API annotation blocks scattered across a project into one
/// enriched OpenAPI document
#[derive(Parser, Debug)]
#[command(name = "openapi-from-annotations")]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Project directory scanned for annotation files
    #[arg(value_name = "PROJECT_PATH")]
    pub project_path: PathBuf,

    /// Output directory for generated artifacts
    #[arg(short = 'o', long = "output", value_name = "DIR", default_value = crate::context::DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Canonical document format (json or yaml)
    #[arg(short = 'f', long = "format", value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Annotation file extension to discover
    #[arg(long = "ext", value_name = "EXT", default_value = scanner::DEFAULT_EXTENSION)]
    pub annotation_ext: String,

    /// Project name; upper-cased for the document title
    #[arg(long = "name", default_value = "api")]
    pub project_name: String,

    /// Project version stamped into the document info
    #[arg(long = "project-version", default_value = "0.0.0")]
    pub project_version: String,

    /// Declared project license
    #[arg(long = "license")]
    pub license: Option<String>,

    /// Public base URL advertised in the server list
    #[arg(long = "public-url", default_value = "http://localhost")]
    pub public_url: String,

    /// JSON file describing the data-model registry
    #[arg(long = "models", value_name = "FILE")]
    pub models: Option<PathBuf>,

    /// Enable API-key-via-query security
    #[arg(long = "auth-api-key")]
    pub auth_api_key: bool,

    /// Enable header-token security
    #[arg(long = "auth-header")]
    pub auth_header: bool,

    /// Enable session-cookie security, using this cookie name
    #[arg(long = "auth-cookie", value_name = "NAME")]
    pub auth_cookie: Option<String>,

    /// Enable verbose output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

/// Parse command line arguments
pub fn parse_args() -> Result<CliArgs> {
    let args = CliArgs::parse();
    parse_args_from_parsed(args)
}

/// Validate and log already-parsed arguments
pub fn parse_args_from_parsed(args: CliArgs) -> Result<CliArgs> {
    debug!("Parsed arguments: {:?}", args);

    // Validate project path exists
    if !args.project_path.exists() {
        anyhow::bail!(
            "Project path does not exist: {}",
            args.project_path.display()
        );
    }

    // Validate project path is a directory
    if !args.project_path.is_dir() {
        anyhow::bail!(
            "Project path is not a directory: {}",
            args.project_path.display()
        );
    }

    if let Some(ref models) = args.models {
        if !models.is_file() {
            anyhow::bail!("Models file does not exist: {}", models.display());
        }
    }

    info!("Project path: {}", args.project_path.display());
    info!("Output directory: {}", args.output_dir.display());
    info!("Format: {:?}", args.format);
    if let Some(ref models) = args.models {
        info!("Model registry: {}", models.display());
    } else {
        info!("Model registry: none");
    }

    Ok(args)
}

/// Run the main workflow
pub fn run(args: CliArgs) -> Result<()> {
    use crate::context::DocContext;
    use crate::finalizer::ProjectMeta;
    use crate::pipeline;
    use crate::registry::StaticRegistry;
    use crate::security::SecurityFlags;

    info!("Starting API document generation...");

    // Step 1: Load the model registry, when one was given
    let registry = match &args.models {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read models file: {}", path.display()))?;
            serde_json::from_str::<StaticRegistry>(&content)
                .with_context(|| format!("Failed to parse models file: {}", path.display()))?
        }
        None => StaticRegistry::default(),
    };

    // Step 2: Build the run context from the arguments
    let ctx = DocContext {
        project: ProjectMeta {
            name: args.project_name.clone(),
            version: args.project_version.clone(),
            license: args.license.clone(),
        },
        security: SecurityFlags {
            api_key_query: args.auth_api_key,
            header_token: args.auth_header,
            session_cookie: args.auth_cookie.is_some(),
            cookie_name: args.auth_cookie.clone().unwrap_or_default(),
        },
        public_url: args.public_url.clone(),
        output_dir: args.output_dir.clone(),
        annotation_ext: args.annotation_ext.clone(),
        format: args.format,
        ..Default::default()
    };

    // Step 3: Run the pipeline. The CLI carries no render collaborator, so
    // only the canonical document is produced.
    let artifacts = pipeline::generate(&args.project_path, &ctx, &registry, None)?;

    // Step 4: Display summary
    info!("Generation complete!");
    info!("Summary:");
    info!("  - Paths: {}", artifacts.document.paths.len());
    info!(
        "  - Schemas: {}",
        artifacts.document.components.schemas.len()
    );
    info!("  - Tags: {}", artifacts.document.tags.len());
    info!("  - Warnings: {}", artifacts.diagnostics.len());
    info!("  - Document: {}", artifacts.spec_path.display());

    Ok(())
}

use crate::diagnostics::{Diagnostics, Warning};
use crate::document::{PathOperations, Schema};
use crate::error::{Error, Result};
use crate::merger;
use indexmap::IndexMap;
use log::debug;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Fence line opening an annotation block inside an annotation file.
const BLOCK_OPEN: &str = "```openapi";
/// Fence line closing an annotation block.
const BLOCK_CLOSE: &str = "```";

/// Reader for source-annotated route-description files.
///
/// An annotation file is prose interleaved with fenced blocks:
///
/// ````text
/// Anything outside a fence is ignored.
///
/// ```openapi
/// paths:
///   /api/users:
///     get:
///       summary: List all users
/// schemas:
///   User:
///     properties:
///       name: { type: string }
/// ```
/// ````
///
/// Each block body is YAML with optional top-level `paths` and `schemas` keys.
/// All blocks of one file combine, in order, into a single [`Fragment`].
pub struct FragmentReader;

/// A partial document contributed by one annotation file.
///
/// Transient: fragments are consumed by the merger and discarded.
#[derive(Debug, Clone, Default)]
pub struct Fragment {
    /// File the fragment was read from
    pub source: PathBuf,
    /// Declared path definitions
    pub paths: IndexMap<String, PathOperations>,
    /// Declared schema definitions
    pub schemas: IndexMap<String, Schema>,
}

/// Deserialized body of a single fenced block.
#[derive(Debug, Default, Deserialize)]
struct BlockBody {
    #[serde(default)]
    paths: IndexMap<String, PathOperations>,
    #[serde(default)]
    schemas: IndexMap<String, Schema>,
}

impl FragmentReader {
    /// Reads one annotation file into a fragment.
    ///
    /// Malformed blocks are recorded in `diagnostics` and skipped; the file
    /// still yields a fragment from its remaining blocks (possibly empty).
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, or if a fence is left
    /// unterminated (the file as a whole is not well-formed).
    pub fn read_file(path: &Path, diagnostics: &mut Diagnostics) -> Result<Fragment> {
        debug!("Reading annotation file: {}", path.display());

        let content = fs::read_to_string(path)?;

        let mut fragment = Fragment {
            source: path.to_path_buf(),
            ..Default::default()
        };

        let mut blocks = 0usize;
        for body in extract_blocks(&content, path)? {
            match serde_yaml::from_str::<BlockBody>(&body) {
                Ok(block) => {
                    blocks += 1;
                    merger::merge_paths(&mut fragment.paths, block.paths);
                    merger::merge_schemas(&mut fragment.schemas, block.schemas);
                }
                Err(e) => {
                    diagnostics.record(Warning::MalformedFragment {
                        file: path.to_path_buf(),
                        message: e.to_string(),
                    });
                }
            }
        }

        debug!(
            "Parsed {} annotation blocks from {}",
            blocks,
            path.display()
        );

        Ok(fragment)
    }

    /// Reads many annotation files, continuing past bad ones.
    ///
    /// Files that cannot be read or are not well-formed are recorded in
    /// `diagnostics` and skipped, so a single bad file never costs the rest of
    /// the document.
    pub fn read_files(paths: &[PathBuf], diagnostics: &mut Diagnostics) -> Vec<Fragment> {
        debug!("Reading {} annotation files", paths.len());

        let mut fragments = Vec::with_capacity(paths.len());
        for path in paths {
            match Self::read_file(path, diagnostics) {
                Ok(fragment) => fragments.push(fragment),
                Err(Error::FragmentError { file, message }) => {
                    diagnostics.record(Warning::MalformedFragment { file, message });
                }
                Err(e) => {
                    diagnostics.record(Warning::UnreadableFile {
                        file: path.clone(),
                        message: e.to_string(),
                    });
                }
            }
        }

        fragments
    }
}

/// Collect the bodies of all fenced annotation blocks in a file.
fn extract_blocks(content: &str, path: &Path) -> Result<Vec<String>> {
    let mut blocks = Vec::new();
    let mut current: Option<Vec<&str>> = None;

    for line in content.lines() {
        let trimmed = line.trim_end();
        match current.as_mut() {
            None => {
                if trimmed.trim_start() == BLOCK_OPEN {
                    current = Some(Vec::new());
                }
            }
            Some(lines) => {
                if trimmed.trim_start() == BLOCK_CLOSE {
                    blocks.push(lines.join("\n"));
                    current = None;
                } else {
                    lines.push(line);
                }
            }
        }
    }

    if current.is_some() {
        return Err(Error::FragmentError {
            file: path.to_path_buf(),
            message: "unterminated annotation block".to_string(),
        });
    }

    Ok(blocks)
}

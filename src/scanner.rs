use crate::diagnostics::{Diagnostics, Warning};
use log::debug;
use std::path::PathBuf;
use walkdir::WalkDir;

/// Default extension of annotation files discovered in a project tree.
pub const DEFAULT_EXTENSION: &str = "apidoc";

/// Scanner that discovers annotation files across a project tree.
///
/// The `AnnotationScanner` recursively walks a project directory and collects
/// every file carrying the configured annotation extension. Common build and
/// dependency directories (`target`, `node_modules`) and hidden directories are
/// skipped.
///
/// The returned list is sorted lexically by path. Fragment merge precedence
/// follows discovery order, so the ordering here is an observable part of the
/// output and must stay deterministic.
///
/// # Example
///
/// ```no_run
/// use openapi_from_annotations::diagnostics::Diagnostics;
/// use openapi_from_annotations::scanner::AnnotationScanner;
/// use std::path::PathBuf;
///
/// let scanner = AnnotationScanner::new(PathBuf::from("./my-project"), "apidoc");
/// let mut diagnostics = Diagnostics::new();
/// let files = scanner.scan(&mut diagnostics);
/// println!("Found {} annotation files", files.len());
/// ```
pub struct AnnotationScanner {
    root_path: PathBuf,
    extension: String,
}

impl AnnotationScanner {
    /// Creates a new scanner for the given root directory and file extension.
    pub fn new(root_path: PathBuf, extension: impl Into<String>) -> Self {
        Self {
            root_path,
            extension: extension.into(),
        }
    }

    /// Walks the directory tree and collects matching files, sorted by path.
    ///
    /// Inaccessible directories or files are recorded in `diagnostics` and
    /// skipped; scanning always continues.
    pub fn scan(&self, diagnostics: &mut Diagnostics) -> Vec<PathBuf> {
        let mut files = Vec::new();

        for entry in WalkDir::new(&self.root_path)
            .into_iter()
            .filter_entry(|e| {
                // Don't filter the root directory itself
                if e.path() == self.root_path {
                    return true;
                }

                // Skip hidden, build, and dependency directories
                let file_name = e.file_name().to_string_lossy();
                let is_hidden = file_name.starts_with('.');
                let is_ignored = file_name == "target" || file_name == "node_modules";

                !is_hidden && !is_ignored
            })
        {
            match entry {
                Ok(entry) => {
                    let path = entry.path();

                    if path.is_file()
                        && path.extension().and_then(|s| s.to_str())
                            == Some(self.extension.as_str())
                    {
                        files.push(path.to_path_buf());
                    }
                }
                Err(e) => {
                    let file = e
                        .path()
                        .map(|p| p.to_path_buf())
                        .unwrap_or_else(|| self.root_path.clone());
                    diagnostics.record(Warning::UnreadableFile {
                        file,
                        message: e.to_string(),
                    });
                }
            }
        }

        // Merge precedence is discovery order; keep it stable across platforms.
        files.sort();

        debug!(
            "Scan of {} found {} .{} files",
            self.root_path.display(),
            files.len(),
            self.extension
        );

        files
    }
}

// crates/find_candidate_files/src/lib.rs

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use walkdir::{DirEntry, WalkDir};

/// Walks the given roots and returns every file that passes the extension and
/// age filters, in discovery order.
///
/// * `roots` - files or directories; files are tested directly.
/// * `extension` - required extension without the leading dot.
/// * `excludes` - directories whose absolute path contains any of these
///   substrings are skipped together with everything below them.
/// * `max_age` - optional maximum age in seconds.
pub fn find_candidate_files<S: AsRef<str>>(
    roots: &[S],
    extension: &str,
    excludes: &[String],
    max_age: Option<f64>,
) -> Vec<PathBuf> {
    let finder = CandidateFinder::new(extension, excludes, max_age);
    finder.find(roots)
}

/// Holds the selection criteria for one discovery pass.
pub struct CandidateFinder<'a> {
    suffix: String,
    excludes: &'a [String],
    max_age: Option<f64>,
}

impl<'a> CandidateFinder<'a> {
    pub fn new(extension: &str, excludes: &'a [String], max_age: Option<f64>) -> Self {
        Self {
            suffix: format!(".{}", extension),
            excludes,
            max_age,
        }
    }

    pub fn find<S: AsRef<str>>(&self, roots: &[S]) -> Vec<PathBuf> {
        let mut files = Vec::new();

        for root in roots {
            let path = Path::new(root.as_ref());
            if path.is_file() {
                if self.should_process_file(path) {
                    files.push(path.to_path_buf());
                }
            } else if path.is_dir() {
                files.extend(self.walk_directory(path));
            } else {
                log::warn!("Path does not exist: {}", path.display());
            }
        }

        log::info!("Found {} files to process", files.len());
        files
    }

    fn walk_directory(&self, root: &Path) -> Vec<PathBuf> {
        let mut files = Vec::new();

        let walker = WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !self.is_excluded_dir(entry));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    let at = err
                        .path()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| root.display().to_string());
                    log::warn!("Cannot access {}: {}", at, err);
                    continue;
                }
            };
            if entry.file_type().is_dir() {
                continue;
            }
            let path = entry.path();
            // Symlinks count when they point at a regular file.
            if path.is_file() && self.should_process_file(path) {
                files.push(entry.into_path());
            }
        }

        files
    }

    /// Extension and age checks for a single file.
    pub fn should_process_file(&self, path: &Path) -> bool {
        let matches_ext = path
            .file_name()
            .map(|name| name.to_string_lossy().ends_with(&self.suffix))
            .unwrap_or(false);
        if !matches_ext {
            return false;
        }

        match self.max_age {
            None => true,
            Some(max_age) => match file_age_seconds(path) {
                Some(age) => age <= max_age,
                None => {
                    log::warn!("Could not check modification time for: {}", path.display());
                    false
                }
            },
        }
    }

    fn is_excluded_dir(&self, entry: &DirEntry) -> bool {
        // Roots are never pruned, only what lies below them.
        if entry.depth() == 0 || !entry.file_type().is_dir() {
            return false;
        }
        let abs = absolute_path_string(entry.path());
        match self.excludes.iter().find(|ex| abs.contains(ex.as_str())) {
            Some(ex) => {
                log::debug!("Excluding directory: {} (matches '{}')", entry.path().display(), ex);
                true
            }
            None => false,
        }
    }
}

/// Seconds since the file was last modified. A modification time in the
/// future counts as age zero.
fn file_age_seconds(path: &Path) -> Option<f64> {
    let modified = fs::metadata(path).and_then(|m| m.modified()).ok()?;
    let age = SystemTime::now()
        .duration_since(modified)
        .map(|d| d.as_secs_f64())
        .unwrap_or(0.0);
    Some(age)
}

fn absolute_path_string(path: &Path) -> String {
    std::path::absolute(path)
        .unwrap_or_else(|_| path.to_path_buf())
        .to_string_lossy()
        .into_owned()
}

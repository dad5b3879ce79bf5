//! Feature file discovery and loading.
//!
//! [`read_feature_files_from_folder`] walks a directory tree depth-first and
//! lazily yields every feature file it finds together with its lines. No I/O
//! failure escapes the reader: unreadable entries are skipped and counted,
//! unreadable files load as empty content.

use std::{
    fs,
    path::{Path, PathBuf},
};

use colored::Colorize;
use glob::Pattern;
use walkdir::WalkDir;

use crate::config::{Config, DEFAULT_EXTENSIONS};

/// Which files a scan picks up.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// File extensions recognized as feature files, without the leading dot.
    pub extensions: Vec<String>,
    /// Paths matching any of these patterns are skipped, directories included.
    /// Patterns are tried against both the walked path and the path relative
    /// to the root.
    pub ignores: Vec<Pattern>,
    /// Paths relative to the root whose whole subtree is skipped.
    pub ignore_paths: Vec<PathBuf>,
    /// Print a warning for every skipped path.
    pub verbose: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            ignores: Vec::new(),
            ignore_paths: Vec::new(),
            verbose: false,
        }
    }
}

impl ScanOptions {
    pub fn from_config(config: &Config, verbose: bool) -> Self {
        Self {
            extensions: config.extensions.clone(),
            ignores: config.ignore_patterns(),
            ignore_paths: config.ignore_paths(),
            verbose,
        }
    }

    fn is_ignored(&self, root: &Path, path: &Path) -> bool {
        let relative = path.strip_prefix(root).unwrap_or(path);

        // Literal path mode: prefix match on whole components
        if self.ignore_paths.iter().any(|ignore_path| {
            let ignore_path = strip_cur_dir(ignore_path);
            relative.starts_with(ignore_path) || path.starts_with(ignore_path)
        }) {
            return true;
        }

        let path_str = path.to_string_lossy();
        let relative_str = relative.to_string_lossy();
        self.ignores
            .iter()
            .any(|p| p.matches(&path_str) || p.matches(&relative_str))
    }
}

/// A discovered feature file and its content split into lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureFile {
    pub path: PathBuf,
    pub lines: Vec<String>,
}

/// Lazy, one-shot sequence of the feature files under a root directory.
///
/// Directories are visited depth-first with siblings in file name order.
pub struct FeatureFiles {
    root: PathBuf,
    walker: walkdir::IntoIter,
    options: ScanOptions,
    skipped_count: usize,
}

impl FeatureFiles {
    /// Number of paths that could not be accessed so far.
    pub fn skipped_count(&self) -> usize {
        self.skipped_count
    }
}

impl Iterator for FeatureFiles {
    type Item = FeatureFile;

    fn next(&mut self) -> Option<FeatureFile> {
        loop {
            let entry = match self.walker.next()? {
                Ok(entry) => entry,
                Err(e) => {
                    self.skipped_count += 1;
                    if self.options.verbose {
                        eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                    }
                    continue;
                }
            };
            let path = entry.path();

            if self.options.is_ignored(&self.root, path) {
                if entry.file_type().is_dir() {
                    self.walker.skip_current_dir();
                }
                continue;
            }

            if !path.is_file() || !is_feature_file(path, &self.options.extensions) {
                continue;
            }

            let path = resolve_path(path);
            let lines = read_content_feature_file(&path)
                .lines()
                .map(String::from)
                .collect();
            return Some(FeatureFile { path, lines });
        }
    }
}

/// Discovers feature files under `root`.
///
/// A missing or unreadable `root` produces an empty sequence; see
/// [`FeatureFiles::skipped_count`] for how many paths were inaccessible.
pub fn read_feature_files_from_folder(
    root: impl AsRef<Path>,
    options: &ScanOptions,
) -> FeatureFiles {
    let root = root.as_ref();
    FeatureFiles {
        root: root.to_path_buf(),
        walker: WalkDir::new(root).sort_by_file_name().into_iter(),
        options: options.clone(),
        skipped_count: 0,
    }
}

/// Reads the whole file at `path`.
///
/// Returns an empty string when the file cannot be read, which callers
/// cannot tell apart from an empty file.
pub fn read_content_feature_file(path: impl AsRef<Path>) -> String {
    fs::read_to_string(path).unwrap_or_default()
}

/// Checks whether `path` has one of `extensions` (given with or without a
/// leading dot).
pub fn is_feature_file(path: &Path, extensions: &[String]) -> bool {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return false;
    };
    extensions
        .iter()
        .any(|candidate| candidate.trim_start_matches('.') == ext)
}

fn strip_cur_dir(path: &Path) -> &Path {
    path.strip_prefix(".").unwrap_or(path)
}

fn resolve_path(path: &Path) -> PathBuf {
    fs::canonicalize(path)
        .or_else(|_| std::path::absolute(path))
        .unwrap_or_else(|_| path.to_path_buf())
}

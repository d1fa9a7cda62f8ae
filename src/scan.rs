//! Directory scanning.
//!
//! Walks a directory, routes each file to a language by extension, and
//! extracts methods from every supported file. Files are processed in
//! parallel; a file that fails is reported and the scan carries on.

use std::path::{Path, PathBuf};

use globset::GlobSet;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use walkdir::{DirEntry, WalkDir};

use crate::language::Language;
use crate::parser::{ExtractError, ExtractedMethod, Extractor};

/// What to scan and what to leave out.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Only scan files of this language
    pub language: Option<Language>,
    /// Paths (relative to the scan root) to skip
    pub exclude: GlobSet,
    /// Directory names never descended into
    pub skip_dirs: Vec<String>,
    /// Files larger than this many bytes are reported, not parsed
    pub max_file_size: u64,
    /// Follow symbolic links
    pub follow_links: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            language: None,
            exclude: GlobSet::empty(),
            skip_dirs: crate::config::DEFAULT_SKIP_DIRS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            max_file_size: crate::config::DEFAULT_MAX_FILE_SIZE,
            follow_links: false,
        }
    }
}

impl ScanOptions {
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }
}

/// Outcome of extracting one file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileOutcome {
    Methods(Vec<ExtractedMethod>),
    Error(String),
}

/// Result for a single scanned file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileReport {
    pub file_path: String,
    #[serde(flatten)]
    pub outcome: FileOutcome,
}

impl FileReport {
    pub fn methods(&self) -> &[ExtractedMethod] {
        match &self.outcome {
            FileOutcome::Methods(methods) => methods,
            FileOutcome::Error(_) => &[],
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            FileOutcome::Methods(_) => None,
            FileOutcome::Error(e) => Some(e),
        }
    }
}

/// Results for a whole scan, in walk order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScanReport {
    pub files: Vec<FileReport>,
}

impl ScanReport {
    pub fn method_count(&self) -> usize {
        self.files.iter().map(|f| f.methods().len()).sum()
    }

    pub fn error_count(&self) -> usize {
        self.files.iter().filter(|f| f.error().is_some()).count()
    }
}

/// Scan `root` (a directory or a single file) and extract methods.
///
/// Fails only when the root does not exist or the requested language has
/// no grammar profile; per-file failures end up in the report.
pub fn scan(root: &Path, options: &ScanOptions, extractor: &Extractor) -> anyhow::Result<ScanReport> {
    if !root.exists() {
        anyhow::bail!("directory not found: {}", root.display());
    }
    if let Some(language) = options.language {
        if !extractor.registry().supports(language) {
            return Err(ExtractError::UnsupportedLanguage(language).into());
        }
    }

    let files = collect_files(root, options, extractor)?;
    tracing::debug!(root = %root.display(), files = files.len(), "collected files");

    let files = files
        .par_iter()
        .map(|(path, language)| scan_file(path, *language, options, extractor))
        .collect();

    Ok(ScanReport { files })
}

/// Walk `root` and pick the files to extract, sorted by path.
pub fn collect_files(
    root: &Path,
    options: &ScanOptions,
    extractor: &Extractor,
) -> anyhow::Result<Vec<(PathBuf, Language)>> {
    let mut files = Vec::new();

    let walker = WalkDir::new(root)
        .follow_links(options.follow_links)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_skipped_dir(e, root, options));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("walk error: {}", e);
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if is_excluded(path, root, &options.exclude) {
            continue;
        }

        let language = Language::from_path(path);
        if !extractor.registry().supports(language) {
            continue;
        }
        if options.language.is_some_and(|wanted| wanted != language) {
            continue;
        }
        files.push((path.to_path_buf(), language));
    }

    Ok(files)
}

fn is_skipped_dir(entry: &DirEntry, root: &Path, options: &ScanOptions) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    if name.starts_with('.') || options.skip_dirs.iter().any(|d| *d == name) {
        return true;
    }
    is_excluded(entry.path(), root, &options.exclude)
}

fn is_excluded(path: &Path, root: &Path, exclude: &GlobSet) -> bool {
    if exclude.is_empty() {
        return false;
    }
    let relative = path.strip_prefix(root).unwrap_or(path);
    exclude.is_match(relative)
}

fn scan_file(path: &Path, language: Language, options: &ScanOptions, extractor: &Extractor) -> FileReport {
    let file_path = path.display().to_string();

    let outcome = match extract_file(path, language, options, extractor) {
        Ok(methods) => {
            tracing::debug!(file = %file_path, methods = methods.len(), "extracted");
            FileOutcome::Methods(methods)
        }
        Err(e) => {
            tracing::warn!(file = %file_path, "failed to extract methods: {:#}", e);
            FileOutcome::Error(format!("{:#}", e))
        }
    };

    FileReport { file_path, outcome }
}

fn extract_file(
    path: &Path,
    language: Language,
    options: &ScanOptions,
    extractor: &Extractor,
) -> anyhow::Result<Vec<ExtractedMethod>> {
    let size = std::fs::metadata(path)?.len();
    if size > options.max_file_size {
        anyhow::bail!(
            "file too large ({} bytes, limit {})",
            size,
            options.max_file_size
        );
    }
    let source = std::fs::read(path)?;
    Ok(extractor.parse(&source, language)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use globset::{Glob, GlobSetBuilder};
    use std::fs;

    fn extractor() -> Extractor {
        Extractor::with_builtin_profiles().unwrap()
    }

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn relative_paths(report: &ScanReport, root: &Path) -> Vec<String> {
        report
            .files
            .iter()
            .map(|f| {
                Path::new(&f.file_path)
                    .strip_prefix(root)
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect()
    }

    #[test]
    fn test_scan_mixed_tree() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write(root, "b.py", "def b():\n    pass\n");
        write(root, "a.go", "package a\n\nfunc A() {}\n");
        write(root, "notes.txt", "def not_code(): pass\n");
        write(root, "app.kt", "fun main() {}\n");
        write(root, "pkg/c.rs", "fn c() {}\n");

        let report = scan(root, &ScanOptions::default(), &extractor()).unwrap();

        // Sorted walk order; unsupported and unknown languages are skipped.
        assert_eq!(relative_paths(&report, root), vec!["a.go", "b.py", "pkg/c.rs"]);
        assert_eq!(report.method_count(), 3);
        assert_eq!(report.error_count(), 0);
    }

    #[test]
    fn test_language_filter() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write(root, "a.py", "def a():\n    pass\n");
        write(root, "b.go", "package b\n\nfunc B() {}\n");

        let options = ScanOptions::default().with_language(Language::Python);
        let report = scan(root, &options, &extractor()).unwrap();
        assert_eq!(relative_paths(&report, root), vec!["a.py"]);
    }

    #[test]
    fn test_unsupported_language_filter_fails() {
        let dir = tempfile::tempdir().unwrap();
        let options = ScanOptions::default().with_language(Language::Kotlin);
        let err = scan(dir.path(), &options, &extractor()).unwrap_err();
        assert_eq!(err.to_string(), "unsupported language: kotlin");
    }

    #[test]
    fn test_missing_root() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let err = scan(&missing, &ScanOptions::default(), &extractor()).unwrap_err();
        assert!(err.to_string().starts_with("directory not found"));
    }

    #[test]
    fn test_skips_hidden_and_vendor_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write(root, ".git/hooks/x.py", "def hook(): pass\n");
        write(root, "node_modules/lib/index.js", "function lib() {}\n");
        write(root, "src/main.js", "function main() {}\n");

        let report = scan(root, &ScanOptions::default(), &extractor()).unwrap();
        assert_eq!(relative_paths(&report, root), vec!["src/main.js"]);
    }

    #[test]
    fn test_exclude_globs() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write(root, "src/generated/api.py", "def api(): pass\n");
        write(root, "src/app.py", "def app(): pass\n");

        let mut builder = GlobSetBuilder::new();
        builder.add(Glob::new("**/generated/**").unwrap());
        let options = ScanOptions {
            exclude: builder.build().unwrap(),
            ..ScanOptions::default()
        };

        let report = scan(root, &options, &extractor()).unwrap();
        assert_eq!(relative_paths(&report, root), vec!["src/app.py"]);
    }

    #[test]
    fn test_file_errors_do_not_abort() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("bad.py"), b"def f():\n    return \"\xff\"\n").unwrap();
        write(root, "good.py", "def good():\n    pass\n");

        let report = scan(root, &ScanOptions::default(), &extractor()).unwrap();
        assert_eq!(report.files.len(), 2);
        assert!(report.files[0].error().unwrap().contains("not valid UTF-8"));
        assert_eq!(report.files[1].methods()[0].name, "good");
        assert_eq!(report.error_count(), 1);
    }

    #[test]
    fn test_file_too_large() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write(root, "big.py", "def big():\n    pass\n");

        let options = ScanOptions {
            max_file_size: 4,
            ..ScanOptions::default()
        };
        let report = scan(root, &options, &extractor()).unwrap();
        assert!(report.files[0].error().unwrap().starts_with("file too large"));
    }

    #[test]
    fn test_single_file_root() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write(root, "one.rs", "fn one() {}\nfn two() {}\n");

        let file = root.join("one.rs");
        let report = scan(&file, &ScanOptions::default(), &extractor()).unwrap();
        assert_eq!(report.files.len(), 1);
        assert_eq!(report.method_count(), 2);
    }

    #[test]
    fn test_report_json_shape() {
        let report = ScanReport {
            files: vec![
                FileReport {
                    file_path: "a.py".to_string(),
                    outcome: FileOutcome::Methods(vec![]),
                },
                FileReport {
                    file_path: "b.py".to_string(),
                    outcome: FileOutcome::Error("boom".to_string()),
                },
            ],
        };

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "files": [
                    {"file_path": "a.py", "methods": []},
                    {"file_path": "b.py", "error": "boom"}
                ]
            })
        );
    }
}

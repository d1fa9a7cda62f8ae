//! Scan configuration file.
//!
//! An optional YAML file narrows what a directory scan looks at. Every
//! field is optional; command-line flags take precedence.

use anyhow::Context;
use globset::{Glob, GlobSet, GlobSetBuilder};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::language::Language;
use crate::scan::ScanOptions;

/// Config file names looked up in the scan root.
pub const DEFAULT_CONFIG_NAMES: &[&str] = &[".treedoc.yaml", "treedoc.yaml"];

/// Directories skipped unless the config says otherwise.
pub const DEFAULT_SKIP_DIRS: &[&str] = &["node_modules", "vendor", "target", "__pycache__"];

/// Files larger than this are reported instead of parsed (1 MiB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1024 * 1024;

/// Top-level configuration file.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ScanConfig {
    /// Only extract from files of this language (e.g. "python")
    #[serde(default)]
    pub language: Option<String>,
    /// Glob patterns for paths to exclude (e.g. "**/generated/**")
    #[serde(default)]
    pub exclude: Vec<String>,
    /// Directory names never descended into
    #[serde(default)]
    pub skip_dirs: Option<Vec<String>>,
    /// Maximum file size in bytes
    #[serde(default)]
    pub max_file_size: Option<u64>,
    /// Follow symbolic links while walking (default: false)
    #[serde(default)]
    pub follow_links: Option<bool>,
}

impl ScanConfig {
    /// Parse a config from a YAML file.
    pub fn parse_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::parse_str(&content).with_context(|| format!("invalid config {}", path.display()))
    }

    /// Parse a config from YAML text. An empty document yields the defaults.
    pub fn parse_str(content: &str) -> anyhow::Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: ScanConfig = serde_yaml::from_str(content)?;
        Ok(config)
    }

    /// Find a config file in `root`, if any.
    pub fn discover(root: &Path) -> Option<PathBuf> {
        DEFAULT_CONFIG_NAMES
            .iter()
            .map(|name| root.join(name))
            .find(|path| path.is_file())
    }

    /// Check that the language parses and every glob compiles.
    pub fn validate(&self) -> anyhow::Result<()> {
        if let Some(lang) = &self.language {
            lang.parse::<Language>()?;
        }
        self.exclude_set()?;
        if self.max_file_size == Some(0) {
            anyhow::bail!("max_file_size must be greater than zero");
        }
        Ok(())
    }

    fn exclude_set(&self) -> anyhow::Result<GlobSet> {
        let mut builder = GlobSetBuilder::new();
        for pattern in &self.exclude {
            let glob = Glob::new(pattern)
                .map_err(|e| anyhow::anyhow!("invalid exclude pattern {:?}: {}", pattern, e))?;
            builder.add(glob);
        }
        Ok(builder.build()?)
    }

    /// Build scan options. `language` (from the command line) overrides the
    /// file's language.
    pub fn into_options(self, language: Option<Language>) -> anyhow::Result<ScanOptions> {
        self.validate()?;

        let language = match language {
            Some(lang) => Some(lang),
            None => self.language.as_deref().map(str::parse::<Language>).transpose()?,
        };
        let exclude = self.exclude_set()?;
        let skip_dirs = self
            .skip_dirs
            .unwrap_or_else(|| DEFAULT_SKIP_DIRS.iter().map(|s| s.to_string()).collect());

        Ok(ScanOptions {
            language,
            exclude,
            skip_dirs,
            max_file_size: self.max_file_size.unwrap_or(DEFAULT_MAX_FILE_SIZE),
            follow_links: self.follow_links.unwrap_or(false),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let yaml = r#"
language: python
exclude:
  - "**/generated/**"
skip_dirs: [build]
max_file_size: 2048
follow_links: true
"#;
        let config = ScanConfig::parse_str(yaml).unwrap();
        assert_eq!(config.language.as_deref(), Some("python"));
        assert_eq!(config.exclude, vec!["**/generated/**"]);

        let options = config.into_options(None).unwrap();
        assert_eq!(options.language, Some(Language::Python));
        assert_eq!(options.skip_dirs, vec!["build"]);
        assert_eq!(options.max_file_size, 2048);
        assert!(options.follow_links);
        assert!(options.exclude.is_match("src/generated/api.py"));
        assert!(!options.exclude.is_match("src/api.py"));
    }

    #[test]
    fn test_defaults() {
        let options = ScanConfig::parse_str("").unwrap().into_options(None).unwrap();
        assert_eq!(options.language, None);
        assert_eq!(options.max_file_size, DEFAULT_MAX_FILE_SIZE);
        assert!(!options.follow_links);
        assert!(options.skip_dirs.iter().any(|d| d == "node_modules"));
        assert!(options.exclude.is_empty());
    }

    #[test]
    fn test_cli_language_overrides_file() {
        let config = ScanConfig::parse_str("language: python\n").unwrap();
        let options = config.into_options(Some(Language::Go)).unwrap();
        assert_eq!(options.language, Some(Language::Go));
    }

    #[test]
    fn test_invalid_language() {
        let config = ScanConfig::parse_str("language: cobol\n").unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("cobol"));
    }

    #[test]
    fn test_invalid_glob() {
        let config = ScanConfig::parse_str("exclude: [\"a[\"]\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_max_file_size() {
        let config = ScanConfig::parse_str("max_file_size: 0\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(ScanConfig::parse_str("langauge: python\n").is_err());
    }

    #[test]
    fn test_discover() {
        let dir = tempfile::tempdir().unwrap();
        assert!(ScanConfig::discover(dir.path()).is_none());

        fs::write(dir.path().join("treedoc.yaml"), "language: go\n").unwrap();
        let found = ScanConfig::discover(dir.path()).unwrap();
        assert_eq!(found.file_name().unwrap(), "treedoc.yaml");

        let config = ScanConfig::parse_file(&found).unwrap();
        assert_eq!(config.language.as_deref(), Some("go"));
    }
}

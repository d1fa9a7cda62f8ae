//! Command-line interface for treedoc.

use clap::{Args, Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;

use crate::config::ScanConfig;
use crate::language::Language;
use crate::parser::Extractor;
use crate::report::{self, Format};
use crate::scan;

/// Exit codes.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILED: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

/// Extract functions, methods and their doc comments from source code.
///
/// treedoc parses source files with tree-sitter and lists every function
/// definition it finds, with its name, line span, verbatim source and the
/// comment or docstring that documents it.
#[derive(Parser)]
#[command(name = "treedoc")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract methods from a file or directory
    Extract(ExtractArgs),
    /// List supported languages
    Languages,
}

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Path to scan (file or directory)
    pub path: PathBuf,

    /// Only extract from files of this language (e.g. python, cpp, csharp)
    #[arg(short, long)]
    pub language: Option<Language>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: Format,

    /// Path to config YAML file (default: auto-discover in PATH)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Load the config file named on the command line, or one found in the
/// scan root, or the defaults.
fn load_config(args: &ExtractArgs) -> anyhow::Result<ScanConfig> {
    if let Some(path) = &args.config {
        return ScanConfig::parse_file(path);
    }
    let root = if args.path.is_dir() {
        Some(args.path.as_path())
    } else {
        args.path.parent()
    };
    match root.and_then(ScanConfig::discover) {
        Some(path) => {
            tracing::debug!(config = %path.display(), "using discovered config");
            ScanConfig::parse_file(path)
        }
        None => Ok(ScanConfig::default()),
    }
}

/// Run the extract command.
pub fn run_extract<W: Write>(args: &ExtractArgs, out: &mut W) -> anyhow::Result<i32> {
    let config = match load_config(args) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return Ok(EXIT_ERROR);
        }
    };

    let options = match config.into_options(args.language) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return Ok(EXIT_ERROR);
        }
    };

    let extractor = Extractor::with_builtin_profiles()?;

    let report = match scan::scan(&args.path, &options, &extractor) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return Ok(EXIT_ERROR);
        }
    };

    if report.files.is_empty() {
        eprintln!("Warning: no supported files to scan");
    }

    match args.format {
        Format::Json => report::write_json(out, &report)?,
        Format::Pretty => {
            let path = args.path.to_string_lossy();
            report::write_pretty(out, &path, &report)?
        }
    }

    if report.error_count() > 0 {
        Ok(EXIT_FAILED)
    } else {
        Ok(EXIT_SUCCESS)
    }
}

/// Run the languages command.
pub fn run_languages<W: Write>(out: &mut W) -> anyhow::Result<i32> {
    let extractor = Extractor::with_builtin_profiles()?;
    let registry = extractor.registry();

    writeln!(out, "Supported languages:")?;
    writeln!(out)?;
    for language in registry.languages() {
        let profile = registry.profile_for(language)?;
        let docs = if profile.docstring().is_some() {
            "docstring".to_string()
        } else {
            profile.comment_node_types().join(", ")
        };
        writeln!(
            out,
            "  {:<12} {:<22} {:<8} {}",
            language.as_str(),
            profile.method_node_type(),
            language.extensions().join(","),
            docs
        )?;
    }

    Ok(EXIT_SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn extract_args(path: PathBuf) -> ExtractArgs {
        ExtractArgs {
            path,
            language: None,
            format: Format::Json,
            config: None,
        }
    }

    #[test]
    fn test_cli_parses_extract() {
        let cli = Cli::try_parse_from(["treedoc", "extract", "src", "-l", "python", "-f", "pretty"])
            .unwrap();
        match cli.command {
            Commands::Extract(args) => {
                assert_eq!(args.path, PathBuf::from("src"));
                assert_eq!(args.language, Some(Language::Python));
                assert_eq!(args.format, Format::Pretty);
            }
            _ => panic!("expected extract"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_language() {
        assert!(Cli::try_parse_from(["treedoc", "extract", "src", "-l", "cobol"]).is_err());
    }

    #[test]
    fn test_run_extract_json() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("main.go"), "package main\n\n// Entry.\nfunc main() {}\n").unwrap();

        let mut out = Vec::new();
        let code = run_extract(&extract_args(dir.path().to_path_buf()), &mut out).unwrap();
        assert_eq!(code, EXIT_SUCCESS);

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let method = &value["files"][0]["methods"][0];
        assert_eq!(method["name"], "main");
        assert_eq!(method["doc_comment"], "// Entry.");
    }

    #[test]
    fn test_run_extract_uses_discovered_config() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(".treedoc.yaml"), "language: go\n").unwrap();
        fs::write(dir.path().join("main.go"), "package main\n\nfunc main() {}\n").unwrap();
        fs::write(dir.path().join("tool.py"), "def tool():\n    pass\n").unwrap();

        let mut out = Vec::new();
        run_extract(&extract_args(dir.path().to_path_buf()), &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["files"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_run_extract_file_errors_exit_failed() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("bad.py"), b"def f():\n    return \"\xff\"\n").unwrap();

        let mut out = Vec::new();
        let code = run_extract(&extract_args(dir.path().to_path_buf()), &mut out).unwrap();
        assert_eq!(code, EXIT_FAILED);
    }

    #[test]
    fn test_run_extract_unsupported_language() {
        let dir = tempfile::tempdir().unwrap();
        let mut args = extract_args(dir.path().to_path_buf());
        args.language = Some(Language::Kotlin);

        let mut out = Vec::new();
        assert_eq!(run_extract(&args, &mut out).unwrap(), EXIT_ERROR);
        assert!(out.is_empty());
    }

    #[test]
    fn test_run_languages() {
        let mut out = Vec::new();
        run_languages(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("python"));
        assert!(text.contains("function_definition"));
        assert!(text.contains("docstring"));
        assert!(!text.contains("kotlin"));
    }
}

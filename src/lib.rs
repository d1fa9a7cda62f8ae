//! treedoc - function and doc comment extraction for documentation tooling.
//!
//! treedoc turns source files into a flat list of function/method units:
//! name, verbatim source, line span, and the comment or docstring that
//! documents it. Downstream tools feed these units to documentation
//! generators.
//!
//! # Architecture
//!
//! The codebase uses tree-sitter for parsing:
//!
//! - `parser`: Grammar profiles, the tree walker and the name/doc resolvers
//! - `language`: Language tags and extension routing
//! - `scan`: Parallel directory scanning
//! - `config`: YAML scan configuration
//! - `report`: Output formatting (JSON, pretty)
//!
//! # Adding a New Language
//!
//! Add a module under `src/parser/languages/` returning a `ProfileConfig`
//! and list it in `languages::configs()`. The walker and resolvers need no
//! changes.

pub mod cli;
pub mod config;
pub mod language;
pub mod parser;
pub mod report;
pub mod scan;

pub use config::ScanConfig;
pub use language::Language;
pub use parser::{
    ExtractError, ExtractedMethod, Extractor, GrammarProfile, NameStrategy, ParseError,
    ProfileConfig, ProfileRegistry,
};
pub use scan::{scan, FileOutcome, FileReport, ScanOptions, ScanReport};

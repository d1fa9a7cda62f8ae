//! Language tags and file extension routing.
//!
//! A `Language` selects a grammar profile. The set is closed: every file
//! extension the scanner knows about maps to one of these tags, and anything
//! else maps to `Language::Unknown`.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use phf::phf_map;
use serde::{Deserialize, Serialize};

/// A source language known to the extractor.
///
/// Knowing a language does not mean it can be parsed: only tags with a
/// registered grammar profile are supported (see `ProfileRegistry`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Python,
    JavaScript,
    TypeScript,
    Java,
    Cpp,
    C,
    Html,
    Css,
    Php,
    Ruby,
    Go,
    Rust,
    Swift,
    Kotlin,
    CSharp,
    #[serde(rename = "objective_c")]
    ObjectiveC,
    Scala,
    Perl,
    Lua,
    R,
    Unknown,
}

/// Extension (lowercase, without dot) to language.
static EXTENSIONS: phf::Map<&'static str, Language> = phf_map! {
    "py" => Language::Python,
    "js" => Language::JavaScript,
    "jsx" => Language::JavaScript,
    "ts" => Language::TypeScript,
    "tsx" => Language::TypeScript,
    "java" => Language::Java,
    "cpp" => Language::Cpp,
    "hpp" => Language::Cpp,
    "cc" => Language::Cpp,
    "cxx" => Language::Cpp,
    "hh" => Language::Cpp,
    "c" => Language::C,
    "h" => Language::C,
    "html" => Language::Html,
    "htm" => Language::Html,
    "css" => Language::Css,
    "php" => Language::Php,
    "rb" => Language::Ruby,
    "go" => Language::Go,
    "rs" => Language::Rust,
    "swift" => Language::Swift,
    "kt" => Language::Kotlin,
    "kts" => Language::Kotlin,
    "cs" => Language::CSharp,
    "m" => Language::ObjectiveC,
    "mm" => Language::ObjectiveC,
    "scala" => Language::Scala,
    "sc" => Language::Scala,
    "pl" => Language::Perl,
    "lua" => Language::Lua,
    "r" => Language::R,
};

impl Language {
    /// All known tags, `Unknown` excluded.
    pub const ALL: &'static [Language] = &[
        Language::Python,
        Language::JavaScript,
        Language::TypeScript,
        Language::Java,
        Language::Cpp,
        Language::C,
        Language::Html,
        Language::Css,
        Language::Php,
        Language::Ruby,
        Language::Go,
        Language::Rust,
        Language::Swift,
        Language::Kotlin,
        Language::CSharp,
        Language::ObjectiveC,
        Language::Scala,
        Language::Perl,
        Language::Lua,
        Language::R,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::JavaScript => "javascript",
            Language::TypeScript => "typescript",
            Language::Java => "java",
            Language::Cpp => "cpp",
            Language::C => "c",
            Language::Html => "html",
            Language::Css => "css",
            Language::Php => "php",
            Language::Ruby => "ruby",
            Language::Go => "go",
            Language::Rust => "rust",
            Language::Swift => "swift",
            Language::Kotlin => "kotlin",
            Language::CSharp => "csharp",
            Language::ObjectiveC => "objective_c",
            Language::Scala => "scala",
            Language::Perl => "perl",
            Language::Lua => "lua",
            Language::R => "r",
            Language::Unknown => "unknown",
        }
    }

    /// Determine the language from a file extension.
    ///
    /// The leading dot is optional and matching is case-insensitive.
    /// Unmapped extensions yield `Language::Unknown`.
    pub fn from_extension(ext: &str) -> Self {
        let ext = ext.strip_prefix('.').unwrap_or(ext).to_ascii_lowercase();
        EXTENSIONS.get(ext.as_str()).copied().unwrap_or(Language::Unknown)
    }

    /// Determine the language of a file from its path.
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|e| e.to_str())
            .map(Self::from_extension)
            .unwrap_or(Language::Unknown)
    }

    /// Returns the file extensions routed to this language (without dot).
    pub fn extensions(&self) -> Vec<&'static str> {
        let mut exts: Vec<&'static str> = EXTENSIONS
            .entries()
            .filter(|(_, lang)| *lang == self)
            .map(|(ext, _)| *ext)
            .collect();
        exts.sort_unstable();
        exts
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let lang = match lower.as_str() {
            "py" => Language::Python,
            "js" => Language::JavaScript,
            "ts" => Language::TypeScript,
            "c++" => Language::Cpp,
            "c#" | "cs" | "c_sharp" => Language::CSharp,
            "rs" => Language::Rust,
            "kt" => Language::Kotlin,
            "objc" => Language::ObjectiveC,
            other => match Language::ALL.iter().find(|l| l.as_str() == other) {
                Some(lang) => *lang,
                None => anyhow::bail!("unknown language {:?}", s),
            },
        };
        Ok(lang)
    }
}

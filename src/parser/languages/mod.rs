//! Built-in grammar profiles.
//!
//! Each language module provides a `config()` naming the node types that
//! make up a function definition in that grammar. Kotlin is not listed:
//! no Kotlin grammar crate works with tree-sitter 0.24.

pub mod c;
pub mod cpp;
pub mod csharp;
pub mod go;
pub mod java;
pub mod javascript;
pub mod python;
pub mod rust_lang;
pub mod scala;
pub mod swift;
pub mod typescript;

use super::profile::ProfileConfig;

/// Profiles for every built-in language.
pub fn configs() -> Vec<ProfileConfig> {
    vec![
        c::config(),
        cpp::config(),
        csharp::config(),
        go::config(),
        java::config(),
        javascript::config(),
        python::config(),
        rust_lang::config(),
        scala::config(),
        swift::config(),
        typescript::config(),
    ]
}

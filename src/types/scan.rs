//! Project scan value types
//!
//! A `ScanResult` is produced once per project root and never mutated.
//! Later stages (brand extraction, archetype classification, recommendation)
//! read it and return their own typed values.

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

use crate::analyzer::scanner::FileKind;

/// Front-end framework detected for a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Framework {
    Next,
    Nuxt,
    Vue,
    Svelte,
    Astro,
    Angular,
    React,
    Html,
    Unknown,
}

impl Framework {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Next => "next",
            Self::Nuxt => "nuxt",
            Self::Vue => "vue",
            Self::Svelte => "svelte",
            Self::Astro => "astro",
            Self::Angular => "angular",
            Self::React => "react",
            Self::Html => "html",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One scanned file with its raw text and literal class strings
#[derive(Debug, Clone, Serialize)]
pub struct SourceFile {
    /// Absolute (or caller-supplied) path
    pub path: PathBuf,
    /// Path relative to the project root
    pub relative: PathBuf,
    pub kind: FileKind,
    #[serde(skip)]
    pub content: String,
    pub class_strings: Vec<String>,
}

impl SourceFile {
    pub fn display_path(&self) -> String {
        self.relative.to_string_lossy().replace('\\', "/")
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ScanResult {
    pub root: PathBuf,
    pub framework: Framework,
    pub files: Vec<SourceFile>,
    /// Dark variant already configured or present in class strings
    pub alternate_mode_enabled: bool,
    pub total_files: usize,
    /// Markup files with at least one literal class string
    pub transformable_files: usize,
}

impl ScanResult {
    pub fn markup_files(&self) -> impl Iterator<Item = &SourceFile> {
        self.files.iter().filter(|f| f.kind == FileKind::Markup)
    }

    /// Every class token across the project, in file order
    pub fn class_tokens(&self) -> impl Iterator<Item = &str> {
        self.files
            .iter()
            .flat_map(|f| f.class_strings.iter())
            .flat_map(|s| s.split_whitespace())
    }

    /// `(path, content)` pairs for text-level analysis
    pub fn texts(&self) -> Vec<(String, &str)> {
        self.files
            .iter()
            .map(|f| (f.display_path(), f.content.as_str()))
            .collect()
    }
}

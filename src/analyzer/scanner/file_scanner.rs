use ignore::WalkBuilder;
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::types::Result;

/// Default maximum file size for scanning (1MB)
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1_048_576;

/// Files that carry class attributes
pub const MARKUP_EXTENSIONS: &[&str] = &[
    "html", "htm", "jsx", "tsx", "js", "ts", "mjs", "cjs", "vue", "svelte", "astro",
];

/// Stylesheets (color literals only)
pub const STYLE_EXTENSIONS: &[&str] = &["css", "scss", "sass", "less"];

/// Default directories to skip
pub const DEFAULT_SKIP_DIRS: &[&str] = &[
    "node_modules",
    ".git",
    ".next",
    ".nuxt",
    ".svelte-kit",
    ".astro",
    ".nightshift",
    "build",
    "dist",
    "out",
    "coverage",
    "vendor",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Markup,
    Style,
}

impl FileKind {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        if MARKUP_EXTENSIONS.contains(&ext.as_str()) {
            Some(Self::Markup)
        } else if STYLE_EXTENSIONS.contains(&ext.as_str()) {
            Some(Self::Style)
        } else {
            None
        }
    }
}

pub struct FileScanner {
    root: PathBuf,
    include: Vec<String>,
    exclude: Vec<String>,
    max_file_size: u64,
}

impl FileScanner {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            include: vec!["**/*".to_string()],
            exclude: vec![],
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }

    /// Scanner with the default build/dependency directories skipped
    pub fn front_end<P: AsRef<Path>>(root: P) -> Self {
        let exclude = DEFAULT_SKIP_DIRS
            .iter()
            .map(|d| format!("**/{}/**", d))
            .collect();
        Self::new(root).with_exclude(exclude)
    }

    pub fn with_include(mut self, patterns: Vec<String>) -> Self {
        self.include = patterns;
        self
    }

    pub fn with_exclude(mut self, patterns: Vec<String>) -> Self {
        self.exclude = patterns;
        self
    }

    pub fn with_max_file_size(mut self, size: u64) -> Self {
        self.max_file_size = size;
        self
    }

    /// Count matching files without collecting them
    pub fn count(&self) -> usize {
        self.walk().count()
    }

    pub fn scan(&self) -> Result<Vec<ScannedFile>> {
        let mut files: Vec<ScannedFile> = self.walk().collect();
        files.sort_by(|a, b| a.relative.cmp(&b.relative));
        Ok(files)
    }

    fn walk(&self) -> impl Iterator<Item = ScannedFile> + '_ {
        WalkBuilder::new(&self.root)
            .hidden(false)
            .git_ignore(true)
            .git_global(true)
            .git_exclude(true)
            .follow_links(false) // Security: prevent symlink traversal attacks
            .build()
            .filter_map(|e| e.ok())
            .filter_map(move |entry| {
                let path = entry.path();
                if !path.is_file() {
                    return None;
                }
                let kind = FileKind::from_path(path)?;
                let relative = path.strip_prefix(&self.root).unwrap_or(path).to_path_buf();
                if !self.is_included(&relative) || self.should_exclude(&relative) {
                    return None;
                }
                let size = path.metadata().ok()?.len();
                if size > self.max_file_size {
                    tracing::debug!(path = %relative.display(), size, "Skipping oversized file");
                    return None;
                }
                Some(ScannedFile {
                    path: path.to_path_buf(),
                    relative,
                    size,
                    kind,
                })
            })
    }

    fn is_included(&self, relative: &Path) -> bool {
        self.include.is_empty() || matches_any(&self.include, relative)
    }

    fn should_exclude(&self, relative: &Path) -> bool {
        matches_any(&self.exclude, relative)
    }
}

fn matches_any(patterns: &[String], relative: &Path) -> bool {
    let path_str = relative.to_string_lossy();
    patterns.iter().any(|pattern| {
        glob::Pattern::new(pattern)
            .map(|p| p.matches(&path_str) || p.matches(&format!("/{}", path_str)))
            .unwrap_or(false)
    })
}

#[derive(Debug, Clone, Serialize)]
pub struct ScannedFile {
    pub path: PathBuf,
    /// Path relative to the scan root
    pub relative: PathBuf,
    pub size: u64,
    pub kind: FileKind,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn project() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("src/components")).unwrap();
        fs::create_dir_all(dir.path().join("node_modules/lib")).unwrap();
        fs::write(dir.path().join("src/components/Card.tsx"), "<div/>").unwrap();
        fs::write(dir.path().join("src/app.css"), "body{}").unwrap();
        fs::write(dir.path().join("src/main.rs"), "fn main(){}").unwrap();
        fs::write(dir.path().join("node_modules/lib/index.js"), "x").unwrap();
        dir
    }

    #[test]
    fn test_front_end_scan() {
        let dir = project();
        let files = FileScanner::front_end(dir.path()).scan().unwrap();
        let rel: Vec<_> = files
            .iter()
            .map(|f| f.relative.to_string_lossy().replace('\\', "/"))
            .collect();
        assert_eq!(rel, vec!["src/app.css", "src/components/Card.tsx"]);
        assert_eq!(files[0].kind, FileKind::Style);
        assert_eq!(files[1].kind, FileKind::Markup);
    }

    #[test]
    fn test_max_file_size() {
        let dir = project();
        fs::write(dir.path().join("src/big.html"), "x".repeat(64)).unwrap();
        let scanner = FileScanner::front_end(dir.path()).with_max_file_size(16);
        assert_eq!(scanner.count(), 2);
    }

    #[test]
    fn test_include_patterns() {
        let dir = project();
        let scanner = FileScanner::front_end(dir.path()).with_include(vec!["**/*.tsx".into()]);
        assert_eq!(scanner.count(), 1);
    }
}

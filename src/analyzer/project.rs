//! Project scanning
//!
//! Walks a project root once and produces an immutable [`ScanResult`]:
//! file contents, literal class strings, framework and whether a dark
//! variant is already in use.

use std::fs;
use std::path::Path;

use serde_json::Value;

use super::scanner::{FileKind, FileScanner};
use crate::config::ScanConfig;
use crate::transform::config_patch::ConfigPatcher;
use crate::transform::source::extract_class_spans;
use crate::tokens::utility::is_dark;
use crate::types::{Framework, NightshiftError, Result, ScanResult, SourceFile};

/// `package.json` dependency → framework, checked in order
const FRAMEWORK_DEPENDENCIES: &[(&str, Framework)] = &[
    ("next", Framework::Next),
    ("nuxt", Framework::Nuxt),
    ("astro", Framework::Astro),
    ("@sveltejs/kit", Framework::Svelte),
    ("svelte", Framework::Svelte),
    ("@angular/core", Framework::Angular),
    ("vue", Framework::Vue),
    ("react", Framework::React),
];

pub struct ProjectScanner;

impl ProjectScanner {
    pub fn scan(root: &Path, config: &ScanConfig) -> Result<ScanResult> {
        if !root.is_dir() {
            return Err(NightshiftError::ProjectNotFound(root.to_path_buf()));
        }

        let scanned = FileScanner::new(root)
            .with_include(config.include.clone())
            .with_exclude(config.exclude.clone())
            .with_max_file_size(config.max_file_size)
            .scan()?;

        let mut files = Vec::with_capacity(scanned.len());
        for file in scanned {
            let content = match fs::read_to_string(&file.path) {
                Ok(content) => content,
                Err(e) => {
                    tracing::warn!(path = %file.relative.display(), error = %e, "Skipping unreadable file");
                    continue;
                }
            };
            let class_strings = match file.kind {
                FileKind::Markup => extract_class_spans(&file.path, &content)
                    .spans
                    .into_iter()
                    .map(|s| s.value)
                    .collect(),
                FileKind::Style => Vec::new(),
            };
            files.push(SourceFile {
                path: file.path,
                relative: file.relative,
                kind: file.kind,
                content,
                class_strings,
            });
        }

        let framework = detect_framework(root, &files);
        let alternate_mode_enabled = files
            .iter()
            .flat_map(|f| f.class_strings.iter())
            .flat_map(|s| s.split_whitespace())
            .any(is_dark)
            || ConfigPatcher::is_enabled(root);
        let transformable_files = files
            .iter()
            .filter(|f| f.kind == FileKind::Markup && !f.class_strings.is_empty())
            .count();

        tracing::info!(
            root = %root.display(),
            files = files.len(),
            transformable = transformable_files,
            framework = %framework,
            "Scanned project"
        );

        Ok(ScanResult {
            root: root.to_path_buf(),
            framework,
            total_files: files.len(),
            transformable_files,
            alternate_mode_enabled,
            files,
        })
    }
}

/// Framework from `package.json`, then from file extensions
pub fn detect_framework(root: &Path, files: &[SourceFile]) -> Framework {
    if let Some(framework) = framework_from_manifest(root) {
        return framework;
    }

    let has_ext = |ext: &str| {
        files
            .iter()
            .any(|f| f.relative.extension().and_then(|e| e.to_str()) == Some(ext))
    };

    if has_ext("vue") {
        Framework::Vue
    } else if has_ext("svelte") {
        Framework::Svelte
    } else if has_ext("astro") {
        Framework::Astro
    } else if has_ext("tsx") || has_ext("jsx") {
        Framework::React
    } else if has_ext("html") || has_ext("htm") {
        Framework::Html
    } else {
        Framework::Unknown
    }
}

fn framework_from_manifest(root: &Path) -> Option<Framework> {
    let raw = fs::read_to_string(root.join("package.json")).ok()?;
    let manifest: Value = match serde_json::from_str(&raw) {
        Ok(v) => v,
        Err(e) => {
            tracing::debug!(error = %e, "Ignoring malformed package.json");
            return None;
        }
    };

    let has_dependency = |name: &str| {
        ["dependencies", "devDependencies", "peerDependencies"]
            .iter()
            .any(|section| manifest.get(section).and_then(|d| d.get(name)).is_some())
    };

    FRAMEWORK_DEPENDENCIES
        .iter()
        .find(|(name, _)| has_dependency(name))
        .map(|(_, framework)| *framework)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &TempDir, rel: &str, content: &str) {
        let path = dir.path().join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_scan_collects_class_strings() {
        let dir = TempDir::new().unwrap();
        write(&dir, "package.json", r#"{"dependencies":{"next":"15","react":"19"}}"#);
        write(
            &dir,
            "app/page.tsx",
            r#"export default function Page() { return <main className="bg-white p-8">hi</main>; }"#,
        );
        write(&dir, "app/globals.css", "body { color: #8b5cf6; }");
        write(&dir, "node_modules/x/index.js", r#"<div className="bg-black" />"#);

        let scan = ProjectScanner::scan(dir.path(), &ScanConfig::default()).unwrap();
        assert_eq!(scan.framework, Framework::Next);
        assert_eq!(scan.total_files, 2);
        assert_eq!(scan.transformable_files, 1);
        assert!(!scan.alternate_mode_enabled);
        assert_eq!(scan.class_tokens().collect::<Vec<_>>(), vec!["bg-white", "p-8"]);
    }

    #[test]
    fn test_detects_existing_dark_tokens() {
        let dir = TempDir::new().unwrap();
        write(&dir, "index.html", r#"<body class="bg-white dark:bg-gray-900"></body>"#);

        let scan = ProjectScanner::scan(dir.path(), &ScanConfig::default()).unwrap();
        assert_eq!(scan.framework, Framework::Html);
        assert!(scan.alternate_mode_enabled);
    }

    #[test]
    fn test_missing_root_is_fatal() {
        let err = ProjectScanner::scan(Path::new("/definitely/not/here"), &ScanConfig::default())
            .unwrap_err();
        assert!(err.is_fatal());
    }

    #[test]
    fn test_extension_fallback() {
        let dir = TempDir::new().unwrap();
        write(&dir, "src/App.vue", r#"<template><div class="p-4"></div></template>"#);
        let scan = ProjectScanner::scan(dir.path(), &ScanConfig::default()).unwrap();
        assert_eq!(scan.framework, Framework::Vue);
    }
}

//! Enable class-based dark mode in a project's Tailwind setup
//!
//! Tailwind v3 projects get `darkMode: 'class'` in `tailwind.config.*`.
//! Tailwind v4 projects (no config file, CSS entry with
//! `@import "tailwindcss"`) get a `dark` custom variant appended.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::analyzer::scanner::{FileKind, FileScanner};
use crate::types::{NightshiftError, Result};

pub const CONFIG_FILES: &[&str] = &[
    "tailwind.config.js",
    "tailwind.config.cjs",
    "tailwind.config.mjs",
    "tailwind.config.ts",
];

const DARK_MODE_ENTRY: &str = "darkMode: 'class',";

pub const DARK_VARIANT_RULE: &str = "@custom-variant dark (&:where(.dark, .dark *));";

static DARK_MODE_KEY_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r#"(?:^|[\s{,])["']?darkMode["']?\s*:"#).ok());

/// `export default config` / `module.exports = config`; group 1 is the name
static NAMED_EXPORT_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^\s*=?\s*([A-Za-z_$][\w$]*)[ \t]*(?:;|\r?\n|$)").ok());

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "path", rename_all = "snake_case")]
pub enum PatchOutcome {
    Enabled(PathBuf),
    AlreadyEnabled(PathBuf),
}

impl PatchOutcome {
    /// Whether a file was modified
    pub fn changed(&self) -> bool {
        matches!(self, Self::Enabled(_))
    }

    pub fn path(&self) -> &Path {
        match self {
            Self::Enabled(p) | Self::AlreadyEnabled(p) => p,
        }
    }
}

pub struct ConfigPatcher;

impl ConfigPatcher {
    /// Idempotently enable the dark variant under `root`
    pub fn enable_alternate_mode(root: &Path) -> Result<PatchOutcome> {
        if let Some(config) = Self::find_config(root) {
            return Self::patch_config(&config);
        }
        if let Some(stylesheet) = Self::find_stylesheet(root) {
            return Self::patch_stylesheet(&stylesheet);
        }

        let mut searched: Vec<String> = CONFIG_FILES.iter().map(|s| s.to_string()).collect();
        searched.push("stylesheet importing tailwindcss".to_string());
        Err(NightshiftError::MissingConfigTarget {
            root: root.to_path_buf(),
            searched,
        })
    }

    /// Whether the project already declares a dark variant
    pub fn is_enabled(root: &Path) -> bool {
        if let Some(config) = Self::find_config(root) {
            return fs::read_to_string(config).is_ok_and(|c| config_has_dark_mode(&c));
        }
        Self::find_stylesheet(root)
            .and_then(|p| fs::read_to_string(p).ok())
            .is_some_and(|c| stylesheet_has_dark_variant(&c))
    }

    pub fn find_config(root: &Path) -> Option<PathBuf> {
        CONFIG_FILES
            .iter()
            .map(|name| root.join(name))
            .find(|p| p.is_file())
    }

    /// First stylesheet (path order) that imports Tailwind
    pub fn find_stylesheet(root: &Path) -> Option<PathBuf> {
        let files = FileScanner::front_end(root).scan().ok()?;
        files
            .into_iter()
            .filter(|f| f.kind == FileKind::Style)
            .find(|f| fs::read_to_string(&f.path).is_ok_and(|c| imports_tailwind(&c)))
            .map(|f| f.path)
    }

    fn patch_config(path: &Path) -> Result<PatchOutcome> {
        let content = fs::read_to_string(path)?;
        if config_has_dark_mode(&content) {
            return Ok(PatchOutcome::AlreadyEnabled(path.to_path_buf()));
        }

        let Some(open) = export_object_start(&content) else {
            return Err(NightshiftError::parse(
                path.display().to_string(),
                "Could not find the exported config object",
            ));
        };

        let mut patched = String::with_capacity(content.len() + DARK_MODE_ENTRY.len() + 4);
        patched.push_str(&content[..=open]);
        patched.push_str("\n  ");
        patched.push_str(DARK_MODE_ENTRY);
        patched.push_str(&content[open + 1..]);
        fs::write(path, patched)?;

        tracing::info!(path = %path.display(), "Enabled class-based dark mode");
        Ok(PatchOutcome::Enabled(path.to_path_buf()))
    }

    fn patch_stylesheet(path: &Path) -> Result<PatchOutcome> {
        let content = fs::read_to_string(path)?;
        if stylesheet_has_dark_variant(&content) {
            return Ok(PatchOutcome::AlreadyEnabled(path.to_path_buf()));
        }

        let mut patched = content;
        if !patched.ends_with('\n') {
            patched.push('\n');
        }
        patched.push('\n');
        patched.push_str(DARK_VARIANT_RULE);
        patched.push('\n');
        fs::write(path, patched)?;

        tracing::info!(path = %path.display(), "Added dark custom variant");
        Ok(PatchOutcome::Enabled(path.to_path_buf()))
    }
}

/// A `darkMode` key outside line and block comments
pub fn config_has_dark_mode(content: &str) -> bool {
    let Some(re) = DARK_MODE_KEY_RE.as_ref() else {
        return content.contains("darkMode:");
    };
    re.is_match(&strip_comments(content))
}

/// Drop `//` and `/* */` comments, leaving string literals intact
fn strip_comments(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    let mut chars = content.chars().peekable();
    let mut quote: Option<char> = None;

    while let Some(c) = chars.next() {
        if let Some(q) = quote {
            out.push(c);
            if c == '\\' {
                if let Some(escaped) = chars.next() {
                    out.push(escaped);
                }
            } else if c == q {
                quote = None;
            }
            continue;
        }

        let next = chars.peek().copied();
        match (c, next) {
            ('"' | '\'' | '`', _) => {
                quote = Some(c);
                out.push(c);
            }
            ('/', Some('/')) => {
                for skipped in chars.by_ref() {
                    if skipped == '\n' {
                        out.push('\n');
                        break;
                    }
                }
            }
            ('/', Some('*')) => {
                chars.next();
                while let Some(skipped) = chars.next() {
                    if skipped == '*' && chars.peek() == Some(&'/') {
                        chars.next();
                        break;
                    }
                }
            }
            _ => out.push(c),
        }
    }
    out
}

pub fn stylesheet_has_dark_variant(content: &str) -> bool {
    content.contains("@custom-variant dark") || content.contains("@variant dark")
}

fn imports_tailwind(content: &str) -> bool {
    content.contains("@import \"tailwindcss\"")
        || content.contains("@import 'tailwindcss'")
        || content.contains("@tailwind base")
}

/// Byte index of the `{` opening the exported config object
///
/// A bare identifier export resolves to its `const|let|var` declaration.
fn export_object_start(content: &str) -> Option<usize> {
    let (at, marker) = ["module.exports", "export default"]
        .iter()
        .filter_map(|marker| content.find(marker).map(|at| (at, *marker)))
        .min()?;
    let after = at + marker.len();

    let named = NAMED_EXPORT_RE
        .as_ref()
        .and_then(|re| re.captures(&content[after..]))
        .and_then(|c| c.get(1));
    match named {
        Some(name) => declaration_object_start(content, name.as_str()),
        None => content[after..].find('{').map(|i| after + i),
    }
}

fn declaration_object_start(content: &str, name: &str) -> Option<usize> {
    let re = Regex::new(&format!(
        r"\b(?:const|let|var)\s+{}\s*(?::[^=]*)?=\s*\{{",
        regex::escape(name)
    ))
    .ok()?;
    re.find(content).map(|m| m.end() - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_patches_tailwind_config_once() {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("tailwind.config.js");
        fs::write(&config, "module.exports = {\n  content: ['./src/**/*.tsx'],\n}\n").unwrap();

        let first = ConfigPatcher::enable_alternate_mode(dir.path()).unwrap();
        assert_eq!(first, PatchOutcome::Enabled(config.clone()));
        let patched = fs::read_to_string(&config).unwrap();
        assert!(patched.starts_with("module.exports = {\n  darkMode: 'class',\n  content"));

        let second = ConfigPatcher::enable_alternate_mode(dir.path()).unwrap();
        assert!(!second.changed());
        assert_eq!(fs::read_to_string(&config).unwrap(), patched);
        assert!(ConfigPatcher::is_enabled(dir.path()));
    }

    #[test]
    fn test_typescript_config_with_satisfies() {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("tailwind.config.ts");
        fs::write(
            &config,
            "import type { Config } from 'tailwindcss'\nexport default {\n  content: [],\n} satisfies Config\n",
        )
        .unwrap();

        assert!(ConfigPatcher::enable_alternate_mode(dir.path()).unwrap().changed());
        let patched = fs::read_to_string(&config).unwrap();
        assert!(patched.contains("export default {\n  darkMode: 'class',"));
        assert!(patched.starts_with("import type { Config }"));
    }

    #[test]
    fn test_typescript_config_with_named_export() {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("tailwind.config.ts");
        fs::write(
            &config,
            "import type { Config } from 'tailwindcss'\n\nconst config: Config = {\n  content: ['./app/**/*.{ts,tsx}'],\n  theme: { extend: {} },\n};\nexport default config;\n",
        )
        .unwrap();

        let outcome = ConfigPatcher::enable_alternate_mode(dir.path()).unwrap();
        assert_eq!(outcome, PatchOutcome::Enabled(config.clone()));
        let patched = fs::read_to_string(&config).unwrap();
        assert!(patched.contains("const config: Config = {\n  darkMode: 'class',\n  content"));
        assert!(patched.ends_with("export default config;\n"));
        assert!(!ConfigPatcher::enable_alternate_mode(dir.path()).unwrap().changed());
    }

    #[test]
    fn test_commonjs_named_export() {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("tailwind.config.js");
        fs::write(&config, "let base = {\n  plugins: [],\n}\nmodule.exports = base\n").unwrap();

        assert!(ConfigPatcher::enable_alternate_mode(dir.path()).unwrap().changed());
        let patched = fs::read_to_string(&config).unwrap();
        assert!(patched.starts_with("let base = {\n  darkMode: 'class',\n  plugins"));
    }

    #[test]
    fn test_commented_dark_mode_is_not_enabled() {
        assert!(!config_has_dark_mode("module.exports = {\n  // darkMode later\n}"));
        assert!(!config_has_dark_mode("module.exports = {\n  /* darkMode: 'class', */\n}"));
        assert!(!config_has_dark_mode("// see https://tailwindcss.com darkMode: x\n"));
        assert!(config_has_dark_mode("module.exports = {\n  darkMode: 'class',\n}"));
        assert!(config_has_dark_mode("export default { darkMode: ['class', '.dark'] }"));
        assert!(config_has_dark_mode("module.exports = { 'darkMode' : 'media' }"));
        assert!(config_has_dark_mode(
            "module.exports = {\n  content: ['./src/*.tsx'],\n  darkMode: 'class',\n}"
        ));
    }

    #[test]
    fn test_unreadable_export_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("tailwind.config.js"), "module.exports = makeConfig\n").unwrap();

        let err = ConfigPatcher::enable_alternate_mode(dir.path()).unwrap_err();
        assert!(matches!(err, NightshiftError::Parse { .. }));
    }

    #[test]
    fn test_appends_variant_to_v4_stylesheet() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("src")).unwrap();
        let css = dir.path().join("src/app.css");
        fs::write(&css, "@import \"tailwindcss\";").unwrap();

        let outcome = ConfigPatcher::enable_alternate_mode(dir.path()).unwrap();
        assert_eq!(outcome, PatchOutcome::Enabled(css.clone()));
        assert!(fs::read_to_string(&css).unwrap().ends_with(&format!("{}\n", DARK_VARIANT_RULE)));
        assert!(!ConfigPatcher::enable_alternate_mode(dir.path()).unwrap().changed());
    }

    #[test]
    fn test_missing_target_is_distinct_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("style.css"), "body { margin: 0 }").unwrap();

        let err = ConfigPatcher::enable_alternate_mode(dir.path()).unwrap_err();
        assert!(matches!(err, NightshiftError::MissingConfigTarget { .. }));
        assert!(err.is_decision_point());
    }
}

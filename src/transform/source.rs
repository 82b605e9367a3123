//! Class-attribute extraction and span rewriting
//!
//! JSX/TSX/JS/TS sources are parsed with tree-sitter (TSX grammar). Literal
//! `class`/`className` attribute values and literal arguments of class-name
//! helpers (`cn`, `clsx`, `classNames`, `twMerge`, `cva`) become spans.
//! Template literals with substitutions are skipped; only literal text is
//! ever handed to the transformer.
//!
//! Markup dialects without a grammar here (HTML, Vue, Svelte, Astro), and any
//! source whose parse fails or contains syntax errors, use a regex pass over
//! `class="…"` / `className={'…'}` attributes instead.

use std::ops::Range;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use tree_sitter::{Node, Parser as TsParser};

use crate::types::{NightshiftError, Result};

/// Attribute names that carry class strings
const CLASS_ATTRIBUTES: &[&str] = &["class", "className"];

/// Helper functions whose string arguments are class strings
const CLASS_HELPERS: &[&str] = &["cn", "clsx", "classNames", "twMerge", "cva"];

/// Extensions parsed with the TSX grammar
const SYNTAX_EXTENSIONS: &[&str] = &["jsx", "tsx", "js", "ts", "mjs", "cjs"];

static CLASS_ATTR_RE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r#"(?:^|\s)(?:class|className)\s*=\s*(?:"(?P<dq>[^"]*)"|'(?P<sq>[^']*)'|\{\s*(?:"(?P<jdq>[^"]*)"|'(?P<jsq>[^']*)'|`(?P<tpl>[^`$]*)`)\s*\})"#,
    )
    .ok()
});

const PATTERN_GROUPS: &[&str] = &["dq", "sq", "jdq", "jsq", "tpl"];

/// A literal class string inside a file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassSpan {
    /// Byte range of the class string (quotes excluded)
    pub start: usize,
    pub end: usize,
    /// 1-based line of the span start
    pub line: usize,
    pub value: String,
}

impl ClassSpan {
    fn new(content: &str, range: Range<usize>) -> Self {
        let line = content[..range.start].matches('\n').count() + 1;
        Self {
            value: content[range.clone()].to_string(),
            start: range.start,
            end: range.end,
            line,
        }
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractionStrategy {
    /// Tree-sitter syntax tree
    Syntax,
    /// Regex over attribute text
    Pattern,
}

#[derive(Debug, Clone, Serialize)]
pub struct Extraction {
    pub spans: Vec<ClassSpan>,
    pub strategy: ExtractionStrategy,
}

/// Collect every literal class string in `content`
pub fn extract_class_spans(path: &Path, content: &str) -> Extraction {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    if SYNTAX_EXTENSIONS.contains(&ext.as_str()) {
        match extract_with_syntax(content) {
            Ok(spans) => {
                return Extraction {
                    spans,
                    strategy: ExtractionStrategy::Syntax,
                };
            }
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "Falling back to pattern extraction");
            }
        }
    }

    Extraction {
        spans: extract_with_pattern(content),
        strategy: ExtractionStrategy::Pattern,
    }
}

fn extract_with_syntax(content: &str) -> Result<Vec<ClassSpan>> {
    let mut parser = TsParser::new();
    parser
        .set_language(&tree_sitter_typescript::LANGUAGE_TSX.into())
        .map_err(|e| NightshiftError::parse("", format!("Failed to set TSX language: {}", e)))?;

    let tree = parser
        .parse(content, None)
        .ok_or_else(|| NightshiftError::parse("", "Failed to parse source"))?;
    let root = tree.root_node();
    if root.has_error() {
        return Err(NightshiftError::parse("", "Syntax errors in source"));
    }

    let bytes = content.as_bytes();
    let mut ranges = Vec::new();
    let mut stack = vec![root];

    while let Some(node) = stack.pop() {
        match node.kind() {
            "jsx_attribute" => {
                if let Some(range) = attribute_value(node, bytes) {
                    ranges.push(range);
                }
            }
            "call_expression" => helper_arguments(node, bytes, &mut ranges),
            _ => {}
        }

        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            stack.push(child);
        }
    }

    ranges.sort_by_key(|r| r.start);
    ranges.dedup();
    Ok(ranges
        .into_iter()
        .map(|r| ClassSpan::new(content, r))
        .collect())
}

fn attribute_value(attr: Node, bytes: &[u8]) -> Option<Range<usize>> {
    let name = attr.named_child(0)?;
    let name_text = name.utf8_text(bytes).ok()?;
    if !CLASS_ATTRIBUTES.contains(&name_text) || attr.named_child_count() < 2 {
        return None;
    }

    let value = attr.named_child(attr.named_child_count() - 1)?;
    match value.kind() {
        "string" => Some(inner_range(value)),
        "jsx_expression" => {
            let inner = value.named_child(0)?;
            if value.named_child_count() != 1 {
                return None;
            }
            literal_range(inner)
        }
        _ => None,
    }
}

fn helper_arguments(call: Node, bytes: &[u8], ranges: &mut Vec<Range<usize>>) {
    let Some(function) = call.child_by_field_name("function") else {
        return;
    };
    if function.kind() != "identifier" {
        return;
    }
    let is_helper = function
        .utf8_text(bytes)
        .is_ok_and(|name| CLASS_HELPERS.contains(&name));
    if !is_helper {
        return;
    }

    let Some(arguments) = call.child_by_field_name("arguments") else {
        return;
    };

    // Literals anywhere in the arguments count (`cond && "…"`, `{ "…": cond }`);
    // nested calls are visited on their own.
    let mut cursor = arguments.walk();
    let mut stack: Vec<Node> = arguments.named_children(&mut cursor).collect();
    while let Some(node) = stack.pop() {
        if let Some(range) = literal_range(node) {
            ranges.push(range);
            continue;
        }
        if node.kind() == "call_expression" {
            continue;
        }
        let mut cursor = node.walk();
        stack.extend(node.named_children(&mut cursor));
    }
}

/// Range inside a string literal, or a template literal without substitutions
fn literal_range(node: Node) -> Option<Range<usize>> {
    match node.kind() {
        "string" => Some(inner_range(node)),
        "template_string" => {
            let mut cursor = node.walk();
            let has_substitution = node
                .named_children(&mut cursor)
                .any(|c| c.kind() == "template_substitution");
            (!has_substitution).then(|| inner_range(node))
        }
        _ => None,
    }
}

/// Byte range between the delimiting quotes
fn inner_range(node: Node) -> Range<usize> {
    let start = node.start_byte() + 1;
    let end = node.end_byte().saturating_sub(1).max(start);
    start..end
}

/// Regex pass over `class`/`className` attributes
pub fn extract_with_pattern(content: &str) -> Vec<ClassSpan> {
    let Some(re) = CLASS_ATTR_RE.as_ref() else {
        return Vec::new();
    };
    re.captures_iter(content)
        .filter_map(|caps| {
            PATTERN_GROUPS
                .iter()
                .find_map(|group| caps.name(group))
                .map(|m| ClassSpan::new(content, m.range()))
        })
        .collect()
}

/// Replace each byte range with its new text. Ranges must lie on char
/// boundaries inside `content` and must not overlap.
pub fn rewrite_spans(content: &str, edits: &[(Range<usize>, String)]) -> Result<String> {
    let mut sorted: Vec<&(Range<usize>, String)> = edits.iter().collect();
    sorted.sort_by_key(|(range, _)| range.start);

    let mut output = String::with_capacity(content.len());
    let mut cursor = 0;

    for (range, replacement) in sorted {
        if range.start < cursor {
            return Err(NightshiftError::transform(
                "",
                format!("Overlapping edit at byte {}", range.start),
            ));
        }
        if range.end > content.len()
            || range.start > range.end
            || !content.is_char_boundary(range.start)
            || !content.is_char_boundary(range.end)
        {
            return Err(NightshiftError::transform(
                "",
                format!("Edit {}..{} is outside the source", range.start, range.end),
            ));
        }
        output.push_str(&content[cursor..range.start]);
        output.push_str(replacement);
        cursor = range.end;
    }

    output.push_str(&content[cursor..]);
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(extraction: &Extraction) -> Vec<&str> {
        extraction.spans.iter().map(|s| s.value.as_str()).collect()
    }

    #[test]
    fn test_tsx_attributes() {
        let src = r#"export function Card() {
  return <div className="bg-white p-4"><span className={'text-gray-900'}>hi</span></div>;
}"#;
        let extraction = extract_class_spans(Path::new("Card.tsx"), src);
        assert_eq!(extraction.strategy, ExtractionStrategy::Syntax);
        assert_eq!(values(&extraction), vec!["bg-white p-4", "text-gray-900"]);
        assert_eq!(extraction.spans[0].line, 2);
    }

    #[test]
    fn test_template_with_substitution_is_skipped() {
        let src = "const a = <div className={`bg-white ${x}`} />;\nconst b = <p className={`text-black`} />;";
        let extraction = extract_class_spans(Path::new("a.jsx"), src);
        assert_eq!(values(&extraction), vec!["text-black"]);
    }

    #[test]
    fn test_helper_calls() {
        let src = r#"const c = cn("bg-white", active && "ring-gray-300", other);
const d = format("bg-black");"#;
        let extraction = extract_class_spans(Path::new("c.ts"), src);
        assert_eq!(values(&extraction), vec!["bg-white", "ring-gray-300"]);
    }

    #[test]
    fn test_html_uses_pattern() {
        let src = r#"<div class="bg-white text-gray-900"><p class='text-gray-500'></p><a :class="x"></a></div>"#;
        let extraction = extract_class_spans(Path::new("index.html"), src);
        assert_eq!(extraction.strategy, ExtractionStrategy::Pattern);
        assert_eq!(values(&extraction), vec!["bg-white text-gray-900", "text-gray-500"]);
    }

    #[test]
    fn test_syntax_error_falls_back() {
        let src = r#"const x = <div className="bg-white" ;;; {{"#;
        let extraction = extract_class_spans(Path::new("broken.tsx"), src);
        assert_eq!(extraction.strategy, ExtractionStrategy::Pattern);
        assert_eq!(values(&extraction), vec!["bg-white"]);
    }

    #[test]
    fn test_spans_address_content() {
        let src = r#"<div class="bg-white"></div>"#;
        let extraction = extract_class_spans(Path::new("a.html"), src);
        let span = &extraction.spans[0];
        assert_eq!(&src[span.range()], "bg-white");
    }

    #[test]
    fn test_rewrite_spans() {
        let src = r#"<a class="x"></a><b class="y"></b>"#;
        let out = rewrite_spans(src, &[(26..27, "yy".into()), (10..11, "xx".into())]).unwrap();
        assert_eq!(out, r#"<a class="xx"></a><b class="yy"></b>"#);
    }

    #[test]
    fn test_rewrite_rejects_bad_edits() {
        assert!(rewrite_spans("abcdef", &[(1..3, "x".into()), (2..4, "y".into())]).is_err());
        assert!(rewrite_spans("abc", &[(2..9, "x".into())]).is_err());
    }
}

//! Parsed document wrapper
//!
//! Wraps the parsed HTML tree together with the raw source split into lines,
//! and provides the shared element helpers the checks need: ancestor paths,
//! best-effort source-line lookup, and inline-style access.

use crate::report::Location;
use scraper::{ElementRef, Html, Selector};

/// A fetched page, parsed and ready for the checks
pub struct Document {
    html: Html,
    lines: Vec<String>,
}

impl Document {
    /// Parses raw HTML and retains the source split into lines
    pub fn parse(raw: &str) -> Self {
        Self {
            html: Html::parse_document(raw),
            lines: raw.lines().map(str::to_string).collect(),
        }
    }

    /// Selects elements matching the given selector
    pub fn select<'a, 'b>(&'a self, selector: &'b Selector) -> scraper::html::Select<'a, 'b> {
        self.html.select(selector)
    }

    /// The raw source, one entry per line
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Best-effort source position for an element
    ///
    /// Re-serializes the element and scans the source lines for the first one
    /// containing that text (first serialized line only, if the serialization
    /// spans lines). Serialization may not byte-match the original source
    /// (attribute order, whitespace, self-closing style), so the result is a
    /// diagnostic aid; misses are reported as `Location::NotFound`.
    pub fn locate(&self, element: &ElementRef) -> Location {
        let serialized = element.html();
        let needle = serialized.lines().next().unwrap_or("").trim();

        if needle.is_empty() {
            return Location::NotFound;
        }

        match self.lines.iter().position(|line| line.contains(needle)) {
            Some(index) => Location::Line(index + 1),
            None => Location::NotFound,
        }
    }
}

/// Builds a human-readable ancestor path for an element
///
/// Walks parent references from the element up to the document root, rendering
/// each element as `tag[#id][.class1.class2...]` and joining the chain
/// root-first with `" > "`, e.g. `html > body > div#main.hero > img`.
///
/// Pure function, O(depth).
pub fn hierarchy_path(element: &ElementRef) -> String {
    let mut segments = vec![describe_element(element)];

    let mut node = element.parent();
    while let Some(parent) = node {
        // The document root is not an element and terminates the walk
        if let Some(parent_element) = ElementRef::wrap(parent) {
            segments.push(describe_element(&parent_element));
        }
        node = parent.parent();
    }

    segments.reverse();
    segments.join(" > ")
}

/// Renders one element as `tag[#id][.class1.class2...]`
fn describe_element(element: &ElementRef) -> String {
    let value = element.value();
    let mut segment = value.name().to_string();

    if let Some(id) = value.id() {
        segment.push('#');
        segment.push_str(id);
    }

    for class in value.classes() {
        segment.push('.');
        segment.push_str(class);
    }

    segment
}

/// Looks up a property in an element's inline `style` attribute
///
/// A missing attribute or property means "not present"; malformed declarations
/// are skipped, never an error.
pub fn inline_style(element: &ElementRef, property: &str) -> Option<String> {
    let style = element.value().attr("style")?;

    for declaration in style.split(';') {
        if let Some((name, value)) = declaration.split_once(':') {
            if name.trim().eq_ignore_ascii_case(property) {
                let value = value.trim();
                if !value.is_empty() {
                    return Some(value.to_string());
                }
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first<'a>(doc: &'a Document, css: &str) -> ElementRef<'a> {
        let selector = Selector::parse(css).unwrap();
        doc.select(&selector).next().unwrap()
    }

    #[test]
    fn test_lines_split() {
        let doc = Document::parse("<html>\n<body>\n</body>\n</html>");
        assert_eq!(doc.lines().len(), 4);
        assert_eq!(doc.lines()[1], "<body>");
    }

    #[test]
    fn test_locate_finds_line() {
        let raw = "<html>\n<head></head>\n<body>\n<img src=\"a.png\">\n</body>\n</html>";
        let doc = Document::parse(raw);
        let img = first(&doc, "img");
        assert_eq!(doc.locate(&img), Location::Line(4));
    }

    #[test]
    fn test_locate_miss_is_not_found() {
        // The attribute sits on its own source line, so the one-line
        // serialization of the element never matches any single line
        let raw = "<html><body><p\nclass=\"x\">text</p></body></html>";
        let doc = Document::parse(raw);
        let p = first(&doc, "p");
        assert_eq!(doc.locate(&p), Location::NotFound);
    }

    #[test]
    fn test_hierarchy_path_plain() {
        let doc = Document::parse("<html><body><img src=\"a.png\"></body></html>");
        let img = first(&doc, "img");
        assert_eq!(hierarchy_path(&img), "html > body > img");
    }

    #[test]
    fn test_hierarchy_path_with_id_and_classes() {
        let doc = Document::parse(
            "<html><body><div id=\"main\" class=\"hero large\"><span>x</span></div></body></html>",
        );
        let span = first(&doc, "span");
        assert_eq!(hierarchy_path(&span), "html > body > div#main.hero.large > span");
    }

    #[test]
    fn test_inline_style_lookup() {
        let doc = Document::parse(
            "<html><body><p style=\"color: #fff; background-color: rgb(0, 0, 0)\">x</p></body></html>",
        );
        let p = first(&doc, "p");
        assert_eq!(inline_style(&p, "color").as_deref(), Some("#fff"));
        assert_eq!(
            inline_style(&p, "background-color").as_deref(),
            Some("rgb(0, 0, 0)")
        );
        assert_eq!(inline_style(&p, "font-size"), None);
    }

    #[test]
    fn test_inline_style_absent_attribute() {
        let doc = Document::parse("<html><body><p>x</p></body></html>");
        let p = first(&doc, "p");
        assert_eq!(inline_style(&p, "color"), None);
    }

    #[test]
    fn test_inline_style_malformed_declarations_skipped() {
        let doc = Document::parse(
            "<html><body><p style=\"garbage;; color: red\">x</p></body></html>",
        );
        let p = first(&doc, "p");
        assert_eq!(inline_style(&p, "color").as_deref(), Some("red"));
    }
}

//! HTML text extraction
//!
//! Linearizes a fetched page into visible text: one line per block-level
//! element, inline elements joined in place, and reader-irrelevant regions
//! (scripts, styles, page header, footer, navigation) dropped entirely.
//! The document title is kept as its own line.

use docqa_application::ports::document_source::FetchedPage;
use docqa_application::ports::text_extractor::{ExtractError, TextExtractor};
use scraper::{ElementRef, Html, Node};

/// Elements whose entire subtree is removed
const SKIP_TAGS: &[&str] = &[
    "script", "style", "header", "footer", "nav", "noscript", "template",
];

/// Elements that start and end their own line
const BLOCK_TAGS: &[&str] = &[
    "address", "article", "aside", "blockquote", "body", "caption", "dd", "details",
    "dialog", "div", "dl", "dt", "fieldset", "figcaption", "figure", "form", "h1", "h2",
    "h3", "h4", "h5", "h6", "hr", "html", "li", "main", "ol", "p", "pre", "section",
    "summary", "table", "tbody", "td", "tfoot", "th", "thead", "title", "tr", "ul",
];

/// Bytes inspected when sniffing for binary content
const SNIFF_WINDOW: usize = 1024;

/// Extracts visible text from HTML (or anything served as such) with `scraper`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlTextExtractor;

impl HtmlTextExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl TextExtractor for HtmlTextExtractor {
    fn extract(&self, page: &FetchedPage) -> Result<String, ExtractError> {
        reject_binary(page)?;
        let body = String::from_utf8_lossy(&page.body);
        Ok(html_to_text(&body))
    }
}

/// The body is parsed as markup whatever its declared type, but content
/// that is evidently not text cannot produce anything readable.
fn reject_binary(page: &FetchedPage) -> Result<(), ExtractError> {
    let declared = page.content_type.as_deref().unwrap_or("unknown content type");

    if page.body.starts_with(b"%PDF-") {
        return Err(ExtractError::Unsupported(format!(
            "PDF documents are not supported ({})",
            declared
        )));
    }
    if page.body.iter().take(SNIFF_WINDOW).any(|b| *b == 0) {
        return Err(ExtractError::Unsupported(format!(
            "binary data cannot be parsed as markup ({})",
            declared
        )));
    }
    Ok(())
}

/// Linearize HTML into text with a newline at every block boundary.
///
/// Whitespace inside the text is left as-is for
/// [`normalize_text`](docqa_domain::normalize_text) to clean up.
pub fn html_to_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut out = String::with_capacity(html.len() / 2);
    collect_text(document.root_element(), &mut out);
    out
}

/// Pending work for the tree walk
enum Step<N> {
    Visit(N),
    /// Close of a block element
    BlockEnd,
}

/// Depth-first walk with an explicit stack; nesting depth is bounded only by memory.
fn collect_text(root: ElementRef, out: &mut String) {
    let mut stack: Vec<Step<_>> = root.children().rev().map(Step::Visit).collect();

    while let Some(step) = stack.pop() {
        let node = match step {
            Step::Visit(node) => node,
            Step::BlockEnd => {
                break_line(out);
                continue;
            }
        };

        match node.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(el) => {
                let name = el.name();
                if SKIP_TAGS.contains(&name) {
                    continue;
                }
                if name == "br" {
                    break_line(out);
                    continue;
                }

                if BLOCK_TAGS.contains(&name) {
                    break_line(out);
                    stack.push(Step::BlockEnd);
                }
                stack.extend(node.children().rev().map(Step::Visit));
            }
            _ => {}
        }
    }
}

fn break_line(out: &mut String) {
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
}

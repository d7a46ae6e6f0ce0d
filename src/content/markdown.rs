//! Markdown rendering for project detail documents
//!
//! Only a small dialect is supported: fenced code blocks, `#`/`##`/`###`
//! headings, `**bold**`, `` `inline code` ``, `- ` list items and blank-line
//! separated paragraphs. Output is not escaped; detail documents are
//! author-controlled.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::helpers::strip_html;

/// Rendered for empty or whitespace-only input
pub const NO_CONTENT_PLACEHOLDER: &str = r#"<p class="md-placeholder">No content available.</p>"#;

/// Rendered when the input was present but nothing usable came out
pub const CONVERSION_FAILED_PLACEHOLDER: &str =
    r#"<p class="md-placeholder md-error">Failed to convert content.</p>"#;

/// Marks a stashed code block; cannot be produced by any other rule
const CODE_BLOCK_MARK: char = '\u{1}';

lazy_static! {
    static ref FENCED_CODE: Regex = Regex::new(r"(?s)```([\w+#-]*)[ \t]*\n?(.*?)```").unwrap();
    static ref HEADING_3: Regex = Regex::new(r"(?m)^### +(.+?)[ \t]*$").unwrap();
    static ref HEADING_2: Regex = Regex::new(r"(?m)^## +(.+?)[ \t]*$").unwrap();
    static ref HEADING_1: Regex = Regex::new(r"(?m)^# +(.+?)[ \t]*$").unwrap();
    static ref BOLD: Regex = Regex::new(r"\*\*(.+?)\*\*").unwrap();
    static ref INLINE_CODE: Regex = Regex::new(r"`([^`\n]+)`").unwrap();
    static ref LIST_ITEM: Regex = Regex::new(r"(?m)^- (.*?)[ \t]*$").unwrap();
    static ref BLANK_LINES: Regex = Regex::new(r"\n[ \t]*\n").unwrap();
    static ref STASHED_CODE: Regex = Regex::new("\u{1}(\\d+)\u{1}").unwrap();
}

/// Markdown renderer for the restricted detail-document dialect
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownRenderer;

impl MarkdownRenderer {
    /// Create a new markdown renderer
    pub fn new() -> Self {
        Self
    }

    /// Render markdown to HTML
    ///
    /// Never fails: degenerate input yields one of the placeholders.
    pub fn render(&self, markdown: &str) -> String {
        if markdown.trim().is_empty() {
            return NO_CONTENT_PLACEHOLDER.to_string();
        }

        // The stash mark must only ever come from the code block rule
        let text = markdown
            .replace("\r\n", "\n")
            .replace(CODE_BLOCK_MARK, "");

        // Code blocks first; their content is restored after every other rule ran
        let mut code_blocks: Vec<String> = Vec::new();
        let mut has_code_text = false;
        let text = FENCED_CODE.replace_all(&text, |caps: &Captures| {
            let lang = &caps[1];
            let body = caps[2].strip_suffix('\n').unwrap_or(&caps[2]);
            has_code_text |= !body.trim().is_empty();
            let block = if lang.is_empty() {
                format!("<pre><code>{}</code></pre>", body)
            } else {
                format!(r#"<pre><code class="language-{}">{}</code></pre>"#, lang, body)
            };
            code_blocks.push(block);
            format!(
                "\n\n{mark}{}{mark}\n\n",
                code_blocks.len() - 1,
                mark = CODE_BLOCK_MARK
            )
        });

        let text = HEADING_3.replace_all(&text, "\n\n<h3>$1</h3>\n\n");
        let text = HEADING_2.replace_all(&text, "\n\n<h2>$1</h2>\n\n");
        let text = HEADING_1.replace_all(&text, "\n\n<h1>$1</h1>\n\n");
        let text = BOLD.replace_all(&text, "<strong>$1</strong>");
        has_code_text |= INLINE_CODE
            .captures_iter(&text)
            .any(|caps| !caps[1].trim().is_empty());
        let text = INLINE_CODE.replace_all(&text, "<code>$1</code>");
        let text = LIST_ITEM.replace_all(&text, "<li>$1</li>");
        let text = wrap_list_runs(&text);

        let html = BLANK_LINES
            .split(&text)
            .map(str::trim)
            .filter(|chunk| !chunk.is_empty())
            .map(|chunk| {
                if is_block(chunk) {
                    chunk.to_string()
                } else {
                    format!("<p>{}</p>", chunk)
                }
            })
            .collect::<Vec<_>>()
            .join("\n");

        // Code bodies are literal text even when they look like tags
        let markup_text = strip_html(&STASHED_CODE.replace_all(&html, ""));
        if !has_code_text && markup_text.trim().is_empty() {
            return CONVERSION_FAILED_PLACEHOLDER.to_string();
        }

        let html = STASHED_CODE.replace_all(&html, |caps: &Captures| {
            caps[1]
                .parse::<usize>()
                .ok()
                .and_then(|i| code_blocks.get(i))
                .cloned()
                .unwrap_or_default()
        });

        html.into_owned()
    }
}

/// Wrap each run of consecutive `<li>` lines in a single `<ul>`
fn wrap_list_runs(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 32);
    let mut in_list = false;

    for line in text.split('\n') {
        let is_item = line.starts_with("<li>") && line.ends_with("</li>");
        if is_item && !in_list {
            out.push_str("\n\n<ul>\n");
            in_list = true;
        } else if !is_item && in_list {
            out.push_str("</ul>\n\n");
            in_list = false;
        }
        out.push_str(line);
        out.push('\n');
    }

    if in_list {
        out.push_str("</ul>\n");
    }

    out
}

/// Chunks that are already block markup are not wrapped in `<p>`
fn is_block(chunk: &str) -> bool {
    chunk.starts_with(CODE_BLOCK_MARK)
        || chunk.starts_with("<h1>")
        || chunk.starts_with("<h2>")
        || chunk.starts_with("<h3>")
        || chunk.starts_with("<ul>")
}

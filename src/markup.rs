//! Table markup - pure transformation from fetched records to HTML

use crate::models::Resource;

const TABLE_OPEN: &str = r#"<table id="qlist" border="1" width="440">"#;
const TABLE_CLOSE: &str = "</table>";

/// Render records as the table injected into a list container
pub fn render_table<R: Resource>(items: &[R]) -> String {
    let mut html = String::from(TABLE_OPEN);
    for item in items {
        push_row(&mut html, item);
    }
    html.push_str(TABLE_CLOSE);
    html
}

/// One row per record; ids derive from the record's identifier field
fn push_row<R: Resource>(html: &mut String, item: &R) {
    let key = escape(item.key());
    let [first, second] = item.cells();

    html.push_str(&format!(
        r#"<tr id="{key}"><td id="{key}A">{}</td><td id="{key}B">{}</td></tr>"#,
        escape(first),
        escape(second),
    ));
}

/// Escape text for use in element content and quoted attributes
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Count data rows in rendered markup
pub fn row_count(html: &str) -> usize {
    html.matches("<tr ").count()
}

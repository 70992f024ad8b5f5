use ratatui::{prelude::*, widgets::*};

use crate::app::state::LogLevel;

/// Renders a text input field
pub fn render_input<'a>(content: &'a str, title: &'a str, is_focused: bool, is_editing: bool) -> Paragraph<'a> {
    let style = if is_focused && is_editing {
        Style::default().fg(Color::Yellow)
    } else if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(style)
        .title(title);

    Paragraph::new(content).block(block)
}

/// Break markup after each row so tables read one record per line
pub fn split_rows(html: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut rest = html;

    while let Some(pos) = rest.find('>') {
        let (tag_end, tail) = rest.split_at(pos + 1);
        current.push_str(tag_end);
        if current.ends_with("</tr>") || (current.starts_with("<table") && !current.contains("</")) {
            lines.push(std::mem::take(&mut current));
        }
        rest = tail;
    }
    current.push_str(rest);
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Simple markup syntax highlighting: tags in one color, text in another
pub fn highlight_markup(html: &str) -> Vec<Line<'static>> {
    split_rows(html)
        .into_iter()
        .map(|line| {
            let mut spans = Vec::new();
            let mut current = String::new();
            let mut in_tag = false;

            for c in line.chars() {
                match c {
                    '<' if !in_tag => {
                        if !current.is_empty() {
                            spans.push(Span::styled(current.clone(), Style::default().fg(Color::White)));
                            current.clear();
                        }
                        in_tag = true;
                        current.push(c);
                    }
                    '>' if in_tag => {
                        current.push(c);
                        spans.push(Span::styled(current.clone(), Style::default().fg(Color::Cyan)));
                        current.clear();
                        in_tag = false;
                    }
                    _ => current.push(c),
                }
            }

            if !current.is_empty() {
                let color = if in_tag { Color::Cyan } else { Color::White };
                spans.push(Span::styled(current, Style::default().fg(color)));
            }

            Line::from(spans)
        })
        .collect()
}

/// Activity log color
pub fn level_color(level: LogLevel) -> Color {
    match level {
        LogLevel::Info => Color::Green,
        LogLevel::Warn => Color::Yellow,
        LogLevel::Error => Color::Red,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_rows() {
        let html = concat!(
            r#"<table id="qlist" border="1" width="440">"#,
            r#"<tr id="a"><td id="aA">a</td><td id="aB">b</td></tr>"#,
            r#"<tr id="c"><td id="cA">c</td><td id="cB">d</td></tr>"#,
            "</table>"
        );
        let lines = split_rows(html);
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], r#"<table id="qlist" border="1" width="440">"#);
        assert_eq!(lines[3], "</table>");
    }

    #[test]
    fn test_highlight_plain_text() {
        let lines = highlight_markup("duplicate unique_name");
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].spans.len(), 1);
    }
}

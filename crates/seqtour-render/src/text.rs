//! Human-readable rendering of dumped values.
//!
//! Values arrive as `serde_json::Value` and are laid out like this:
//!
//! ```text
//! Where: [4]
//! MaxBy: { name: "rbo", age: 36 }
//! GroupBy:
//!   - { key: 30, elements: [{ name: "azerty", age: 30 }] }
//!   - key      : 16
//!     elements : [{ name: "sme", age: 16 }, { name: "me2", age: 16 }]
//! ```
//!
//! Anything that fits on one line within [`INLINE_WIDTH`] columns is written
//! inline. Longer sequences get one element per `- ` line and longer records
//! one field per line, keys padded to a common width.

use console::Style;
use serde_json::Value;
use unicode_width::UnicodeWidthStr;

use crate::output::TextMode;

/// Widest inline rendering before a value is broken over several lines.
pub const INLINE_WIDTH: usize = 72;

const BANNER: char = '#';
const MIN_BANNER_WIDTH: usize = 17;

/// Renders the banner that opens a section.
///
/// `note`, when non-empty, is appended in parentheses after the name.
pub fn render_section(name: &str, note: &str, mode: TextMode) -> String {
    let title = if note.is_empty() {
        name.to_string()
    } else {
        format!("{name} ({note})")
    };
    let rule: String = std::iter::repeat(BANNER)
        .take(title.width().max(MIN_BANNER_WIDTH))
        .collect();
    let title = paint(Style::new().bold().cyan(), &title, mode);
    let rule = paint(Style::new().dim(), &rule, mode);
    format!("{rule}\n{title}\n{rule}")
}

/// Renders one labelled value, without a trailing newline.
pub fn render_entry(label: &str, value: &Value, mode: TextMode) -> String {
    let label = paint(Style::new().yellow().bold(), label, mode);
    match inline(value) {
        Some(flat) => format!("{label}: {flat}"),
        None => {
            let mut out = format!("{label}:");
            write_block(value, 1, &mut out);
            out
        }
    }
}

/// `Styled` always emits escape codes, whether or not stdout is a terminal.
fn paint(style: Style, text: &str, mode: TextMode) -> String {
    match mode {
        TextMode::Styled => style.force_styling(true).apply_to(text).to_string(),
        TextMode::Plain => text.to_string(),
    }
}

fn scalar(value: &Value) -> Option<String> {
    match value {
        Value::Null => Some("null".to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(Value::String(s.clone()).to_string()),
        Value::Array(_) | Value::Object(_) => None,
    }
}

/// One-line form of any value, regardless of width.
fn flat(value: &Value) -> String {
    match value {
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().map(flat).collect();
            format!("[{}]", parts.join(", "))
        }
        Value::Object(map) if map.is_empty() => "{}".to_string(),
        Value::Object(map) => {
            let parts: Vec<String> = map.iter().map(|(k, v)| format!("{k}: {}", flat(v))).collect();
            format!("{{ {} }}", parts.join(", "))
        }
        other => scalar(other).unwrap_or_default(),
    }
}

/// One-line form if it fits within [`INLINE_WIDTH`]. Scalars always fit.
fn inline(value: &Value) -> Option<String> {
    if let Some(text) = scalar(value) {
        return Some(text);
    }
    let text = flat(value);
    (text.width() <= INLINE_WIDTH).then_some(text)
}

fn write_block(value: &Value, depth: usize, out: &mut String) {
    let pad = "  ".repeat(depth);
    match value {
        Value::Array(items) => {
            for item in items {
                match inline(item) {
                    Some(text) => push_line(out, &format!("{pad}- {text}")),
                    None => {
                        push_line(out, &format!("{pad}-"));
                        write_block(item, depth + 1, out);
                    }
                }
            }
        }
        Value::Object(map) => {
            let key_width = map.keys().map(|k| k.width()).max().unwrap_or(0);
            for (key, field) in map {
                let gap = " ".repeat(key_width - key.width());
                match inline(field) {
                    Some(text) => push_line(out, &format!("{pad}{key}{gap} : {text}")),
                    None => {
                        push_line(out, &format!("{pad}{key}:"));
                        write_block(field, depth + 1, out);
                    }
                }
            }
        }
        other => push_line(out, &format!("{pad}{}", flat(other))),
    }
}

fn push_line(out: &mut String, line: &str) {
    out.push('\n');
    out.push_str(line);
}

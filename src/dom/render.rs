//! HTML rendering for [`MemoryDocument`].

use super::element::{Element, INPUT_TAG, SELECT_TAG, SelectOption};
use super::memory::MemoryDocument;
use std::fmt::Write;

/// Render every element, one per line (selects span one line per option).
pub fn render_html(doc: &MemoryDocument) -> String {
    let mut out = String::new();
    for element in doc.elements() {
        render_element(&mut out, element);
        out.push('\n');
    }
    out
}

fn render_element(out: &mut String, element: &Element) {
    let tag = element.tag.to_ascii_lowercase();
    let _ = write!(out, "<{}", tag);
    for (name, value) in &element.attributes {
        let _ = write!(out, " {}=\"{}\"", name, escape(value));
    }

    if tag == INPUT_TAG {
        if !element.value.is_empty() && !element.attributes.contains_key("value") {
            let _ = write!(out, " value=\"{}\"", escape(&element.value));
        }
        out.push('>');
    } else if tag == SELECT_TAG {
        out.push('>');
        for option in &element.options {
            out.push_str("\n  ");
            render_option(out, option);
        }
        out.push_str("\n</select>");
    } else {
        let _ = write!(out, ">{}</{}>", escape(&element.value), tag);
    }
}

fn render_option(out: &mut String, option: &SelectOption) {
    let _ = write!(out, "<option value=\"{}\"", escape(&option.value));
    if option.selected {
        out.push_str(" selected");
    }
    if option.disabled {
        out.push_str(" disabled");
    }
    let _ = write!(out, ">{}</option>", escape(&option.text));
}

/// Escape text for use in HTML content and double-quoted attributes.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

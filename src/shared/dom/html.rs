// src/shared/dom/html.rs

use super::document::{Document, NodeId, NodeKind};

const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

pub fn is_void(tag: &str) -> bool {
    VOID_ELEMENTS.iter().any(|v| v.eq_ignore_ascii_case(tag))
}

pub fn is_raw_text(tag: &str) -> bool {
    RAW_TEXT_ELEMENTS.iter().any(|v| v.eq_ignore_ascii_case(tag))
}

pub fn escape_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn escape_attr(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

pub(crate) fn write_node(doc: &Document, node: NodeId, out: &mut String) {
    write_child(doc, node, false, out);
}

pub(crate) fn write_child(doc: &Document, node: NodeId, raw: bool, out: &mut String) {
    let data = doc.node(node);
    match &data.kind {
        NodeKind::Text(text) if raw => out.push_str(text),
        NodeKind::Text(text) => out.push_str(&escape_text(text)),
        NodeKind::Element {
            tag,
            id,
            classes,
            attrs,
        } => {
            out.push('<');
            out.push_str(tag);
            if let Some(id) = id {
                out.push_str(&format!(" id=\"{}\"", escape_attr(id)));
            }
            if !classes.is_empty() {
                out.push_str(&format!(" class=\"{}\"", escape_attr(&classes.join(" "))));
            }
            for (name, value) in attrs {
                out.push_str(&format!(" {}=\"{}\"", name, escape_attr(value)));
            }
            out.push('>');

            if is_void(tag) {
                return;
            }

            let raw_children = is_raw_text(tag);
            for child in &data.children {
                write_child(doc, *child, raw_children, out);
            }
            out.push_str("</");
            out.push_str(tag);
            out.push('>');
        }
    }
}

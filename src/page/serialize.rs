//! Write a [`Page`] back out as XHTML.

use super::{NodeData, NodeId, Page};

/// HTML elements that never have content and are written self-closed.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

impl Page {
    /// Serialize the whole page, including a doctype if the input had one.
    pub fn to_xhtml(&self) -> String {
        let mut out = String::with_capacity(4096);
        if self.has_doctype() {
            out.push_str("<!DOCTYPE html>\n");
        }
        write_node(&mut out, self, self.root());
        out.push('\n');
        out
    }

    /// Serialize a single node and its subtree.
    pub fn outer_markup(&self, id: NodeId) -> String {
        let mut out = String::new();
        write_node(&mut out, self, id);
        out
    }

    /// Serialize the children of `id`.
    pub fn inner_markup(&self, id: NodeId) -> String {
        let mut out = String::new();
        for c in self.children(id) {
            write_node(&mut out, self, *c);
        }
        out
    }
}

fn write_node(out: &mut String, page: &Page, id: NodeId) {
    match page.data(id) {
        NodeData::Text(text) => out.push_str(&html_escape::encode_text(text)),
        NodeData::Element { name, attributes } => {
            out.push('<');
            out.push_str(name);
            for (k, v) in attributes {
                out.push(' ');
                out.push_str(k);
                out.push_str("=\"");
                out.push_str(&html_escape::encode_double_quoted_attribute(v));
                out.push('"');
            }
            let children = page.children(id);
            if children.is_empty() && VOID_ELEMENTS.contains(&name.as_str()) {
                out.push_str("/>");
                return;
            }
            out.push('>');
            for c in children {
                write_node(out, page, *c);
            }
            out.push_str("</");
            out.push_str(name);
            out.push('>');
        }
    }
}

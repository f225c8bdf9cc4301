//! Owned static-page model.
//!
//! A [`Page`] is parsed once from well-formed XHTML (via `roxmltree`) into an
//! arena of element and text nodes that can be rearranged and written back
//! out. Sub-modules:
//!
//! - [`selector`] – the small selector language used to find rows and targets
//! - [`serialize`] – writing the page back to markup
//! - [`targets`] – container, caption and menu-host adapters for the controller

pub mod selector;
pub mod serialize;
pub mod targets;

pub use selector::Selector;
pub use targets::{PageCaption, PageContainer, SharedPage, shared};

use indexmap::IndexMap;
use roxmltree::Document;
use tracing::warn;

use crate::config::FilterOptions;
use crate::error::Result;
use crate::model::SourceRow;

const XML_NS: &str = "http://www.w3.org/XML/1998/namespace";

/// Handle to a node inside a [`Page`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeData {
    Element {
        name: String,
        attributes: IndexMap<String, String>,
    },
    Text(String),
}

#[derive(Debug, Clone)]
struct Node {
    data: NodeData,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

#[derive(Debug, Clone)]
pub struct Page {
    nodes: Vec<Node>,
    /// Slots of removed nodes, reused by the next allocation.
    free: Vec<NodeId>,
    root: NodeId,
    doctype: bool,
}

impl Page {
    /// Parse a well-formed XHTML document.
    pub fn parse(text: &str) -> Result<Self> {
        let opts = roxmltree::ParsingOptions {
            allow_dtd: true,
            ..Default::default()
        };
        let doc = Document::parse_with_options(text, opts)?;
        let mut page = Page {
            nodes: Vec::new(),
            free: Vec::new(),
            root: NodeId(0),
            doctype: prologue_has_doctype(&doc, text),
        };
        page.root = page.import(doc.root_element());
        Ok(page)
    }

    /// Parse a markup fragment into detached nodes owned by this page.
    pub fn parse_fragment(&mut self, markup: &str) -> Result<Vec<NodeId>> {
        let wrapped = format!("<fragment>{}</fragment>", markup);
        let doc = Document::parse(&wrapped)?;
        let mut out = Vec::new();
        for child in doc.root_element().children() {
            if child.is_element() || child.is_text() {
                out.push(self.import(child));
            }
        }
        Ok(out)
    }

    fn import(&mut self, node: roxmltree::Node<'_, '_>) -> NodeId {
        if node.is_text() {
            return self.create_text(node.text().unwrap_or(""));
        }
        let tag = node.tag_name();
        let id = self.create_element(&qualified_name(node, tag.namespace(), tag.name(), false));
        // Re-declare only the namespaces this element introduces.
        let inherited: Vec<(Option<&str>, &str)> = node
            .parent_element()
            .map(|p| p.namespaces().map(|ns| (ns.name(), ns.uri())).collect())
            .unwrap_or_default();
        for ns in node.namespaces() {
            if ns.uri() == XML_NS || inherited.contains(&(ns.name(), ns.uri())) {
                continue;
            }
            let decl = match ns.name() {
                Some(prefix) => format!("xmlns:{}", prefix),
                None => "xmlns".to_string(),
            };
            self.set_attribute(id, &decl, ns.uri());
        }
        for attr in node.attributes() {
            let name = qualified_name(node, attr.namespace(), attr.name(), true);
            self.set_attribute(id, &name, attr.value());
        }
        for child in node.children() {
            if child.is_element() || child.is_text() {
                let c = self.import(child);
                self.append_child(id, c);
            }
        }
        id
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn has_doctype(&self) -> bool {
        self.doctype
    }

    pub fn data(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.0].data
    }

    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        match &self.nodes[id.0].data {
            NodeData::Element { name, .. } => Some(name),
            NodeData::Text(_) => None,
        }
    }

    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        match &self.nodes[id.0].data {
            NodeData::Element { attributes, .. } => attributes.get(name).map(String::as_str),
            NodeData::Text(_) => None,
        }
    }

    pub fn attributes(&self, id: NodeId) -> impl Iterator<Item = (&str, &str)> {
        let attrs = match &self.nodes[id.0].data {
            NodeData::Element { attributes, .. } => Some(attributes),
            NodeData::Text(_) => None,
        };
        attrs
            .into_iter()
            .flat_map(|a| a.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }

    /// Set an attribute on an element. Ignored for text nodes.
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) {
        if let NodeData::Element { attributes, .. } = &mut self.nodes[id.0].data {
            attributes.insert(name.to_string(), value.to_string());
        }
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    /// Child elements only (text nodes skipped).
    pub fn element_children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.children(id)
            .iter()
            .copied()
            .filter(|c| self.tag_name(*c).is_some())
    }

    /// Concatenated text of `id` and all its descendants.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        match &self.nodes[id.0].data {
            NodeData::Text(t) => out.push_str(t),
            NodeData::Element { .. } => {
                for c in &self.nodes[id.0].children {
                    self.collect_text(*c, out);
                }
            }
        }
    }

    pub fn create_element(&mut self, name: &str) -> NodeId {
        self.push(NodeData::Element {
            name: name.to_string(),
            attributes: IndexMap::new(),
        })
    }

    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.push(NodeData::Text(text.to_string()))
    }

    fn push(&mut self, data: NodeData) -> NodeId {
        let node = Node {
            data,
            parent: None,
            children: Vec::new(),
        };
        if let Some(id) = self.free.pop() {
            self.nodes[id.0] = node;
            return id;
        }
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    /// Number of node slots in the arena, live or free.
    pub fn arena_len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether `ancestor` is `id` itself or lies on its parent chain.
    pub fn is_ancestor_or_self(&self, ancestor: NodeId, id: NodeId) -> bool {
        let mut cur = Some(id);
        while let Some(n) = cur {
            if n == ancestor {
                return true;
            }
            cur = self.nodes[n.0].parent;
        }
        false
    }

    /// Append `child` as the last child of `parent`, moving it out of its
    /// current parent first. Refuses (and returns `false`) when `child` is
    /// `parent` or one of its ancestors.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> bool {
        if self.is_ancestor_or_self(child, parent) {
            warn!(?parent, ?child, "refusing to append a node into its own subtree");
            return false;
        }
        self.detach(child);
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
        true
    }

    /// Detach `id` and free it together with its subtree. Handles to the
    /// removed nodes must not be used afterwards.
    pub fn remove(&mut self, id: NodeId) {
        self.detach(id);
        let mut stack = vec![id];
        while let Some(n) = stack.pop() {
            stack.extend(std::mem::take(&mut self.nodes[n.0].children));
            self.nodes[n.0].parent = None;
            self.nodes[n.0].data = NodeData::Text(String::new());
            self.free.push(n);
        }
    }

    /// Remove `id` from its parent. The node stays in the arena.
    pub fn detach(&mut self, id: NodeId) {
        if let Some(parent) = self.nodes[id.0].parent.take() {
            self.nodes[parent.0].children.retain(|c| *c != id);
        }
    }

    /// Detach every child of `id`.
    pub fn clear_children(&mut self, id: NodeId) {
        for c in std::mem::take(&mut self.nodes[id.0].children) {
            self.nodes[c.0].parent = None;
        }
    }

    /// Elements below (and including) `from`, in document order.
    pub fn descendants(&self, from: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![from];
        while let Some(id) = stack.pop() {
            if self.tag_name(id).is_none() {
                continue;
            }
            out.push(id);
            stack.extend(self.children(id).iter().rev().copied());
        }
        out
    }

    pub fn query_all(&self, selector: &Selector) -> Vec<NodeId> {
        self.descendants(self.root)
            .into_iter()
            .filter(|id| selector.matches(self, *id))
            .collect()
    }

    pub fn query_first(&self, selector: &Selector) -> Option<NodeId> {
        self.descendants(self.root)
            .into_iter()
            .find(|id| selector.matches(self, *id))
    }

    /// Parse `selector` and return all matches.
    pub fn select(&self, selector: &str) -> Result<Vec<NodeId>> {
        Ok(self.query_all(&Selector::parse(selector)?))
    }

    pub fn select_first(&self, selector: &str) -> Result<Option<NodeId>> {
        Ok(self.query_first(&Selector::parse(selector)?))
    }

    /// First descendant element of `id` named `tag`.
    pub fn find_descendant(&self, id: NodeId, tag: &str) -> Option<NodeId> {
        self.descendants(id)
            .into_iter()
            .skip(1)
            .find(|d| self.tag_name(*d) == Some(tag))
    }

    /// Read the catalog rows described by `options`, in document order.
    pub fn source_rows(&self, options: &FilterOptions) -> Result<Vec<SourceRow<NodeId>>> {
        let rows = self.select(&options.row_selector)?;
        Ok(rows
            .into_iter()
            .map(|row| SourceRow {
                element: row,
                link_text: self
                    .find_descendant(row, &options.link_tag)
                    .map(|a| self.text_content(a)),
                text: self.text_content(row),
                subjects: self
                    .attribute(row, &options.subject_attribute)
                    .map(str::to_string),
            })
            .collect())
    }
}

/// Element or attribute name with the prefix bound to `uri` in scope at `node`.
/// Elements in the default namespace stay unprefixed; unprefixed attributes
/// have no namespace.
fn qualified_name(node: roxmltree::Node<'_, '_>, uri: Option<&str>, local: &str, attr: bool) -> String {
    match uri {
        None => local.to_string(),
        Some(XML_NS) => format!("xml:{}", local),
        Some(uri) if !attr && node.lookup_namespace_uri(None) == Some(uri) => local.to_string(),
        Some(uri) => match node.lookup_prefix(uri) {
            Some(prefix) if !prefix.is_empty() => format!("{}:{}", prefix, local),
            _ => local.to_string(),
        },
    }
}

/// Whether a doctype declaration appears before the root element, ignoring
/// comments and processing instructions there.
fn prologue_has_doctype(doc: &Document<'_>, text: &str) -> bool {
    let end = doc.root_element().range().start;
    let mut start = 0;
    let mut segments = Vec::new();
    for n in doc.root().children() {
        let r = n.range();
        if r.start >= end {
            break;
        }
        if n.is_comment() || n.is_pi() {
            segments.push(&text[start..r.start]);
            start = r.end;
        }
    }
    segments.push(&text[start..end]);
    segments
        .iter()
        .any(|s| s.to_ascii_uppercase().contains("<!DOCTYPE"))
}

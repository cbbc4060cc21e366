// src/shared/dom/document.rs

use tracing::warn;

use super::html;
use super::markup::{Element, Markup};
use super::selector::{Selector, SelectorTarget};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
pub(crate) enum NodeKind {
    Element {
        tag: String,
        id: Option<String>,
        classes: Vec<String>,
        attrs: Vec<(String, String)>,
    },
    Text(String),
}

#[derive(Debug, Clone)]
pub(crate) struct NodeData {
    pub(crate) kind: NodeKind,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

/// Owned, mutable page tree.
///
/// Nodes live in an arena and are addressed by `NodeId`. Replacing a node's
/// children detaches the old subtree; detached nodes are never reachable
/// from the root again.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<NodeData>,
    root: NodeId,
}

impl Document {
    pub fn new(root: Element) -> Self {
        let mut doc = Self {
            nodes: Vec::new(),
            root: NodeId(0),
        };
        doc.root = doc.materialize(Markup::Element(root), None);
        doc
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub(crate) fn node(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.0]
    }

    fn materialize(&mut self, markup: Markup, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        match markup {
            Markup::Text(text) => {
                self.nodes.push(NodeData {
                    kind: NodeKind::Text(text),
                    parent,
                    children: Vec::new(),
                });
            }
            Markup::Element(el) => {
                self.nodes.push(NodeData {
                    kind: NodeKind::Element {
                        tag: el.tag,
                        id: el.id,
                        classes: el.classes,
                        attrs: el.attrs,
                    },
                    parent,
                    children: Vec::new(),
                });
                for child in el.children {
                    let child_id = self.materialize(child, Some(id));
                    self.nodes[id.0].children.push(child_id);
                }
            }
        }
        id
    }

    pub fn append(&mut self, parent: NodeId, markup: impl Into<Markup>) -> NodeId {
        let child = self.materialize(markup.into(), Some(parent));
        self.nodes[parent.0].children.push(child);
        child
    }

    /// Drops every child of `parent` and appends `children` in order.
    pub fn replace_children<I, M>(&mut self, parent: NodeId, children: I)
    where
        I: IntoIterator<Item = M>,
        M: Into<Markup>,
    {
        let old = std::mem::take(&mut self.nodes[parent.0].children);
        for child in old {
            self.nodes[child.0].parent = None;
        }
        for markup in children {
            self.append(parent, markup);
        }
    }

    pub fn set_text(&mut self, node: NodeId, text: impl Into<String>) {
        self.replace_children(node, [Markup::Text(text.into())]);
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.node(node).children
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.node(node).parent
    }

    pub fn element_children(&self, node: NodeId) -> Vec<NodeId> {
        self.children(node)
            .iter()
            .copied()
            .filter(|c| self.is_element(*c))
            .collect()
    }

    pub fn is_element(&self, node: NodeId) -> bool {
        matches!(self.node(node).kind, NodeKind::Element { .. })
    }

    pub fn tag(&self, node: NodeId) -> Option<&str> {
        match &self.node(node).kind {
            NodeKind::Element { tag, .. } => Some(tag),
            NodeKind::Text(_) => None,
        }
    }

    pub fn element_id(&self, node: NodeId) -> Option<&str> {
        match &self.node(node).kind {
            NodeKind::Element { id, .. } => id.as_deref(),
            NodeKind::Text(_) => None,
        }
    }

    pub fn attr(&self, node: NodeId, name: &str) -> Option<&str> {
        match &self.node(node).kind {
            NodeKind::Element { attrs, .. } => attrs
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, v)| v.as_str()),
            NodeKind::Text(_) => None,
        }
    }

    pub fn set_attr(&mut self, node: NodeId, name: &str, value: impl Into<String>) {
        let value = value.into();
        if let NodeKind::Element { attrs, .. } = &mut self.nodes[node.0].kind {
            match attrs.iter_mut().find(|(n, _)| n == name) {
                Some(slot) => slot.1 = value,
                None => attrs.push((name.to_string(), value)),
            }
        }
    }

    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        match &self.node(node).kind {
            NodeKind::Element { classes, .. } => classes.iter().any(|c| c == class),
            NodeKind::Text(_) => false,
        }
    }

    /// Returns `false` when the class was already present.
    pub fn add_class(&mut self, node: NodeId, class: &str) -> bool {
        match &mut self.nodes[node.0].kind {
            NodeKind::Element { classes, .. } if !classes.iter().any(|c| c == class) => {
                classes.push(class.to_string());
                true
            }
            _ => false,
        }
    }

    pub fn text_content(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(node, &mut out);
        out
    }

    fn collect_text(&self, node: NodeId, out: &mut String) {
        match &self.node(node).kind {
            NodeKind::Text(text) => out.push_str(text),
            NodeKind::Element { .. } => {
                for child in self.children(node) {
                    self.collect_text(*child, out);
                }
            }
        }
    }

    /// Attached nodes in document order, root first.
    fn descendants(&self, from: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![from];
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(self.children(node).iter().rev().copied());
        }
        out
    }

    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.descendants(self.root)
            .into_iter()
            .find(|n| self.element_id(*n) == Some(id))
    }

    pub fn select_all(&self, selector: &Selector) -> Vec<NodeId> {
        self.descendants(self.root)
            .into_iter()
            .filter(|n| self.is_element(*n))
            .filter(|n| selector.matches(&NodeRef { doc: self, id: *n }))
            .collect()
    }

    /// Invalid selectors match nothing.
    pub fn query_selector_all(&self, selector: &str) -> Vec<NodeId> {
        match Selector::parse(selector) {
            Ok(sel) => self.select_all(&sel),
            Err(err) => {
                warn!("Ignoring invalid selector {:?}: {}", selector, err);
                Vec::new()
            }
        }
    }

    pub fn query_selector(&self, selector: &str) -> Option<NodeId> {
        self.query_selector_all(selector).into_iter().next()
    }

    pub fn outer_html(&self, node: NodeId) -> String {
        let mut out = String::new();
        html::write_node(self, node, &mut out);
        out
    }

    pub fn inner_html(&self, node: NodeId) -> String {
        let mut out = String::new();
        let raw = self.tag(node).is_some_and(html::is_raw_text);
        for child in self.children(node) {
            html::write_child(self, *child, raw, &mut out);
        }
        out
    }

    pub fn to_html(&self) -> String {
        format!("<!DOCTYPE html>\n{}", self.outer_html(self.root))
    }
}

struct NodeRef<'a> {
    doc: &'a Document,
    id: NodeId,
}

impl SelectorTarget for NodeRef<'_> {
    fn tag_name(&self) -> &str {
        self.doc.tag(self.id).unwrap_or_default()
    }

    fn element_id(&self) -> Option<&str> {
        self.doc.element_id(self.id)
    }

    fn has_class(&self, class: &str) -> bool {
        self.doc.has_class(self.id, class)
    }

    fn sibling_index(&self) -> usize {
        match self.doc.parent(self.id) {
            Some(parent) => self
                .doc
                .element_children(parent)
                .iter()
                .position(|c| *c == self.id)
                .map_or(1, |i| i + 1),
            None => 1,
        }
    }

    fn parent_element(&self) -> Option<Self> {
        self.doc.parent(self.id).map(|id| NodeRef { doc: self.doc, id })
    }
}

// src/shared/dom/markup.rs

//! Detached element trees.
//!
//! Templates describe what they produce as `Markup` values; a `Document`
//! only materializes them when they are appended to a live node. Text is
//! always stored as text, so nothing a template receives can turn into
//! markup on its own.

#[derive(Debug, Clone, PartialEq)]
pub enum Markup {
    Element(Element),
    Text(String),
}

impl Markup {
    pub fn text(value: impl Into<String>) -> Self {
        Markup::Text(value.into())
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Markup::Element(el) => Some(el),
            Markup::Text(_) => None,
        }
    }
}

impl From<Element> for Markup {
    fn from(el: Element) -> Self {
        Markup::Element(el)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Element {
    pub tag: String,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Markup>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Adds one or more space separated classes.
    pub fn class(mut self, classes: &str) -> Self {
        for class in classes.split_whitespace() {
            if !self.classes.iter().any(|c| c == class) {
                self.classes.push(class.to_string());
            }
        }
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
        self
    }

    pub fn text(mut self, value: impl Into<String>) -> Self {
        self.children.push(Markup::Text(value.into()));
        self
    }

    pub fn child(mut self, child: impl Into<Markup>) -> Self {
        self.children.push(child.into());
        self
    }
}

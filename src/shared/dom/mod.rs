pub mod document;
pub mod html;
pub mod markup;
pub mod selector;

pub use document::{Document, NodeId};
pub use markup::{Element, Markup};
pub use selector::{Selector, SelectorError};

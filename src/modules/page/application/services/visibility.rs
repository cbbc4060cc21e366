use crate::page::application::services::list_renderer::VISIBLE_CLASS;
use crate::shared::dom::Document;

pub const ANIMATABLE: &str = ".fade-in, .portfolio__item, .testimonial__item, \
     .completed-task__item, .skills__item, .contacts__item";

/// Marks every animatable element visible. Safe to call repeatedly;
/// returns how many elements were newly marked.
pub fn activate(doc: &mut Document) -> usize {
    doc.query_selector_all(ANIMATABLE)
        .into_iter()
        .filter(|node| doc.add_class(*node, VISIBLE_CLASS))
        .count()
}

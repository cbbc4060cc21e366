// src/modules/page/application/services/list_renderer.rs

use std::num::NonZeroUsize;
use tracing::debug;

use crate::page::application::services::templates::{self, ShowMoreControl};
use crate::page::domain::{PaginatedList, Section};
use crate::profile::domain::entities::{CompletedTask, Testimonial, WorkSample};
use crate::shared::dom::{Document, Element};

pub const VISIBLE_CLASS: &str = "visible";

pub type ItemTemplate<T> = fn(&T) -> Element;

/// A paginated collection bound to its mount point and item template.
///
/// Each section owns its own sorted copy and reveal count; sections never
/// share state.
#[derive(Clone)]
pub struct ListSection<T> {
    section: Section,
    list: PaginatedList<T>,
    template: ItemTemplate<T>,
}

impl<T> ListSection<T> {
    pub fn new(section: Section, list: PaginatedList<T>, template: ItemTemplate<T>) -> Self {
        Self {
            section,
            list,
            template,
        }
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn list(&self) -> &PaginatedList<T> {
        &self.list
    }

    /// See [`PaginatedList::resume_at`].
    pub fn resume_at(mut self, shown: usize) -> Self {
        self.list = self.list.resume_at(shown);
        self
    }

    /// Visible items followed by the show-more control while items remain.
    pub fn markup(&self, mark_visible: bool) -> Vec<Element> {
        let mut out: Vec<Element> = self
            .list
            .current_page()
            .iter()
            .map(|item| {
                let el = (self.template)(item);
                if mark_visible {
                    el.class(VISIBLE_CLASS)
                } else {
                    el
                }
            })
            .collect();

        if self.list.has_more() {
            out.push(
                ShowMoreControl {
                    section: self.section,
                    shown: self.list.shown(),
                    remaining: self.list.remaining(),
                }
                .into_element(),
            );
        }
        out
    }

    /// Replaces the mount's content. Returns `false` when the mount is absent.
    pub fn render(&self, doc: &mut Document, mark_visible: bool) -> bool {
        let Some(mount) = doc.get_element_by_id(self.section.mount_id()) else {
            debug!("Mount #{} not found, skipping {}", self.section.mount_id(), self.section);
            return false;
        };
        doc.replace_children(mount, self.markup(mark_visible));
        true
    }

    /// Reveals the next page and re-renders; new content arrives already
    /// visible. Returns `false` once every item is shown.
    pub fn reveal_next(&mut self, doc: &mut Document) -> bool {
        if !self.list.reveal_next() {
            return false;
        }
        debug!(
            "Revealed {} up to {} of {}",
            self.section,
            self.list.shown(),
            self.list.total()
        );
        self.render(doc, true);
        true
    }
}

impl ListSection<WorkSample> {
    pub fn portfolio(items: &[WorkSample], page_size: NonZeroUsize) -> Self {
        let list = PaginatedList::new(items.to_vec(), |item| item.created_at, page_size);
        Self::new(Section::Portfolio, list, templates::work_sample)
    }
}

impl ListSection<Testimonial> {
    /// Testimonials without a comment are left out entirely.
    pub fn testimonials(items: &[Testimonial], page_size: NonZeroUsize) -> Self {
        let with_comment: Vec<Testimonial> = items
            .iter()
            .filter(|item| item.comment.is_some())
            .cloned()
            .collect();
        let list = PaginatedList::new(with_comment, |item| item.created_at, page_size);
        Self::new(Section::Testimonials, list, templates::testimonial)
    }
}

impl ListSection<CompletedTask> {
    pub fn completed_tasks(items: &[CompletedTask], page_size: NonZeroUsize) -> Self {
        let list = PaginatedList::new(items.to_vec(), |item| item.created_at, page_size);
        Self::new(Section::CompletedTasks, list, templates::completed_task)
    }
}

// src/modules/page/application/services/bootstrap.rs

use std::num::NonZeroUsize;
use tracing::{error, info};

use crate::page::application::services::field_projector::{
    project_profile, render_about, render_skills,
};
use crate::page::application::services::list_renderer::ListSection;
use crate::page::application::services::visibility;
use crate::page::domain::Section;
use crate::profile::application::ports::outgoing::PortfolioLoadError;
use crate::profile::domain::entities::{CompletedTask, Profile, Testimonial, WorkSample};
use crate::shared::dom::{Document, Element};

pub const LOAD_ERROR_CLASS: &str = "load-error";

/// The three independent list sections of a loaded page.
#[derive(Clone)]
pub struct PageSections {
    pub portfolio: ListSection<WorkSample>,
    pub testimonials: ListSection<Testimonial>,
    pub completed_tasks: ListSection<CompletedTask>,
}

impl PageSections {
    pub fn from_profile(profile: &Profile, page_size: NonZeroUsize) -> Self {
        let performer = &profile.performer;
        Self {
            portfolio: ListSection::portfolio(&performer.portfolio.items, page_size),
            testimonials: ListSection::testimonials(&performer.feedback.items, page_size),
            completed_tasks: ListSection::completed_tasks(
                &performer.completed_tasks.items,
                page_size,
            ),
        }
    }
}

/// A page document together with the reveal state of its sections.
///
/// `sections` is `None` when the data could not be loaded; the page then
/// shows fallback messages and has nothing to reveal.
pub struct PortfolioPage {
    document: Document,
    sections: Option<PageSections>,
}

impl PortfolioPage {
    /// Projects the profile, renders the first page of every section and
    /// marks the page visible. On a load failure each mount receives its
    /// section's fallback message instead.
    pub fn bootstrap(
        mut document: Document,
        data: &Result<Profile, PortfolioLoadError>,
        page_size: NonZeroUsize,
    ) -> Self {
        let sections = match data {
            Ok(profile) => {
                let applied = project_profile(&mut document, profile);
                render_skills(&mut document, &profile.skills);
                render_about(&mut document, profile.about.as_deref());

                let sections = PageSections::from_profile(profile, page_size);
                sections.portfolio.render(&mut document, false);
                sections.testimonials.render(&mut document, false);
                sections.completed_tasks.render(&mut document, false);
                info!(
                    "Page rendered: {} fields, {} samples, {} testimonials, {} tasks",
                    applied,
                    sections.portfolio.list().total(),
                    sections.testimonials.list().total(),
                    sections.completed_tasks.list().total()
                );
                Some(sections)
            }
            Err(err) => {
                error!("Portfolio data unavailable: {}", err);
                for section in Section::ALL {
                    render_failure(&mut document, section);
                }
                None
            }
        };

        visibility::activate(&mut document);
        Self { document, sections }
    }

    pub fn is_loaded(&self) -> bool {
        self.sections.is_some()
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Reveals the next page of one section. Other sections are untouched.
    pub fn reveal_next(&mut self, section: Section) -> bool {
        let Some(sections) = self.sections.as_mut() else {
            return false;
        };
        let doc = &mut self.document;
        match section {
            Section::Portfolio => sections.portfolio.reveal_next(doc),
            Section::Testimonials => sections.testimonials.reveal_next(doc),
            Section::CompletedTasks => sections.completed_tasks.reveal_next(doc),
        }
    }

    pub fn shown(&self, section: Section) -> Option<usize> {
        let sections = self.sections.as_ref()?;
        Some(match section {
            Section::Portfolio => sections.portfolio.list().shown(),
            Section::Testimonials => sections.testimonials.list().shown(),
            Section::CompletedTasks => sections.completed_tasks.list().shown(),
        })
    }

    pub fn to_html(&self) -> String {
        self.document.to_html()
    }
}

/// Fallback paragraph shown in a section's mount when data is unavailable.
pub fn failure_element(section: Section) -> Element {
    Element::new("p")
        .class(LOAD_ERROR_CLASS)
        .text(section.failure_message())
}

fn render_failure(doc: &mut Document, section: Section) {
    if let Some(mount) = doc.get_element_by_id(section.mount_id()) {
        doc.replace_children(mount, [failure_element(section)]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::application::services::field_projector::NAME;
    use crate::page::application::services::skeleton::default_skeleton;
    use crate::tests::support::fixtures::{sample_profile, testimonial, work_samples};

    fn six() -> NonZeroUsize {
        NonZeroUsize::new(6).unwrap()
    }

    fn count(page: &PortfolioPage, selector: &str) -> usize {
        page.document().query_selector_all(selector).len()
    }

    fn mount_text(page: &PortfolioPage, section: Section) -> String {
        let doc = page.document();
        doc.text_content(doc.get_element_by_id(section.mount_id()).unwrap())
    }

    fn profile_with_samples(n: usize) -> Profile {
        let mut profile = sample_profile();
        profile.performer.portfolio.items = work_samples(n);
        profile.performer.portfolio.total_count = n as u64;
        profile
    }

    #[test]
    fn eight_samples_reveal_to_eight_and_stop() {
        let mut page = PortfolioPage::bootstrap(
            default_skeleton(),
            &Ok(profile_with_samples(8)),
            six(),
        );

        assert_eq!(count(&page, "#portfolioGrid .portfolio__item"), 6);
        assert_eq!(count(&page, "#portfolioGrid .show-more"), 1);

        assert!(page.reveal_next(Section::Portfolio));
        assert_eq!(count(&page, "#portfolioGrid .portfolio__item"), 8);
        assert_eq!(count(&page, "#portfolioGrid .show-more"), 0);

        assert!(!page.reveal_next(Section::Portfolio));
        assert_eq!(page.shown(Section::Portfolio), Some(12));
    }

    #[test]
    fn sections_paginate_independently() {
        let mut profile = profile_with_samples(9);
        profile.performer.feedback.items = (1..=9)
            .map(|i| testimonial(Some("great"), 4.5, i))
            .collect();
        let mut page = PortfolioPage::bootstrap(default_skeleton(), &Ok(profile), six());

        let testimonials_before = page
            .document()
            .outer_html(page.document().get_element_by_id("testimonialsSlider").unwrap());
        page.reveal_next(Section::Portfolio);
        let testimonials_after = page
            .document()
            .outer_html(page.document().get_element_by_id("testimonialsSlider").unwrap());

        assert_eq!(testimonials_before, testimonials_after);
        assert_eq!(page.shown(Section::Portfolio), Some(12));
        assert_eq!(page.shown(Section::Testimonials), Some(6));
    }

    #[test]
    fn initial_items_become_visible_after_activation() {
        let page = PortfolioPage::bootstrap(
            default_skeleton(),
            &Ok(profile_with_samples(3)),
            six(),
        );
        assert_eq!(count(&page, ".portfolio__item.visible"), 3);
        assert_eq!(count(&page, ".skills__item.visible"), count(&page, ".skills__item"));
        assert_eq!(count(&page, ".contacts__item.visible"), 2);
    }

    #[test]
    fn load_failure_shows_fallbacks_and_keeps_placeholders() {
        let skeleton = default_skeleton();
        let placeholder_name = skeleton.text_content(skeleton.query_selector(NAME).unwrap());

        let mut page = PortfolioPage::bootstrap(
            skeleton,
            &Err(PortfolioLoadError::SchemaMissing("no portfolioData".into())),
            six(),
        );

        assert!(!page.is_loaded());
        assert_eq!(mount_text(&page, Section::Portfolio), "Portfolio failed to load");
        assert_eq!(mount_text(&page, Section::Testimonials), "Testimonials failed to load");
        assert_eq!(
            mount_text(&page, Section::CompletedTasks),
            "Completed projects failed to load"
        );
        assert_eq!(count(&page, ".load-error"), 3);
        let doc = page.document();
        assert_eq!(doc.text_content(doc.query_selector(NAME).unwrap()), placeholder_name);

        assert!(!page.reveal_next(Section::Portfolio));
        assert_eq!(page.shown(Section::Portfolio), None);
    }

    #[test]
    fn empty_collections_leave_mounts_empty() {
        let mut profile = sample_profile();
        profile.performer = Default::default();
        let page = PortfolioPage::bootstrap(default_skeleton(), &Ok(profile), six());

        for section in Section::ALL {
            let doc = page.document();
            let mount = doc.get_element_by_id(section.mount_id()).unwrap();
            assert_eq!(doc.inner_html(mount), "");
        }
        assert_eq!(count(&page, ".show-more"), 0);
    }

    #[test]
    fn rendered_html_carries_profile() {
        let page = PortfolioPage::bootstrap(default_skeleton(), &Ok(sample_profile()), six());
        let html = page.to_html();
        assert!(html.contains("<h1 class=\"header__name\">Anna Petrova</h1>"));
        assert!(html.contains("href=\"mailto:anna@example.com\""));
    }
}

use async_trait::async_trait;
use std::num::NonZeroUsize;
use tracing::{debug, warn};

use crate::page::application::ports::incoming::use_cases::{
    RevealSectionError, RevealSectionUseCase, SectionFragment,
};
use crate::page::application::services::{ListSection, PageSections};
use crate::page::domain::Section;
use crate::profile::application::ports::outgoing::PortfolioSource;
use crate::shared::dom::{Document, Element};

pub struct RevealSectionService<S>
where
    S: PortfolioSource,
{
    source: S,
    page_size: NonZeroUsize,
}

impl<S> RevealSectionService<S>
where
    S: PortfolioSource,
{
    pub fn new(source: S, page_size: NonZeroUsize) -> Self {
        Self { source, page_size }
    }
}

/// Renders `list` resumed at `shown` plus one page into a detached mount
/// and returns the mount's content.
fn reveal_in_fragment<T>(list: ListSection<T>, shown: usize) -> SectionFragment {
    let section = list.section();
    let mut doc = Document::new(Element::new("div").id(section.mount_id()));
    let mut list = list.resume_at(shown);
    if !list.reveal_next(&mut doc) {
        // Already complete: hand back the full list without a control.
        list.render(&mut doc, true);
    }
    SectionFragment {
        html: doc.inner_html(doc.root()),
        shown: list.list().shown(),
        remaining: list.list().remaining(),
    }
}

#[async_trait]
impl<S> RevealSectionUseCase for RevealSectionService<S>
where
    S: PortfolioSource + Send + Sync,
{
    async fn execute(
        &self,
        section: Section,
        shown: usize,
    ) -> Result<SectionFragment, RevealSectionError> {
        let profile = self.source.load().await.map_err(|e| {
            warn!("Cannot reveal {}: {}", section, e);
            RevealSectionError::DataUnavailable(e)
        })?;

        let sections = PageSections::from_profile(&profile, self.page_size);
        let fragment = match section {
            Section::Portfolio => reveal_in_fragment(sections.portfolio, shown),
            Section::Testimonials => reveal_in_fragment(sections.testimonials, shown),
            Section::CompletedTasks => reveal_in_fragment(sections.completed_tasks, shown),
        };
        debug!(
            "Revealed {} from {} to {} ({} remaining)",
            section, shown, fragment.shown, fragment.remaining
        );
        Ok(fragment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::application::ports::outgoing::PortfolioLoadError;
    use crate::profile::domain::entities::Profile;
    use crate::tests::support::fixtures::{completed_task, work_samples};
    use mockall::mock;

    mock! {
        pub Source {}
        #[async_trait]
        impl PortfolioSource for Source {
            async fn load(&self) -> Result<Profile, PortfolioLoadError>;
        }
    }

    fn service_with_samples(n: usize) -> RevealSectionService<MockSource> {
        let mut source = MockSource::new();
        source.expect_load().returning(move || {
            let mut profile = Profile::default();
            profile.performer.portfolio.items = work_samples(n);
            profile.performer.completed_tasks.items =
                (1..=3).map(|i| completed_task("Task", i)).collect();
            Ok(profile)
        });
        RevealSectionService::new(source, NonZeroUsize::new(6).unwrap())
    }

    #[tokio::test]
    async fn reveals_one_more_page() {
        let fragment = service_with_samples(15)
            .execute(Section::Portfolio, 6)
            .await
            .unwrap();

        assert_eq!(fragment.shown, 12);
        assert_eq!(fragment.remaining, 3);
        assert_eq!(fragment.html.matches("class=\"portfolio__item visible\"").count(), 12);
        assert!(fragment.html.contains("Show more (3)"));
        assert!(fragment.html.contains("data-href=\"/sections/portfolio/more?shown=12\""));
    }

    #[tokio::test]
    async fn last_page_drops_control() {
        let fragment = service_with_samples(8)
            .execute(Section::Portfolio, 6)
            .await
            .unwrap();

        assert_eq!(fragment.remaining, 0);
        assert_eq!(fragment.html.matches("portfolio__item").count(), 8);
        assert!(!fragment.html.contains("show-more"));
    }

    #[tokio::test]
    async fn out_of_range_counts_are_clamped() {
        let service = service_with_samples(8);

        let from_zero = service.execute(Section::Portfolio, 0).await.unwrap();
        assert_eq!(from_zero.html.matches("portfolio__item").count(), 8);

        let past_end = service.execute(Section::Portfolio, 999).await.unwrap();
        assert_eq!(past_end.shown, 8);
        assert_eq!(past_end.html.matches("portfolio__item").count(), 8);
    }

    #[tokio::test]
    async fn complete_section_returns_full_list() {
        let fragment = service_with_samples(8)
            .execute(Section::CompletedTasks, 3)
            .await
            .unwrap();
        assert_eq!(fragment.html.matches("completed-task__item").count(), 3);
        assert_eq!(fragment.remaining, 0);
    }

    #[tokio::test]
    async fn load_failure_is_data_unavailable() {
        let mut source = MockSource::new();
        source
            .expect_load()
            .times(1)
            .returning(|| Err(PortfolioLoadError::SchemaMissing("portfolioData".into())));
        let service = RevealSectionService::new(source, NonZeroUsize::new(6).unwrap());

        let result = service.execute(Section::Testimonials, 6).await;
        assert!(
            matches!(
                result,
                Err(RevealSectionError::DataUnavailable(PortfolioLoadError::SchemaMissing(_)))
            ),
            "Expected DataUnavailable, got {:?}",
            result
        );
    }
}

use std::sync::Arc;

use actix_web::web;

use crate::page::application::ports::incoming::use_cases::{
    RenderPageUseCase, RevealSectionUseCase, SectionFragment,
};
use crate::page::application::PageUseCases;
use crate::profile::adapter::outgoing::StaticPortfolioSource;
use crate::profile::application::ports::outgoing::PortfolioSource;
use crate::tests::support::fixtures::sample_profile;
use crate::tests::support::stubs::{StubRenderPageUseCase, StubRevealSectionUseCase};
use crate::AppState;

pub struct TestAppStateBuilder {
    render_page: Option<Arc<dyn RenderPageUseCase + Send + Sync>>,
    reveal_section: Option<Arc<dyn RevealSectionUseCase + Send + Sync>>,
    source: Option<Arc<dyn PortfolioSource + Send + Sync>>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            render_page: Some(Arc::new(StubRenderPageUseCase::default())),
            reveal_section: Some(Arc::new(StubRevealSectionUseCase::success(
                SectionFragment {
                    html: String::new(),
                    shown: 0,
                    remaining: 0,
                },
            ))),
            source: Some(Arc::new(StaticPortfolioSource::loaded(sample_profile()))),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_render_page(
        mut self,
        uc: impl RenderPageUseCase + Send + Sync + 'static,
    ) -> Self {
        self.render_page = Some(Arc::new(uc));
        self
    }

    pub fn with_reveal_section(
        mut self,
        uc: impl RevealSectionUseCase + Send + Sync + 'static,
    ) -> Self {
        self.reveal_section = Some(Arc::new(uc));
        self
    }

    pub fn with_source(mut self, source: impl PortfolioSource + Send + Sync + 'static) -> Self {
        self.source = Some(Arc::new(source));
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            page: PageUseCases {
                render: self.render_page.expect("render_page not set"),
                reveal: self.reveal_section.expect("reveal_section not set"),
            },
            source: self.source.expect("source not set"),
        })
    }
}

use async_trait::async_trait;
use std::num::NonZeroUsize;

use crate::page::application::ports::incoming::use_cases::{RenderPageUseCase, RenderedPage};
use crate::page::application::services::{default_skeleton, PortfolioPage};
use crate::profile::application::ports::outgoing::PortfolioSource;

pub struct RenderPageService<S>
where
    S: PortfolioSource,
{
    source: S,
    page_size: NonZeroUsize,
}

impl<S> RenderPageService<S>
where
    S: PortfolioSource,
{
    pub fn new(source: S, page_size: NonZeroUsize) -> Self {
        Self { source, page_size }
    }
}

#[async_trait]
impl<S> RenderPageUseCase for RenderPageService<S>
where
    S: PortfolioSource + Send + Sync,
{
    async fn execute(&self) -> RenderedPage {
        let data = self.source.load().await;
        let page = PortfolioPage::bootstrap(default_skeleton(), &data, self.page_size);
        RenderedPage {
            html: page.to_html(),
            data_loaded: page.is_loaded(),
        }
    }
}

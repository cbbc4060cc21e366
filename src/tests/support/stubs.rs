use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::page::application::ports::incoming::use_cases::{
    RenderPageUseCase, RenderedPage, RevealSectionError, RevealSectionUseCase, SectionFragment,
};
use crate::page::domain::Section;

/* --------------------------------------------------
 * RenderPageUseCase
 * -------------------------------------------------- */

#[derive(Clone)]
pub struct StubRenderPageUseCase {
    page: RenderedPage,
}

impl StubRenderPageUseCase {
    pub fn new(page: RenderedPage) -> Self {
        Self { page }
    }
}

impl Default for StubRenderPageUseCase {
    fn default() -> Self {
        Self::new(RenderedPage {
            html: "<!DOCTYPE html>\n<html></html>".to_string(),
            data_loaded: true,
        })
    }
}

#[async_trait]
impl RenderPageUseCase for StubRenderPageUseCase {
    async fn execute(&self) -> RenderedPage {
        self.page.clone()
    }
}

/* --------------------------------------------------
 * RevealSectionUseCase
 * -------------------------------------------------- */

/// Returns a fixed result and records every `(section, shown)` it receives.
#[derive(Clone)]
pub struct StubRevealSectionUseCase {
    result: Result<SectionFragment, RevealSectionError>,
    calls: Arc<Mutex<Vec<(Section, usize)>>>,
}

impl StubRevealSectionUseCase {
    pub fn success(fragment: SectionFragment) -> Self {
        Self {
            result: Ok(fragment),
            calls: Arc::default(),
        }
    }

    pub fn error(err: RevealSectionError) -> Self {
        Self {
            result: Err(err),
            calls: Arc::default(),
        }
    }

    pub fn calls(&self) -> Vec<(Section, usize)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl RevealSectionUseCase for StubRevealSectionUseCase {
    async fn execute(
        &self,
        section: Section,
        shown: usize,
    ) -> Result<SectionFragment, RevealSectionError> {
        self.calls.lock().unwrap().push((section, shown));
        self.result.clone()
    }
}

use async_trait::async_trait;
use serde::Serialize;

use crate::page::domain::Section;
use crate::profile::application::ports::outgoing::PortfolioLoadError;

/// New content of a section's mount after one reveal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionFragment {
    pub html: String,
    pub shown: usize,
    pub remaining: usize,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RevealSectionError {
    #[error("Portfolio data unavailable: {0}")]
    DataUnavailable(PortfolioLoadError),
}

#[async_trait]
pub trait RevealSectionUseCase: Send + Sync {
    /// Resumes `section` at a previously rendered `shown` count and reveals
    /// one more page.
    async fn execute(
        &self,
        section: Section,
        shown: usize,
    ) -> Result<SectionFragment, RevealSectionError>;
}

use crate::profile::{
    application::ports::outgoing::{PortfolioLoadError, PortfolioSource},
    domain::entities::Profile,
};
use async_trait::async_trait;
use std::sync::Arc;

/// Serves a result that was loaded once, up front.
///
/// A failed load stays failed: every call returns the same error.
#[derive(Debug, Clone)]
pub struct StaticPortfolioSource {
    snapshot: Arc<Result<Profile, PortfolioLoadError>>,
}

impl StaticPortfolioSource {
    pub fn from_result(result: Result<Profile, PortfolioLoadError>) -> Self {
        Self {
            snapshot: Arc::new(result),
        }
    }

    pub fn loaded(profile: Profile) -> Self {
        Self::from_result(Ok(profile))
    }

    pub fn failed(err: PortfolioLoadError) -> Self {
        Self::from_result(Err(err))
    }
}

#[async_trait]
impl PortfolioSource for StaticPortfolioSource {
    async fn load(&self) -> Result<Profile, PortfolioLoadError> {
        (*self.snapshot).clone()
    }
}

// portfolio_source.rs
use crate::profile::domain::entities::Profile;
use async_trait::async_trait;

/// Why the data bundle could not be turned into a `Profile`.
///
/// Both kinds are terminal for the lifetime of the loaded snapshot.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PortfolioLoadError {
    /// The bundle could not be read or is not valid JSON.
    #[error("Failed to load portfolio data: {0}")]
    LoadFailure(String),

    /// The bundle was read but the expected portfolio binding is absent.
    #[error("Portfolio data binding missing: {0}")]
    SchemaMissing(String),
}

#[async_trait]
pub trait PortfolioSource: Send + Sync {
    async fn load(&self) -> Result<Profile, PortfolioLoadError>;
}

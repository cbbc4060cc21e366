use async_trait::async_trait;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedPage {
    pub html: String,
    /// `false` when the page carries fallback messages instead of data.
    pub data_loaded: bool,
}

#[async_trait]
pub trait RenderPageUseCase: Send + Sync {
    async fn execute(&self) -> RenderedPage;
}

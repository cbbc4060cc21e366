use std::sync::Arc;

use crate::page::application::ports::incoming::use_cases::{
    RenderPageUseCase, RevealSectionUseCase,
};

#[derive(Clone)]
pub struct PageUseCases {
    pub render: Arc<dyn RenderPageUseCase + Send + Sync>,
    pub reveal: Arc<dyn RevealSectionUseCase + Send + Sync>,
}

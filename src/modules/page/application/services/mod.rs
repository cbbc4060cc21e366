pub mod bootstrap;
pub mod field_projector;
pub mod list_renderer;
pub mod skeleton;
pub mod templates;
pub mod visibility;

pub use bootstrap::{PageSections, PortfolioPage};
pub use list_renderer::ListSection;
pub use skeleton::default_skeleton;

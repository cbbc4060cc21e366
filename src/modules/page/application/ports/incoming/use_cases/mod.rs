mod render_page;
mod reveal_section;

pub use render_page::{RenderPageUseCase, RenderedPage};
pub use reveal_section::{RevealSectionError, RevealSectionUseCase, SectionFragment};

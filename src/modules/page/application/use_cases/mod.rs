pub mod render_page;
pub mod reveal_section;

pub use render_page::RenderPageService;
pub use reveal_section::RevealSectionService;

pub mod get_page;
pub mod reveal_section;

pub use get_page::get_page_handler;
pub use reveal_section::reveal_section_handler;

pub mod page_use_cases;
pub mod ports;
pub mod services;
pub mod use_cases;

pub use page_use_cases::PageUseCases;

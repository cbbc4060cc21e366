pub mod json_file_source;
pub mod static_source;

pub use json_file_source::JsonFilePortfolioSource;
pub use static_source::StaticPortfolioSource;

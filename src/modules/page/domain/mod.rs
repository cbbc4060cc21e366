pub mod pagination;
pub mod section;

pub use pagination::PaginatedList;
pub use section::{ParseSectionError, Section};

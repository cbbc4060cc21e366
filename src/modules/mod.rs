pub mod page;
pub mod profile;

pub mod aggregate;
pub mod catalog;
pub mod favorites;
pub mod list_query;

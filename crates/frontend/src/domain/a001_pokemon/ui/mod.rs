pub mod card;
pub mod details;
pub mod favorites;
pub mod filters;
pub mod list;
pub mod type_badge;

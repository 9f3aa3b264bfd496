pub mod pokemon_type;
pub mod sort_key;

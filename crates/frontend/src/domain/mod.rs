pub mod a001_pokemon;

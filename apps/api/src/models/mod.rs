pub mod favorite;
pub mod recipe;

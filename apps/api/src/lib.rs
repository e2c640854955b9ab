pub mod config;
pub mod db;
pub mod errors;
pub mod favorites;
pub mod mealprep;
pub mod models;
pub mod recipes;
pub mod routes;
pub mod state;

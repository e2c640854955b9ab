pub mod handlers;
pub mod shopping_list;
pub mod store;

pub mod account;
pub mod app_state;
pub mod cart;
pub mod catalog;
pub mod navigation;
pub mod products;
pub mod reviews;
pub mod search;
pub mod session;
pub mod wishlist;

mod cart;
mod dashboard;
mod error;
mod home;
mod login;
mod orders;
mod product;
mod search;
mod shop;
mod signup;
mod wishlist;

pub use cart::CartPage;
pub use dashboard::DashboardPage;
pub use error::ErrorPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use orders::OrderPage;
pub use product::ProductPage;
pub use search::SearchPage;
pub use shop::ShopPage;
pub use signup::SignupPage;
pub use wishlist::WishlistPage;

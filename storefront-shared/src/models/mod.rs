//! Request and response bodies, grouped by backend app.

pub mod cart;
pub mod category;
pub mod errors;
pub mod order;
pub mod product;
pub mod profile;
pub mod review;
pub mod search;
pub mod user;
pub mod wishlist;

pub use cart::{
    AddItemRequest, CartItem, CartItemsResponse, CartTotals, RemoveItemRequest, UpdateItemRequest,
};
pub use category::{CategoriesResponse, Category};
pub use errors::ErrorResponse;
pub use order::{Order, OrderDetailResponse, OrderItem, OrderStatus, OrdersResponse};
pub use product::{Product, ProductDetailResponse, ProductsResponse, RelatedProductsResponse};
pub use profile::{ProfileResponse, UserProfile};
pub use review::{MAX_RATING, MIN_RATING, Review, ReviewError, ReviewRequest, ReviewResponse};
pub use search::{ALL_CATEGORIES, SearchQuery, SearchResponse};
pub use user::{
    LoginRequest, RefreshRequest, RefreshResponse, SignupError, SignupRequest, TokenPair, User,
    VerifyRequest,
};
pub use wishlist::{WishlistItem, WishlistItemsResponse, WishlistTotal};

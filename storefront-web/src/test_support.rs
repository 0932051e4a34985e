//! Fixtures and an in-memory backend for unit tests.

use shared::models::{CartItem, Category, Order, OrderItem, OrderStatus, Product, Review, User, WishlistItem};

pub fn user() -> User {
    User {
        id: 1,
        email: "ana@example.com".to_string(),
        first_name: "Ana".to_string(),
        last_name: "Torres".to_string(),
    }
}

pub fn category(id: i64, name: &str) -> Category {
    Category {
        id,
        name: name.to_string(),
        sub_categories: Vec::new(),
    }
}

pub fn product(id: i64, price: f64, quantity: u32) -> Product {
    Product {
        id,
        name: format!("Product {id}"),
        photo: format!("/media/photos/{id}.jpg"),
        description: String::new(),
        price,
        compare_price: price,
        category: 1,
        quantity,
        sold: 0,
        date_created: None,
    }
}

pub fn cart_item(product_id: i64, count: u32, price: f64) -> CartItem {
    CartItem {
        id: product_id,
        count,
        product: product(product_id, price, 100),
    }
}

pub fn wishlist_item(product_id: i64) -> WishlistItem {
    WishlistItem {
        id: product_id,
        product: product(product_id, 10.0, 5),
    }
}

pub fn review(rating: f64) -> Review {
    Review {
        id: 1,
        rating,
        comment: "Does what it says".to_string(),
        date_created: None,
    }
}

pub fn order(transaction_id: &str) -> Order {
    Order {
        transaction_id: transaction_id.to_string(),
        amount: 25.0,
        status: OrderStatus::Shipping,
        date_issued: None,
        full_name: "Ana Torres".to_string(),
        address_line_1: "Av. Larco 101".to_string(),
        city: "Lima".to_string(),
        country_region: "Peru".to_string(),
        shipping_name: "Standard".to_string(),
        shipping_time: "3-5 days".to_string(),
        shipping_price: 5.0,
        order_items: vec![OrderItem {
            name: "Product 1".to_string(),
            price: 10.0,
            count: 2,
        }],
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use fake::{Call, FakeApi};

#[cfg(not(target_arch = "wasm32"))]
mod fake {
    use async_trait::async_trait;
    use reqwest::StatusCode;
    use shared::models::{
        CartItem, CartTotals, Category, LoginRequest, Order, Product, Review, ReviewRequest, SearchQuery,
        SignupRequest, User, UserProfile, WishlistItem,
    };
    use std::cell::{Cell, RefCell};
    use std::collections::BTreeMap;

    use crate::api::{ApiError, StorefrontApi};

    /// A request the fake backend received.
    #[derive(Debug, Clone, PartialEq)]
    pub enum Call {
        Categories,
        Products,
        Product(i64),
        Related(i64),
        Search(SearchQuery),
        Login(String),
        Signup(String),
        Verify,
        Refresh,
        CurrentUser,
        ClearSession,
        CartItems,
        CartTotals,
        AddItem(i64),
        UpdateItem(i64, u32),
        RemoveItem(i64),
        EmptyCart,
        WishlistItems,
        WishlistTotal,
        AddWish(i64),
        RemoveWish(i64),
        Review(i64),
        CreateReview(i64),
        UpdateReview(i64),
        DeleteReview(i64),
        Orders,
        Order(String),
        Profile,
        UpdateProfile,
    }

    /// In-memory stand-in for the storefront backend.
    ///
    /// Every call is recorded and yields once to the executor before
    /// answering, so concurrently driven actions interleave like real
    /// requests do. Account requests are authorized when sent, before the
    /// yield.
    #[derive(Debug, Default)]
    pub struct FakeApi {
        pub categories: Vec<Category>,
        pub products: Vec<Product>,
        pub orders: Vec<Order>,
        pub user: Option<User>,
        pub password: String,
        pub offline: bool,
        pub tokens: Cell<bool>,
        pub access_valid: Cell<bool>,
        pub refresh_valid: bool,
        pub server_cart: RefCell<Vec<CartItem>>,
        pub server_wishlist: RefCell<Vec<WishlistItem>>,
        pub reviews: RefCell<BTreeMap<i64, Review>>,
        pub profile: RefCell<UserProfile>,
        pub calls: RefCell<Vec<Call>>,
    }

    impl FakeApi {
        pub fn with_user(user: User, password: &str) -> Self {
            Self {
                user: Some(user),
                password: password.to_string(),
                ..Self::default()
            }
        }

        /// Pretend a previous login left tokens behind.
        pub fn signed_in(self) -> Self {
            self.tokens.set(true);
            self.access_valid.set(true);
            self
        }

        pub fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }

        pub fn count(&self, call: &Call) -> usize {
            self.calls.borrow().iter().filter(|c| *c == call).count()
        }

        async fn record(&self, call: Call) -> Result<(), ApiError> {
            self.calls.borrow_mut().push(call);
            tokio::task::yield_now().await;
            self.reachable()
        }

        /// Like [`Self::record`], with the session checked as the request
        /// leaves rather than when it is answered.
        async fn record_authorized(&self, call: Call) -> Result<(), ApiError> {
            self.calls.borrow_mut().push(call);
            let session = self.require_session();
            tokio::task::yield_now().await;
            self.reachable()?;
            session
        }

        fn reachable(&self) -> Result<(), ApiError> {
            if self.offline {
                Err(ApiError::Status {
                    status: StatusCode::SERVICE_UNAVAILABLE,
                    message: "Service Unavailable".to_string(),
                })
            } else {
                Ok(())
            }
        }

        fn require_session(&self) -> Result<(), ApiError> {
            if !self.tokens.get() {
                return Err(ApiError::MissingSession);
            }
            if !self.access_valid.get() {
                return Err(ApiError::Unauthorized("Token is invalid or expired".into()));
            }
            Ok(())
        }

        fn not_found(message: &str) -> ApiError {
            ApiError::Status {
                status: StatusCode::NOT_FOUND,
                message: message.to_string(),
            }
        }

        fn find_product(&self, product_id: i64) -> Result<Product, ApiError> {
            self.products
                .iter()
                .find(|product| product.id == product_id)
                .cloned()
                .ok_or_else(|| Self::not_found("Product with this ID does not exist"))
        }

        fn stored_review(&self, request: &ReviewRequest) -> Review {
            Review {
                id: i64::try_from(self.reviews.borrow().len()).unwrap_or_default() + 1,
                rating: request.rating,
                comment: request.comment.clone(),
                date_created: None,
            }
        }
    }

    #[async_trait(?Send)]
    impl StorefrontApi for FakeApi {
        async fn categories(&self) -> Result<Vec<Category>, ApiError> {
            self.record(Call::Categories).await?;
            Ok(self.categories.clone())
        }

        async fn products(&self) -> Result<Vec<Product>, ApiError> {
            self.record(Call::Products).await?;
            Ok(self.products.clone())
        }

        async fn product(&self, product_id: i64) -> Result<Product, ApiError> {
            self.record(Call::Product(product_id)).await?;
            self.find_product(product_id)
        }

        async fn related_products(&self, product_id: i64) -> Result<Vec<Product>, ApiError> {
            self.record(Call::Related(product_id)).await?;
            let product = self.find_product(product_id)?;
            let related: Vec<Product> = self
                .products
                .iter()
                .filter(|other| other.id != product_id && other.category == product.category)
                .cloned()
                .collect();
            if related.is_empty() {
                return Err(Self::not_found("No related products found"));
            }
            Ok(related)
        }

        async fn search_products(&self, query: &SearchQuery) -> Result<Vec<Product>, ApiError> {
            self.record(Call::Search(query.clone())).await?;
            let needle = query.search.to_lowercase();
            Ok(self
                .products
                .iter()
                .filter(|product| query.is_all_categories() || product.category == query.category_id)
                .filter(|product| product.name.to_lowercase().contains(&needle))
                .cloned()
                .collect())
        }

        async fn login(&self, request: &LoginRequest) -> Result<(), ApiError> {
            self.record(Call::Login(request.email.clone())).await?;
            let known = self
                .user
                .as_ref()
                .is_some_and(|user| user.email == request.email);
            if !known || request.password != self.password {
                return Err(ApiError::Unauthorized(
                    "No active account found with the given credentials".into(),
                ));
            }
            self.tokens.set(true);
            self.access_valid.set(true);
            Ok(())
        }

        async fn signup(&self, request: &SignupRequest) -> Result<(), ApiError> {
            self.record(Call::Signup(request.email.clone())).await?;
            if self.user.as_ref().is_some_and(|user| user.email == request.email) {
                return Err(ApiError::Status {
                    status: StatusCode::BAD_REQUEST,
                    message: "email: user account with this email already exists.".into(),
                });
            }
            Ok(())
        }

        async fn verify_session(&self) -> Result<(), ApiError> {
            self.record(Call::Verify).await?;
            self.require_session()
        }

        async fn refresh_session(&self) -> Result<(), ApiError> {
            self.record(Call::Refresh).await?;
            if !self.tokens.get() {
                return Err(ApiError::MissingSession);
            }
            if !self.refresh_valid {
                self.tokens.set(false);
                return Err(ApiError::Unauthorized("Token is invalid or expired".into()));
            }
            self.access_valid.set(true);
            Ok(())
        }

        async fn current_user(&self) -> Result<User, ApiError> {
            self.record_authorized(Call::CurrentUser).await?;
            self.user
                .clone()
                .ok_or_else(|| ApiError::Unauthorized("User not found".into()))
        }

        fn has_session(&self) -> bool {
            self.tokens.get()
        }

        fn clear_session(&self) {
            self.calls.borrow_mut().push(Call::ClearSession);
            self.tokens.set(false);
            self.access_valid.set(false);
        }

        async fn cart_items(&self) -> Result<Vec<CartItem>, ApiError> {
            self.record_authorized(Call::CartItems).await?;
            Ok(self.server_cart.borrow().clone())
        }

        async fn cart_totals(&self) -> Result<CartTotals, ApiError> {
            self.record_authorized(Call::CartTotals).await?;
            Ok(CartTotals::from_items(&self.server_cart.borrow()))
        }

        async fn add_cart_item(&self, product_id: i64) -> Result<(), ApiError> {
            self.record_authorized(Call::AddItem(product_id)).await?;
            let product = self.find_product(product_id)?;
            let mut cart = self.server_cart.borrow_mut();
            match cart.iter_mut().find(|item| item.product.id == product_id) {
                Some(item) => item.count += 1,
                None => cart.push(CartItem {
                    id: product_id,
                    count: 1,
                    product,
                }),
            }
            Ok(())
        }

        async fn update_cart_item(&self, product_id: i64, count: u32) -> Result<(), ApiError> {
            self.record_authorized(Call::UpdateItem(product_id, count)).await?;
            if let Some(item) = self
                .server_cart
                .borrow_mut()
                .iter_mut()
                .find(|item| item.product.id == product_id)
            {
                item.count = count;
            }
            Ok(())
        }

        async fn remove_cart_item(&self, product_id: i64) -> Result<(), ApiError> {
            self.record_authorized(Call::RemoveItem(product_id)).await?;
            self.server_cart
                .borrow_mut()
                .retain(|item| item.product.id != product_id);
            Ok(())
        }

        async fn empty_cart(&self) -> Result<(), ApiError> {
            self.record_authorized(Call::EmptyCart).await?;
            self.server_cart.borrow_mut().clear();
            Ok(())
        }

        async fn wishlist_items(&self) -> Result<Vec<WishlistItem>, ApiError> {
            self.record_authorized(Call::WishlistItems).await?;
            Ok(self.server_wishlist.borrow().clone())
        }

        async fn wishlist_total(&self) -> Result<u32, ApiError> {
            self.record_authorized(Call::WishlistTotal).await?;
            Ok(u32::try_from(self.server_wishlist.borrow().len()).unwrap_or(u32::MAX))
        }

        async fn add_wishlist_item(&self, product_id: i64) -> Result<(), ApiError> {
            self.record_authorized(Call::AddWish(product_id)).await?;
            let product = self.find_product(product_id)?;
            let mut wishlist = self.server_wishlist.borrow_mut();
            if WishlistItem::contains(&wishlist, product_id) {
                return Err(ApiError::Status {
                    status: StatusCode::CONFLICT,
                    message: "Item already in wishlist".into(),
                });
            }
            wishlist.push(WishlistItem { id: product_id, product });
            Ok(())
        }

        async fn remove_wishlist_item(&self, product_id: i64) -> Result<(), ApiError> {
            self.record_authorized(Call::RemoveWish(product_id)).await?;
            let mut wishlist = self.server_wishlist.borrow_mut();
            if !WishlistItem::contains(&wishlist, product_id) {
                return Err(Self::not_found("This product is not in your wishlist"));
            }
            wishlist.retain(|item| item.product.id != product_id);
            Ok(())
        }

        async fn review(&self, product_id: i64) -> Result<Option<Review>, ApiError> {
            self.record_authorized(Call::Review(product_id)).await?;
            Ok(self.reviews.borrow().get(&product_id).cloned())
        }

        async fn create_review(&self, product_id: i64, request: &ReviewRequest) -> Result<Review, ApiError> {
            self.record_authorized(Call::CreateReview(product_id)).await?;
            if self.reviews.borrow().contains_key(&product_id) {
                return Err(ApiError::Status {
                    status: StatusCode::CONFLICT,
                    message: "Review for this product already created".into(),
                });
            }
            let review = self.stored_review(request);
            self.reviews.borrow_mut().insert(product_id, review.clone());
            Ok(review)
        }

        async fn update_review(&self, product_id: i64, request: &ReviewRequest) -> Result<Review, ApiError> {
            self.record_authorized(Call::UpdateReview(product_id)).await?;
            let mut reviews = self.reviews.borrow_mut();
            let review = reviews
                .get_mut(&product_id)
                .ok_or_else(|| Self::not_found("Review does not exist"))?;
            review.rating = request.rating;
            review.comment.clone_from(&request.comment);
            Ok(review.clone())
        }

        async fn delete_review(&self, product_id: i64) -> Result<(), ApiError> {
            self.record_authorized(Call::DeleteReview(product_id)).await?;
            self.reviews
                .borrow_mut()
                .remove(&product_id)
                .map(|_| ())
                .ok_or_else(|| Self::not_found("Review does not exist"))
        }

        async fn orders(&self) -> Result<Vec<Order>, ApiError> {
            self.record_authorized(Call::Orders).await?;
            Ok(self.orders.clone())
        }

        async fn order(&self, transaction_id: &str) -> Result<Order, ApiError> {
            self.record_authorized(Call::Order(transaction_id.to_string())).await?;
            self.orders
                .iter()
                .find(|order| order.transaction_id == transaction_id)
                .cloned()
                .ok_or_else(|| Self::not_found("Order with this transaction ID does not exist"))
        }

        async fn profile(&self) -> Result<UserProfile, ApiError> {
            self.record_authorized(Call::Profile).await?;
            Ok(self.profile.borrow().clone())
        }

        async fn update_profile(&self, profile: &UserProfile) -> Result<UserProfile, ApiError> {
            self.record_authorized(Call::UpdateProfile).await?;
            self.profile.replace(profile.clone());
            Ok(profile.clone())
        }
    }
}

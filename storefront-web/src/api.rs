use async_trait::async_trait;
use gloo_storage::{LocalStorage, Storage};
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use shared::models::{
    AddItemRequest, CartItem, CartItemsResponse, CartTotals, CategoriesResponse, Category,
    ErrorResponse, LoginRequest, Order, OrderDetailResponse, OrdersResponse, Product,
    ProductDetailResponse, ProductsResponse, ProfileResponse, RefreshRequest, RefreshResponse,
    RelatedProductsResponse, RemoveItemRequest, Review, ReviewRequest, ReviewResponse, SearchQuery,
    SearchResponse, SignupRequest, TokenPair, UpdateItemRequest, User, UserProfile, VerifyRequest,
    WishlistItem, WishlistItemsResponse, WishlistTotal,
};
use std::cell::{OnceCell, RefCell};
use std::rc::Rc;
use thiserror::Error;

use crate::config::FrontendConfig;

const ACCESS_KEY: &str = "access";
const REFRESH_KEY: &str = "refresh";
/// Header scheme configured on the backend's JWT authentication.
const AUTH_SCHEME: &str = "JWT";

thread_local! {
    static SHARED_CLIENT: OnceCell<StorefrontClient> = const { OnceCell::new() };
}

/// Failures surfaced by API calls.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// An authenticated call was attempted without stored tokens.
    #[error("not signed in")]
    MissingSession,
    /// The backend rejected the credentials or tokens.
    #[error("{0}")]
    Unauthorized(String),
    /// Any other non-success status, with the backend's message.
    #[error("{message}")]
    Status {
        /// HTTP status of the response.
        status: StatusCode,
        /// Message extracted from the error body.
        message: String,
    },
}

impl ApiError {
    /// Whether the session is missing or was rejected.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized(_) | Self::MissingSession)
    }

    /// Message suitable for the alert banner.
    pub fn user_message(&self) -> String {
        match self {
            Self::Transport(_) => "Unable to connect to server".to_string(),
            other => other.to_string(),
        }
    }

    /// Whether the backend answered 404.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status, .. } if *status == StatusCode::NOT_FOUND)
    }
}

/// Everything the storefront asks of its backend.
///
/// Async actions are written against this trait so they can run against the
/// HTTP client in the browser and an in-memory fake in tests.
#[async_trait(?Send)]
pub trait StorefrontApi {
    /// Category tree for the search filter.
    async fn categories(&self) -> Result<Vec<Category>, ApiError>;
    /// Every listed product.
    async fn products(&self) -> Result<Vec<Product>, ApiError>;
    /// One product by id.
    async fn product(&self, product_id: i64) -> Result<Product, ApiError>;
    /// Products sharing the category of `product_id`.
    async fn related_products(&self, product_id: i64) -> Result<Vec<Product>, ApiError>;
    /// Products matching a search query.
    async fn search_products(&self, query: &SearchQuery) -> Result<Vec<Product>, ApiError>;

    /// Exchange credentials for tokens and store them.
    async fn login(&self, request: &LoginRequest) -> Result<(), ApiError>;
    /// Create an account; does not sign in.
    async fn signup(&self, request: &SignupRequest) -> Result<(), ApiError>;
    /// Check the stored access token.
    async fn verify_session(&self) -> Result<(), ApiError>;
    /// Trade the stored refresh token for a new access token.
    async fn refresh_session(&self) -> Result<(), ApiError>;
    /// The account the stored tokens belong to.
    async fn current_user(&self) -> Result<User, ApiError>;
    /// Whether tokens from a previous login are stored.
    fn has_session(&self) -> bool;
    /// Forget stored tokens.
    fn clear_session(&self);

    /// Lines of the signed-in user's cart.
    async fn cart_items(&self) -> Result<Vec<CartItem>, ApiError>;
    /// Price totals of the signed-in user's cart.
    async fn cart_totals(&self) -> Result<CartTotals, ApiError>;
    /// Add one unit of a product.
    async fn add_cart_item(&self, product_id: i64) -> Result<(), ApiError>;
    /// Set the quantity of an existing line.
    async fn update_cart_item(&self, product_id: i64, count: u32) -> Result<(), ApiError>;
    /// Drop a line.
    async fn remove_cart_item(&self, product_id: i64) -> Result<(), ApiError>;
    /// Drop every line.
    async fn empty_cart(&self) -> Result<(), ApiError>;

    /// Saved products of the signed-in user.
    async fn wishlist_items(&self) -> Result<Vec<WishlistItem>, ApiError>;
    /// Number of saved products.
    async fn wishlist_total(&self) -> Result<u32, ApiError>;
    /// Save a product.
    async fn add_wishlist_item(&self, product_id: i64) -> Result<(), ApiError>;
    /// Unsave a product.
    async fn remove_wishlist_item(&self, product_id: i64) -> Result<(), ApiError>;

    /// The signed-in user's review of a product, if they wrote one.
    async fn review(&self, product_id: i64) -> Result<Option<Review>, ApiError>;
    /// Publish a first review of a product.
    async fn create_review(&self, product_id: i64, request: &ReviewRequest) -> Result<Review, ApiError>;
    /// Replace the user's review of a product.
    async fn update_review(&self, product_id: i64, request: &ReviewRequest) -> Result<Review, ApiError>;
    /// Withdraw the user's review of a product.
    async fn delete_review(&self, product_id: i64) -> Result<(), ApiError>;

    /// Orders placed by the signed-in user.
    async fn orders(&self) -> Result<Vec<Order>, ApiError>;
    /// One order with its lines.
    async fn order(&self, transaction_id: &str) -> Result<Order, ApiError>;

    /// Shipping details of the signed-in user.
    async fn profile(&self) -> Result<UserProfile, ApiError>;
    /// Replace the shipping details, returning what was stored.
    async fn update_profile(&self, profile: &UserProfile) -> Result<UserProfile, ApiError>;
}

/// HTTP client for the storefront backend.
#[derive(Clone, Debug)]
pub struct StorefrontClient {
    base_url: String,
    client: Client,
    tokens: Rc<RefCell<Option<TokenPair>>>,
    persist: bool,
}

impl StorefrontClient {
    /// Create a client that keeps its tokens in local storage across reloads.
    pub fn new(base_url: &str) -> Self {
        let client = Self::build(base_url, true);
        if let Some(tokens) = load_tokens() {
            client.store_tokens(Some(tokens));
        }
        client
    }

    /// Create a client whose tokens live only in memory.
    #[cfg(test)]
    pub fn in_memory(base_url: &str) -> Self {
        Self::build(base_url, false)
    }

    fn build(base_url: &str, persist: bool) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
            tokens: Rc::new(RefCell::new(None)),
            persist,
        }
    }

    /// The client every component shares, created on first use.
    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| {
            cell.get_or_init(|| Self::new(&FrontendConfig::default().api_url))
                .clone()
        })
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn tokens(&self) -> Option<TokenPair> {
        self.tokens.borrow().clone()
    }

    fn store_tokens(&self, tokens: Option<TokenPair>) {
        if self.persist {
            persist_tokens(tokens.as_ref());
        }
        self.tokens.replace(tokens);
    }

    fn authorize(request: RequestBuilder, access: &str) -> RequestBuilder {
        request.header(AUTHORIZATION, format!("{AUTH_SCHEME} {access}"))
    }

    /// Send an authenticated request, refreshing the access token once when
    /// the backend rejects it.
    async fn send_authorized<F>(&self, build: F) -> Result<Response, ApiError>
    where
        F: Fn() -> RequestBuilder,
    {
        let access = self.tokens().ok_or(ApiError::MissingSession)?.access;
        let response = Self::authorize(build(), &access).send().await?;
        if response.status() != StatusCode::UNAUTHORIZED {
            return Ok(response);
        }
        drop(response);
        self.refresh_session().await?;
        let access = self.tokens().ok_or(ApiError::MissingSession)?.access;
        Ok(Self::authorize(build(), &access).send().await?)
    }
}

#[async_trait(?Send)]
impl StorefrontApi for StorefrontClient {
    async fn categories(&self) -> Result<Vec<Category>, ApiError> {
        let url = self.api_url("api/category/categories");
        let response = self.client.get(url).send().await?;
        let body: CategoriesResponse = decode(response).await?;
        Ok(body.categories)
    }

    async fn products(&self) -> Result<Vec<Product>, ApiError> {
        let url = self.api_url("api/product/get-products");
        let response = self.client.get(url).send().await?;
        let body: ProductsResponse = decode(response).await?;
        Ok(body.products)
    }

    async fn product(&self, product_id: i64) -> Result<Product, ApiError> {
        let url = self.api_url(&format!("api/product/product/{product_id}"));
        let response = self.client.get(url).send().await?;
        let body: ProductDetailResponse = decode(response).await?;
        Ok(body.product)
    }

    async fn related_products(&self, product_id: i64) -> Result<Vec<Product>, ApiError> {
        let url = self.api_url(&format!("api/product/related/{product_id}"));
        let response = self.client.get(url).send().await?;
        let body: RelatedProductsResponse = decode(response).await?;
        Ok(body.related_products)
    }

    async fn search_products(&self, query: &SearchQuery) -> Result<Vec<Product>, ApiError> {
        let url = self.api_url("api/product/search");
        let response = self.client.post(url).json(query).send().await?;
        let body: SearchResponse = decode(response).await?;
        Ok(body.search_products)
    }

    async fn login(&self, request: &LoginRequest) -> Result<(), ApiError> {
        let url = self.api_url("auth/jwt/create/");
        let response = self.client.post(url).json(request).send().await?;
        let tokens: TokenPair = decode(response).await?;
        self.store_tokens(Some(tokens));
        Ok(())
    }

    async fn signup(&self, request: &SignupRequest) -> Result<(), ApiError> {
        let url = self.api_url("auth/users/");
        let response = self.client.post(url).json(request).send().await?;
        check(response).await?;
        Ok(())
    }

    async fn verify_session(&self) -> Result<(), ApiError> {
        let access = self.tokens().ok_or(ApiError::MissingSession)?.access;
        let url = self.api_url("auth/jwt/verify/");
        let response = self
            .client
            .post(url)
            .json(&VerifyRequest { token: access })
            .send()
            .await?;
        check(response).await?;
        Ok(())
    }

    async fn refresh_session(&self) -> Result<(), ApiError> {
        let current = self.tokens().ok_or(ApiError::MissingSession)?;
        let url = self.api_url("auth/jwt/refresh/");
        let response = self
            .client
            .post(url)
            .json(&RefreshRequest {
                refresh: current.refresh.clone(),
            })
            .send()
            .await?;
        let body: RefreshResponse = match decode(response).await {
            Ok(body) => body,
            Err(err) => {
                if err.is_unauthorized() {
                    self.store_tokens(None);
                }
                return Err(err);
            }
        };
        self.store_tokens(Some(TokenPair {
            access: body.access,
            refresh: body.refresh.unwrap_or(current.refresh),
        }));
        Ok(())
    }

    async fn current_user(&self) -> Result<User, ApiError> {
        let url = self.api_url("auth/users/me/");
        let response = self.send_authorized(|| self.client.get(url.clone())).await?;
        decode(response).await
    }

    fn has_session(&self) -> bool {
        self.tokens().is_some()
    }

    fn clear_session(&self) {
        self.store_tokens(None);
    }

    async fn cart_items(&self) -> Result<Vec<CartItem>, ApiError> {
        let url = self.api_url("api/cart/cart-items");
        let response = self.send_authorized(|| self.client.get(url.clone())).await?;
        let body: CartItemsResponse = decode(response).await?;
        Ok(body.cart)
    }

    async fn cart_totals(&self) -> Result<CartTotals, ApiError> {
        let url = self.api_url("api/cart/get-total");
        let response = self.send_authorized(|| self.client.get(url.clone())).await?;
        decode(response).await
    }

    async fn add_cart_item(&self, product_id: i64) -> Result<(), ApiError> {
        let url = self.api_url("api/cart/add-item");
        let payload = AddItemRequest { product_id };
        let response = self
            .send_authorized(|| self.client.post(url.clone()).json(&payload))
            .await?;
        check(response).await?;
        Ok(())
    }

    async fn update_cart_item(&self, product_id: i64, count: u32) -> Result<(), ApiError> {
        let url = self.api_url("api/cart/update-item");
        let payload = UpdateItemRequest { product_id, count };
        let response = self
            .send_authorized(|| self.client.put(url.clone()).json(&payload))
            .await?;
        check(response).await?;
        Ok(())
    }

    async fn remove_cart_item(&self, product_id: i64) -> Result<(), ApiError> {
        let url = self.api_url("api/cart/remove-item");
        let payload = RemoveItemRequest { product_id };
        let response = self
            .send_authorized(|| self.client.delete(url.clone()).json(&payload))
            .await?;
        check(response).await?;
        Ok(())
    }

    async fn empty_cart(&self) -> Result<(), ApiError> {
        let url = self.api_url("api/cart/empty");
        let response = self
            .send_authorized(|| self.client.delete(url.clone()))
            .await?;
        check(response).await?;
        Ok(())
    }

    async fn wishlist_items(&self) -> Result<Vec<WishlistItem>, ApiError> {
        let url = self.api_url("api/wishlist/wishlist-items");
        let response = self.send_authorized(|| self.client.get(url.clone())).await?;
        let body: WishlistItemsResponse = decode(response).await?;
        Ok(body.wishlist)
    }

    async fn wishlist_total(&self) -> Result<u32, ApiError> {
        let url = self.api_url("api/wishlist/get-item-total");
        let response = self.send_authorized(|| self.client.get(url.clone())).await?;
        let body: WishlistTotal = decode(response).await?;
        Ok(body.total_items)
    }

    async fn add_wishlist_item(&self, product_id: i64) -> Result<(), ApiError> {
        let url = self.api_url("api/wishlist/add-item");
        let payload = AddItemRequest { product_id };
        let response = self
            .send_authorized(|| self.client.post(url.clone()).json(&payload))
            .await?;
        check(response).await?;
        Ok(())
    }

    async fn remove_wishlist_item(&self, product_id: i64) -> Result<(), ApiError> {
        let url = self.api_url("api/wishlist/remove-item");
        let payload = RemoveItemRequest { product_id };
        let response = self
            .send_authorized(|| self.client.delete(url.clone()).json(&payload))
            .await?;
        check(response).await?;
        Ok(())
    }

    async fn review(&self, product_id: i64) -> Result<Option<Review>, ApiError> {
        let url = self.api_url(&format!("api/reviews/get-review/{product_id}"));
        let response = self.send_authorized(|| self.client.get(url.clone())).await?;
        let body: ReviewResponse = decode(response).await?;
        Ok(body.review)
    }

    async fn create_review(&self, product_id: i64, request: &ReviewRequest) -> Result<Review, ApiError> {
        let url = self.api_url(&format!("api/reviews/create-review/{product_id}"));
        let response = self
            .send_authorized(|| self.client.post(url.clone()).json(request))
            .await?;
        saved_review(response).await
    }

    async fn update_review(&self, product_id: i64, request: &ReviewRequest) -> Result<Review, ApiError> {
        let url = self.api_url(&format!("api/reviews/update-review/{product_id}"));
        let response = self
            .send_authorized(|| self.client.put(url.clone()).json(request))
            .await?;
        saved_review(response).await
    }

    async fn delete_review(&self, product_id: i64) -> Result<(), ApiError> {
        let url = self.api_url(&format!("api/reviews/delete-review/{product_id}"));
        let response = self
            .send_authorized(|| self.client.delete(url.clone()))
            .await?;
        check(response).await?;
        Ok(())
    }

    async fn orders(&self) -> Result<Vec<Order>, ApiError> {
        let url = self.api_url("api/orders/get-orders");
        let response = self.send_authorized(|| self.client.get(url.clone())).await?;
        let body: OrdersResponse = decode(response).await?;
        Ok(body.orders)
    }

    async fn order(&self, transaction_id: &str) -> Result<Order, ApiError> {
        let url = self.api_url(&format!("api/orders/get-order/{transaction_id}"));
        let response = self.send_authorized(|| self.client.get(url.clone())).await?;
        let body: OrderDetailResponse = decode(response).await?;
        Ok(body.order)
    }

    async fn profile(&self) -> Result<UserProfile, ApiError> {
        let url = self.api_url("api/profile/user");
        let response = self.send_authorized(|| self.client.get(url.clone())).await?;
        let body: ProfileResponse = decode(response).await?;
        Ok(body.profile)
    }

    async fn update_profile(&self, profile: &UserProfile) -> Result<UserProfile, ApiError> {
        let url = self.api_url("api/profile/update");
        let response = self
            .send_authorized(|| self.client.put(url.clone()).json(profile))
            .await?;
        let body: ProfileResponse = decode(response).await?;
        Ok(body.profile)
    }
}

/// A create or update answer must carry the stored review.
async fn saved_review(response: Response) -> Result<Review, ApiError> {
    let status = response.status();
    let body: ReviewResponse = decode(response).await?;
    body.review.ok_or_else(|| ApiError::Status {
        status,
        message: "review was not saved".to_string(),
    })
}

/// Turn a non-success response into an [`ApiError`] carrying the backend's message.
async fn check(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.json::<ErrorResponse>().await.ok();
    let message = error_message(status, body.as_ref());
    if status == StatusCode::UNAUTHORIZED {
        Err(ApiError::Unauthorized(message))
    } else {
        Err(ApiError::Status { status, message })
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    Ok(check(response).await?.json().await?)
}

fn error_message(status: StatusCode, body: Option<&ErrorResponse>) -> String {
    body.and_then(ErrorResponse::message).unwrap_or_else(|| {
        status
            .canonical_reason()
            .map_or_else(|| format!("Request failed: {status}"), str::to_string)
    })
}

fn load_tokens() -> Option<TokenPair> {
    let access: String = LocalStorage::get(ACCESS_KEY).ok()?;
    let refresh: String = LocalStorage::get(REFRESH_KEY).ok()?;
    Some(TokenPair { access, refresh })
}

fn persist_tokens(tokens: Option<&TokenPair>) {
    match tokens {
        Some(tokens) => {
            let stored = LocalStorage::set(ACCESS_KEY, &tokens.access)
                .and_then(|()| LocalStorage::set(REFRESH_KEY, &tokens.refresh));
            if let Err(err) = stored {
                log::warn!("unable to persist session tokens: {err}");
            }
        }
        None => {
            LocalStorage::delete(ACCESS_KEY);
            LocalStorage::delete(REFRESH_KEY);
        }
    }
}

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

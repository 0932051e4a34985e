use crate::components::private_route::PrivateRoute;
use crate::containers::layout::Layout;
use crate::pages::*;
use strum::EnumIter;
use yew::prelude::*;
use yew_router::prelude::*;

/// The storefront routes.
#[derive(Debug, Clone, PartialEq, Eq, Routable, EnumIter)]
pub enum Route {
    /// Landing page.
    #[at("/")]
    Home,
    /// Full product listing.
    #[at("/shop")]
    Shop,
    /// Product detail with related products and the user's review.
    #[at("/product/:product_id")]
    Product {
        /// Backend product id.
        product_id: i64,
    },
    /// Results of the last submitted search.
    #[at("/search")]
    Search,
    /// Cart lines and totals.
    #[at("/cart")]
    Cart,
    /// Sign-in form.
    #[at("/login")]
    Login,
    /// Account creation form.
    #[at("/signup")]
    Signup,
    /// Account overview: profile and order history.
    #[at("/dashboard")]
    Dashboard,
    /// One past order with its lines.
    #[at("/dashboard/order/:transaction_id")]
    Order {
        /// Payment transaction id identifying the order.
        transaction_id: String,
    },
    /// Saved products.
    #[at("/wishlist")]
    Wishlist,
    /// Anything unrecognized.
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Routes that require a signed-in user.
    pub fn is_protected(&self) -> bool {
        matches!(self, Self::Dashboard | Self::Order { .. } | Self::Wishlist)
    }
}

/// Switch function for the storefront routes.
pub fn switch(route: Route) -> Html {
    log::debug!("switching to route {route:?}");
    let page = match route.clone() {
        Route::Home => html! { <HomePage /> },
        Route::Shop => html! { <ShopPage /> },
        Route::Product { product_id } => html! { <ProductPage {product_id} /> },
        Route::Search => html! { <SearchPage /> },
        Route::Cart => html! { <CartPage /> },
        Route::Login => html! { <LoginPage /> },
        Route::Signup => html! { <SignupPage /> },
        Route::Dashboard => html! { <DashboardPage /> },
        Route::Order { transaction_id } => html! { <OrderPage {transaction_id} /> },
        Route::Wishlist => html! { <WishlistPage /> },
        Route::NotFound => html! { <ErrorPage /> },
    };
    let page = if route.is_protected() {
        html! { <PrivateRoute>{page}</PrivateRoute> }
    } else {
        page
    };

    html! {
        <Layout current_route={route}>
            {page}
        </Layout>
    }
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

//! Tests for the routing table
//!
//! Validates the paths the navigation shell and search composer rely on.

use super::Route;
use strum::IntoEnumIterator;
use test_case::test_case;
use yew_router::Routable;

#[test_case(Route::Home, "/" ; "home")]
#[test_case(Route::Shop, "/shop" ; "shop")]
#[test_case(Route::Search, "/search" ; "search")]
#[test_case(Route::Cart, "/cart" ; "cart")]
#[test_case(Route::Login, "/login" ; "login")]
#[test_case(Route::Signup, "/signup" ; "signup")]
#[test_case(Route::Dashboard, "/dashboard" ; "dashboard")]
#[test_case(Route::Wishlist, "/wishlist" ; "wishlist")]
fn logical_routes_have_fixed_paths(route: Route, path: &str) {
    assert_eq!(route.to_path(), path);
    assert_eq!(Route::recognize(path), Some(route));
}

#[test]
fn product_route_carries_its_id() {
    let route = Route::Product { product_id: 42 };
    assert_eq!(route.to_path(), "/product/42");
    assert_eq!(Route::recognize("/product/42"), Some(route));
}

#[test]
fn order_route_carries_its_transaction() {
    let route = Route::Order {
        transaction_id: "txn1234".to_string(),
    };
    assert_eq!(route.to_path(), "/dashboard/order/txn1234");
    assert_eq!(Route::recognize("/dashboard/order/txn1234"), Some(route));
}

#[test]
fn routes_compare_by_value() {
    let a = Route::Product { product_id: 3 };
    assert_eq!(a, Route::Product { product_id: 3 });
    assert_ne!(a, Route::Product { product_id: 4 });
}

#[test]
fn every_route_round_trips() {
    // Iteration fills path parameters with defaults; an empty transaction id
    // is not a routable segment.
    for route in Route::iter().filter(|route| !matches!(route, Route::Order { .. })) {
        let path = route.to_path();
        assert_eq!(Route::recognize(&path), Some(route.clone()), "path {path}");
    }
}

#[test]
fn not_found_route_is_declared() {
    assert_eq!(Route::not_found_route(), Some(Route::NotFound));
}

#[test]
fn account_routes_are_protected() {
    let protected: Vec<Route> = Route::iter().filter(Route::is_protected).collect();
    assert_eq!(
        protected,
        vec![
            Route::Dashboard,
            Route::Order {
                transaction_id: String::new()
            },
            Route::Wishlist,
        ]
    );
}

pub(crate) mod alert;
pub(crate) mod cart_badge;
pub(crate) mod language_selector;
pub(crate) mod language_selector_button;
pub(crate) mod loading;
pub(crate) mod private_route;
pub(crate) mod product_card;
pub(crate) mod profile_form;
pub(crate) mod review_form;
pub(crate) mod search_box;
pub(crate) mod user_dropdown;
pub(crate) mod wishlist_badge;
pub(crate) mod wishlist_button;

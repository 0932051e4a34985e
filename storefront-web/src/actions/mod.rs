//! Async actions.
//!
//! Each action talks to the backend through [`crate::api::StorefrontApi`]
//! and reports progress to the store only by dispatching reducer actions,
//! so components spawn them and never await in their handlers. Replies to
//! per-account requests are wrapped in
//! [`SessionScoped`](crate::models::app_state::SessionScoped) with the epoch
//! they were sent in.

use yewdux::Dispatch;

use crate::models::app_state::AppState;

pub mod account;
pub mod cart;
pub mod catalog;
pub mod products;
pub mod reviews;
pub mod search;
pub mod session;
pub mod wishlist;

fn signed_in(dispatch: &Dispatch<AppState>) -> bool {
    dispatch.get().session.is_authenticated
}

fn session_epoch(dispatch: &Dispatch<AppState>) -> u64 {
    dispatch.get().session.epoch
}

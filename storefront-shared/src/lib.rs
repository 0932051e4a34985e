#![cfg_attr(not(test), forbid(unsafe_code))]
#![deny(warnings, clippy::pedantic)]

//! Models exchanged with the storefront backend API.
//!
//! The backend speaks JSON; every type here mirrors one request or response
//! body so the web client never touches raw `serde_json::Value`s outside of
//! error parsing.

pub mod models;

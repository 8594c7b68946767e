//! Storefront
//!
//! Client-side storefront logic for a remote product catalog service: a typed
//! catalog client, the product list projection (filter and sort), headless
//! page models and the route table they navigate between.

pub mod catalog;
pub mod listing;
pub mod pages;
pub mod products;
pub mod routes;

//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod extract;
pub mod products;
pub mod users;

pub use products::{
    create as create_product, delete as delete_product, detail as get_product,
    list as list_products, patch as update_product,
};
pub use users::{delete as delete_user, detail as get_user};

//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities and repository ports.

pub mod toy_crud_service;
pub mod user_crud_service;

pub use toy_crud_service::ToyCrudService;
pub use user_crud_service::UserCrudService;

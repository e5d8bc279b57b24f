//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Aggregates of the toy store (toys, producers, users)
//! - `values`: Immutable value objects owned by those aggregates
//! - `ports`: Trait definitions for persistence

pub mod entities;
pub mod ports;
pub mod values;

//! SeaORM entities
//!
//! Row-level models of the `producers`, `toys` and `users` tables.
//! Domain conversions live in the PostgreSQL adapters.

pub mod producers;
pub mod toys;
pub mod users;

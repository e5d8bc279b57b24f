//! Domain entities
//!
//! Pure domain models representing the toy store aggregates.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod producer;
pub mod toy;
pub mod user;

pub use producer::{Producer, ProducerId, ProducerKind};
pub use toy::{Toy, ToyBuildError, ToyId};
pub use user::{User, UserId};

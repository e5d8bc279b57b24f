//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod repositories;

pub use repositories::{ProducerRepository, ToyRepository, UserRepository};
#[cfg(test)]
pub use repositories::{MockProducerRepository, MockToyRepository, MockUserRepository};

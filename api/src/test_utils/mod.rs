//! Test utilities
//!
//! Manual in-memory repositories and test fixtures for unit testing.
//!
//! The in-memory repositories behave like a real store (ids are assigned on
//! first save, `save` replaces by id) so services and the HTTP surface can be
//! exercised end to end. Failure injection uses the mockall mocks generated
//! for the port traits instead.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;

//! Value objects
//!
//! Nominal wrappers that give prices and demo images their own types.
//! They are immutable once constructed and compared by value.

pub mod image_demo;
pub mod won;

pub use image_demo::ImageDemo;
pub use won::Won;

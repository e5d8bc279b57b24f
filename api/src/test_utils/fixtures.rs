//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use crate::domain::entities::{Producer, ProducerId, Toy, ToyId, User, UserId};
use crate::domain::values::{ImageDemo, Won};

pub const TOY_ID: ToyId = ToyId(1);
pub const TOY_ID_NOT_EXISTING: ToyId = ToyId(10);
pub const PRODUCER_ID: ProducerId = ProducerId(1);
pub const USER_ID: UserId = UserId(1);
pub const USER_ID_NOT_EXISTING: UserId = UserId(10);

pub const PRODUCT_NAME: &str = "Test Product";
pub const PRODUCER_NAME: &str = "Test Toy Maker";
pub const PRICE: u64 = 15000;
pub const DEMO_URL: &str = "https://cdn.test/toys/test-product.png";

/// A stored toy producer
pub fn test_toy_producer() -> Producer {
    Producer::toy(PRODUCER_NAME).with_id(PRODUCER_ID)
}

/// A stored toy with id [`TOY_ID`]
pub fn test_toy() -> Toy {
    Toy::builder()
        .id(TOY_ID)
        .name(PRODUCT_NAME)
        .producer(test_toy_producer())
        .price(Won::new(PRICE))
        .demo(ImageDemo::new(DEMO_URL))
        .build()
        .unwrap()
}

/// The payload of a toy about to be created: no toy id, no producer id
pub fn test_toy_without_id() -> Toy {
    Toy::builder()
        .name(PRODUCT_NAME)
        .producer(Producer::toy(PRODUCER_NAME))
        .price(Won::new(PRICE))
        .demo(ImageDemo::new(DEMO_URL))
        .build()
        .unwrap()
}

/// A stored user with id [`USER_ID`]
pub fn test_user() -> User {
    User {
        id: Some(USER_ID),
        name: "Test User".to_string(),
        email: "tester@example.com".to_string(),
    }
}

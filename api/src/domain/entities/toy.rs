//! Toy domain entity
//!
//! A toy is the product sold by the store. It always carries its producer,
//! a price and a demo image; the id is assigned when it is first stored.

use thiserror::Error;

use crate::domain::entities::Producer;
use crate::domain::values::{ImageDemo, Won};

/// Store-assigned identifier for a toy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToyId(pub i64);

impl From<i64> for ToyId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ToyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A sellable toy
#[derive(Debug, Clone)]
pub struct Toy {
    id: Option<ToyId>,
    name: String,
    producer: Producer,
    price: Won,
    demo: ImageDemo,
}

impl Toy {
    pub fn builder() -> ToyBuilder {
        ToyBuilder::default()
    }

    /// The same toy under a different identity
    pub fn with_id(self, id: ToyId) -> Self {
        Self {
            id: Some(id),
            ..self
        }
    }

    /// The same toy attached to another producer
    pub fn with_producer(self, producer: Producer) -> Self {
        Self { producer, ..self }
    }

    pub fn id(&self) -> Option<ToyId> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn producer(&self) -> &Producer {
        &self.producer
    }

    pub fn price(&self) -> Won {
        self.price
    }

    pub fn demo(&self) -> &ImageDemo {
        &self.demo
    }
}

/// Stored toys are equal when their ids are; unsaved ones compare by content.
impl PartialEq for Toy {
    fn eq(&self, other: &Self) -> bool {
        match (self.id, other.id) {
            (Some(a), Some(b)) => a == b,
            _ => {
                self.id == other.id
                    && self.name == other.name
                    && self.producer == other.producer
                    && self.price == other.price
                    && self.demo == other.demo
            }
        }
    }
}

impl Eq for Toy {}

/// Returned by [`ToyBuilder::build`] when a required part is missing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToyBuildError {
    #[error("toy is missing its {0}")]
    MissingField(&'static str),
}

/// Step-by-step construction of a [`Toy`]
///
/// `id` is optional: leave it out for toys about to be created.
#[derive(Debug, Default)]
pub struct ToyBuilder {
    id: Option<ToyId>,
    name: Option<String>,
    producer: Option<Producer>,
    price: Option<Won>,
    demo: Option<ImageDemo>,
}

impl ToyBuilder {
    pub fn id(mut self, id: ToyId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn producer(mut self, producer: Producer) -> Self {
        self.producer = Some(producer);
        self
    }

    pub fn price(mut self, price: Won) -> Self {
        self.price = Some(price);
        self
    }

    pub fn demo(mut self, demo: ImageDemo) -> Self {
        self.demo = Some(demo);
        self
    }

    pub fn build(self) -> Result<Toy, ToyBuildError> {
        Ok(Toy {
            id: self.id,
            name: self.name.ok_or(ToyBuildError::MissingField("name"))?,
            producer: self
                .producer
                .ok_or(ToyBuildError::MissingField("producer"))?,
            price: self.price.ok_or(ToyBuildError::MissingField("price"))?,
            demo: self.demo.ok_or(ToyBuildError::MissingField("demo"))?,
        })
    }
}

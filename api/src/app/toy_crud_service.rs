//! Toy CRUD service
//!
//! Use cases for the product catalogue: listing, lookup, creation,
//! full-replacement update and deletion of toys.

use std::sync::Arc;

use crate::domain::entities::{Toy, ToyId};
use crate::domain::ports::{ProducerRepository, ToyRepository};
use crate::error::DomainError;

/// Service for managing toys and the producers attached to them
pub struct ToyCrudService<TR, PR>
where
    TR: ToyRepository + ?Sized,
    PR: ProducerRepository + ?Sized,
{
    toys: Arc<TR>,
    producers: Arc<PR>,
}

impl<TR, PR> ToyCrudService<TR, PR>
where
    TR: ToyRepository + ?Sized,
    PR: ProducerRepository + ?Sized,
{
    pub fn new(toys: Arc<TR>, producers: Arc<PR>) -> Self {
        Self { toys, producers }
    }

    /// List every toy
    pub async fn show_all(&self) -> Result<Vec<Toy>, DomainError> {
        self.toys.find_all().await
    }

    /// Get a single toy
    pub async fn show_by_id(&self, id: ToyId) -> Result<Toy, DomainError> {
        self.toys
            .find_by_id(id)
            .await?
            .ok_or(DomainError::ProductNotFound(id))
    }

    /// Create a toy
    ///
    /// The producer is stored first so the toy can point at its assigned id.
    /// A failed toy save leaves the producer behind.
    pub async fn create(&self, toy: Toy) -> Result<Toy, DomainError> {
        let producer = self.producers.save(toy.producer().clone()).await?;
        let created = self.toys.save(toy.with_producer(producer)).await?;

        tracing::info!(
            toy_id = ?created.id(),
            producer_id = ?created.producer().id(),
            "Created toy"
        );
        Ok(created)
    }

    /// Replace every field of an existing toy, keeping its id
    ///
    /// A payload producer without an id takes over the row of the toy's
    /// current producer, so identical updates keep the same producer id.
    /// That row is renamed only after the toy itself is stored.
    pub async fn update(&self, id: ToyId, toy: Toy) -> Result<Toy, DomainError> {
        let current = self
            .toys
            .find_by_id(id)
            .await?
            .ok_or(DomainError::ProductNotFound(id))?;

        let payload_producer = toy.producer().clone();
        let updated = match (payload_producer.id(), current.producer().id()) {
            (Some(_), _) => self.toys.save(toy.with_id(id)).await?,
            (None, Some(producer_id)) => {
                let producer = payload_producer.with_id(producer_id);
                let updated = self
                    .toys
                    .save(toy.with_id(id).with_producer(producer.clone()))
                    .await?;
                self.producers.save(producer).await?;
                updated
            }
            (None, None) => {
                let producer = self.producers.save(payload_producer).await?;
                self.toys
                    .save(toy.with_id(id).with_producer(producer))
                    .await?
            }
        };

        tracing::info!(toy_id = %id, "Updated toy");
        Ok(updated)
    }

    /// Delete a toy
    ///
    /// Its producer row is kept.
    pub async fn delete_by(&self, id: ToyId) -> Result<(), DomainError> {
        if !self.toys.exists_by_id(id).await? {
            return Err(DomainError::ProductNotFound(id));
        }

        self.toys.delete_by_id(id).await?;

        tracing::info!(toy_id = %id, "Deleted toy");
        Ok(())
    }
}

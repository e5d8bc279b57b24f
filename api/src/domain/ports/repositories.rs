//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).
//!
//! Every aggregate gets the same five operations. `save` inserts when the
//! entity has no id yet and replaces the stored row otherwise; an id with no
//! stored row is an error, never a fresh insert. `delete_by_id`
//! is a no-op for unknown ids; services check `exists_by_id` first when they
//! need to report a missing record.

use async_trait::async_trait;

use crate::domain::entities::{Producer, ProducerId, Toy, ToyId, User, UserId};
use crate::error::DomainError;

/// Repository for Toy entities
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ToyRepository: Send + Sync {
    /// List every stored toy
    async fn find_all(&self) -> Result<Vec<Toy>, DomainError>;

    /// Find a toy by ID
    async fn find_by_id(&self, id: ToyId) -> Result<Option<Toy>, DomainError>;

    /// Check whether a toy with this ID is stored
    async fn exists_by_id(&self, id: ToyId) -> Result<bool, DomainError>;

    /// Insert or replace a toy; its producer must already be stored
    async fn save(&self, toy: Toy) -> Result<Toy, DomainError>;

    /// Delete a toy by ID
    async fn delete_by_id(&self, id: ToyId) -> Result<(), DomainError>;
}

/// Repository for Producer entities
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProducerRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Producer>, DomainError>;

    async fn find_by_id(&self, id: ProducerId) -> Result<Option<Producer>, DomainError>;

    async fn exists_by_id(&self, id: ProducerId) -> Result<bool, DomainError>;

    /// Insert or replace a producer
    async fn save(&self, producer: Producer) -> Result<Producer, DomainError>;

    async fn delete_by_id(&self, id: ProducerId) -> Result<(), DomainError>;
}

/// Repository for User entities
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<User>, DomainError>;

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError>;

    async fn exists_by_id(&self, id: UserId) -> Result<bool, DomainError>;

    /// Insert or replace a user
    async fn save(&self, user: User) -> Result<User, DomainError>;

    async fn delete_by_id(&self, id: UserId) -> Result<(), DomainError>;
}

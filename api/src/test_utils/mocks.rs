//! In-memory implementations of the repository ports
//!
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::RwLock;

use crate::domain::entities::{Producer, ProducerId, Toy, ToyId, User, UserId};
use crate::domain::ports::{ProducerRepository, ToyRepository, UserRepository};
use crate::error::DomainError;

/// Rows keyed by id plus the next id to hand out
struct Table<K, V> {
    rows: BTreeMap<K, V>,
    next_id: i64,
}

impl<K, V> Default for Table<K, V> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl<K: Ord, V> Table<K, V> {
    /// Claim an id for a new row
    fn allocate(&mut self) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Store a row under an explicit id, keeping later allocations above it
    fn put(&mut self, raw_id: i64, key: K, value: V) {
        self.next_id = self.next_id.max(raw_id + 1);
        self.rows.insert(key, value);
    }
}

// ============================================================================
// In-Memory Toy Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryToyRepository {
    toys: RwLock<Table<ToyId, Toy>>,
}

impl InMemoryToyRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a stored toy for testing
    pub fn with_toy(self, toy: Toy) -> Self {
        {
            let id = toy.id().expect("seeded toys need an id");
            let mut toys = self.toys.write().unwrap();
            toys.put(id.0, id, toy);
        }
        self
    }
}

#[async_trait]
impl ToyRepository for InMemoryToyRepository {
    async fn find_all(&self) -> Result<Vec<Toy>, DomainError> {
        let toys = self.toys.read().unwrap();
        Ok(toys.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: ToyId) -> Result<Option<Toy>, DomainError> {
        let toys = self.toys.read().unwrap();
        Ok(toys.rows.get(&id).cloned())
    }

    async fn exists_by_id(&self, id: ToyId) -> Result<bool, DomainError> {
        let toys = self.toys.read().unwrap();
        Ok(toys.rows.contains_key(&id))
    }

    async fn save(&self, toy: Toy) -> Result<Toy, DomainError> {
        let mut toys = self.toys.write().unwrap();
        let id = match toy.id() {
            Some(id) if toys.rows.contains_key(&id) => id,
            Some(id) => return Err(DomainError::ProductNotFound(id)),
            None => ToyId(toys.allocate()),
        };
        let stored = toy.with_id(id);
        toys.put(id.0, id, stored.clone());
        Ok(stored)
    }

    async fn delete_by_id(&self, id: ToyId) -> Result<(), DomainError> {
        let mut toys = self.toys.write().unwrap();
        toys.rows.remove(&id);
        Ok(())
    }
}

// ============================================================================
// In-Memory Producer Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryProducerRepository {
    producers: RwLock<Table<ProducerId, Producer>>,
}

impl InMemoryProducerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a stored producer for testing
    pub fn with_producer(self, producer: Producer) -> Self {
        {
            let id = producer.id().expect("seeded producers need an id");
            let mut producers = self.producers.write().unwrap();
            producers.put(id.0, id, producer);
        }
        self
    }
}

#[async_trait]
impl ProducerRepository for InMemoryProducerRepository {
    async fn find_all(&self) -> Result<Vec<Producer>, DomainError> {
        let producers = self.producers.read().unwrap();
        Ok(producers.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: ProducerId) -> Result<Option<Producer>, DomainError> {
        let producers = self.producers.read().unwrap();
        Ok(producers.rows.get(&id).cloned())
    }

    async fn exists_by_id(&self, id: ProducerId) -> Result<bool, DomainError> {
        let producers = self.producers.read().unwrap();
        Ok(producers.rows.contains_key(&id))
    }

    async fn save(&self, producer: Producer) -> Result<Producer, DomainError> {
        let mut producers = self.producers.write().unwrap();
        let id = match producer.id() {
            Some(id) if producers.rows.contains_key(&id) => id,
            Some(id) => return Err(DomainError::Database(format!("producer {} is not stored", id))),
            None => ProducerId(producers.allocate()),
        };
        let stored = producer.with_id(id);
        producers.put(id.0, id, stored.clone());
        Ok(stored)
    }

    async fn delete_by_id(&self, id: ProducerId) -> Result<(), DomainError> {
        let mut producers = self.producers.write().unwrap();
        producers.rows.remove(&id);
        Ok(())
    }
}

// ============================================================================
// In-Memory User Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Table<UserId, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a stored user for testing
    pub fn with_user(self, user: User) -> Self {
        {
            let id = user.id.expect("seeded users need an id");
            let mut users = self.users.write().unwrap();
            users.put(id.0, id, user);
        }
        self
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, DomainError> {
        let users = self.users.read().unwrap();
        Ok(users.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError> {
        let users = self.users.read().unwrap();
        Ok(users.rows.get(&id).cloned())
    }

    async fn exists_by_id(&self, id: UserId) -> Result<bool, DomainError> {
        let users = self.users.read().unwrap();
        Ok(users.rows.contains_key(&id))
    }

    async fn save(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().unwrap();
        let id = match user.id {
            Some(id) if users.rows.contains_key(&id) => id,
            Some(id) => return Err(DomainError::UserNotFound(id)),
            None => UserId(users.allocate()),
        };
        let stored = User {
            id: Some(id),
            ..user
        };
        users.put(id.0, id, stored.clone());
        Ok(stored)
    }

    async fn delete_by_id(&self, id: UserId) -> Result<(), DomainError> {
        let mut users = self.users.write().unwrap();
        users.rows.remove(&id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{test_toy, test_toy_without_id, TOY_ID};

    #[tokio::test]
    async fn save_assigns_ids_after_seeded_rows() {
        let repo = InMemoryToyRepository::new().with_toy(test_toy());

        let saved = repo.save(test_toy_without_id()).await.unwrap();

        assert_eq!(saved.id(), Some(ToyId(TOY_ID.0 + 1)));
        assert_eq!(repo.find_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn save_with_id_replaces_row() {
        let repo = InMemoryToyRepository::new().with_toy(test_toy());
        let replacement = test_toy_without_id().with_id(TOY_ID);

        repo.save(replacement).await.unwrap();

        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn save_with_unknown_id_is_rejected() {
        let repo = InMemoryToyRepository::new().with_toy(test_toy());

        let result = repo.save(test_toy_without_id().with_id(ToyId(42))).await;

        assert!(matches!(result, Err(DomainError::ProductNotFound(ToyId(42)))));
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
        let next = repo.save(test_toy_without_id()).await.unwrap();
        assert_eq!(next.id(), Some(ToyId(TOY_ID.0 + 1)));
    }

    #[tokio::test]
    async fn delete_unknown_id_is_a_no_op() {
        let repo = InMemoryUserRepository::new();
        assert!(repo.delete_by_id(UserId(99)).await.is_ok());
    }
}

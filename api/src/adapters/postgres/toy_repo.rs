//! PostgreSQL adapter for ToyRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryOrder, Set,
};

use crate::domain::entities::{Producer, Toy, ToyId};
use crate::domain::ports::ToyRepository;
use crate::domain::values::{ImageDemo, Won};
use crate::entity::{producers, toys};
use crate::error::DomainError;

/// PostgreSQL implementation of ToyRepository
///
/// Toys are read together with their producer row.
pub struct PostgresToyRepository {
    db: DatabaseConnection,
}

impl PostgresToyRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ToyRepository for PostgresToyRepository {
    async fn find_all(&self) -> Result<Vec<Toy>, DomainError> {
        let results = toys::Entity::find()
            .find_also_related(producers::Entity)
            .order_by_asc(toys::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        results.into_iter().map(toy_from_row).collect()
    }

    async fn find_by_id(&self, id: ToyId) -> Result<Option<Toy>, DomainError> {
        let result = toys::Entity::find_by_id(id.0)
            .find_also_related(producers::Entity)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        result.map(toy_from_row).transpose()
    }

    async fn exists_by_id(&self, id: ToyId) -> Result<bool, DomainError> {
        let count = toys::Entity::find_by_id(id.0)
            .count(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(count > 0)
    }

    async fn save(&self, toy: Toy) -> Result<Toy, DomainError> {
        let producer_id = toy.producer().id().ok_or_else(|| {
            DomainError::Database("toy producer must be stored before the toy".to_string())
        })?;
        let price = i64::try_from(toy.price().value()).map_err(|_| {
            DomainError::Database(format!("price {} exceeds the storable range", toy.price()))
        })?;

        match toy.id() {
            None => {
                let model = toys::ActiveModel {
                    name: Set(toy.name().to_string()),
                    producer_id: Set(producer_id.0),
                    price: Set(price),
                    demo_url: Set(toy.demo().url().to_string()),
                    ..Default::default()
                };

                let result = model
                    .insert(&self.db)
                    .await
                    .map_err(|e| DomainError::Database(e.to_string()))?;

                Ok(toy.with_id(ToyId(result.id)))
            }
            Some(id) => {
                let model = toys::ActiveModel {
                    id: Set(id.0),
                    name: Set(toy.name().to_string()),
                    producer_id: Set(producer_id.0),
                    price: Set(price),
                    demo_url: Set(toy.demo().url().to_string()),
                };

                // Full replacement of every column of a row that must still exist
                model.update(&self.db).await.map_err(|e| match e {
                    DbErr::RecordNotUpdated => DomainError::ProductNotFound(id),
                    e => DomainError::Database(e.to_string()),
                })?;

                Ok(toy)
            }
        }
    }

    async fn delete_by_id(&self, id: ToyId) -> Result<(), DomainError> {
        toys::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(())
    }
}

/// Convert a toy row and its joined producer row to a domain entity
fn toy_from_row(
    (toy, producer): (toys::Model, Option<producers::Model>),
) -> Result<Toy, DomainError> {
    let producer = producer.ok_or_else(|| {
        DomainError::Database(format!(
            "toy {} references missing producer {}",
            toy.id, toy.producer_id
        ))
    })?;
    let price = Won::try_from(toy.price).map_err(|e| DomainError::Database(e.to_string()))?;

    Toy::builder()
        .id(ToyId(toy.id))
        .name(toy.name)
        .producer(Producer::try_from(producer)?)
        .price(price)
        .demo(ImageDemo::new(toy.demo_url))
        .build()
        .map_err(|e| DomainError::Database(e.to_string()))
}

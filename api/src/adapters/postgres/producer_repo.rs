//! PostgreSQL adapter for ProducerRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryOrder, Set,
};

use crate::domain::entities::{Producer, ProducerId};
use crate::domain::ports::ProducerRepository;
use crate::entity::producers;
use crate::error::DomainError;

/// PostgreSQL implementation of ProducerRepository
pub struct PostgresProducerRepository {
    db: DatabaseConnection,
}

impl PostgresProducerRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProducerRepository for PostgresProducerRepository {
    async fn find_all(&self) -> Result<Vec<Producer>, DomainError> {
        let results = producers::Entity::find()
            .order_by_asc(producers::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        results.into_iter().map(Producer::try_from).collect()
    }

    async fn find_by_id(&self, id: ProducerId) -> Result<Option<Producer>, DomainError> {
        let result = producers::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        result.map(Producer::try_from).transpose()
    }

    async fn exists_by_id(&self, id: ProducerId) -> Result<bool, DomainError> {
        let count = producers::Entity::find_by_id(id.0)
            .count(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(count > 0)
    }

    async fn save(&self, producer: Producer) -> Result<Producer, DomainError> {
        match producer.id() {
            None => {
                let model = producers::ActiveModel {
                    name: Set(producer.name().to_string()),
                    kind: Set(producer.kind().to_string()),
                    ..Default::default()
                };

                let result = model
                    .insert(&self.db)
                    .await
                    .map_err(|e| DomainError::Database(e.to_string()))?;

                Producer::try_from(result)
            }
            Some(id) => {
                let model = producers::ActiveModel {
                    id: Set(id.0),
                    name: Set(producer.name().to_string()),
                    kind: Set(producer.kind().to_string()),
                };

                model.update(&self.db).await.map_err(|e| match e {
                    DbErr::RecordNotUpdated => {
                        DomainError::Database(format!("producer {} is not stored", id))
                    }
                    e => DomainError::Database(e.to_string()),
                })?;

                Ok(producer)
            }
        }
    }

    async fn delete_by_id(&self, id: ProducerId) -> Result<(), DomainError> {
        producers::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(())
    }
}

/// Convert SeaORM model to domain entity
impl TryFrom<producers::Model> for Producer {
    type Error = DomainError;

    fn try_from(model: producers::Model) -> Result<Self, Self::Error> {
        let kind = model.kind.parse().map_err(DomainError::Database)?;
        Ok(Producer::new(model.name, kind).with_id(ProducerId(model.id)))
    }
}

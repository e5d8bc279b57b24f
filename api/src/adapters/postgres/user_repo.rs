//! PostgreSQL adapter for UserRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryOrder, Set,
};

use crate::domain::entities::{User, UserId};
use crate::domain::ports::UserRepository;
use crate::entity::users;
use crate::error::DomainError;

/// PostgreSQL implementation of UserRepository
pub struct PostgresUserRepository {
    db: DatabaseConnection,
}

impl PostgresUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, DomainError> {
        let results = users::Entity::find()
            .order_by_asc(users::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError> {
        let result = users::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn exists_by_id(&self, id: UserId) -> Result<bool, DomainError> {
        let count = users::Entity::find_by_id(id.0)
            .count(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(count > 0)
    }

    async fn save(&self, user: User) -> Result<User, DomainError> {
        match user.id {
            None => {
                let model = users::ActiveModel {
                    name: Set(user.name),
                    email: Set(user.email),
                    ..Default::default()
                };

                let result = model
                    .insert(&self.db)
                    .await
                    .map_err(|e| DomainError::Database(e.to_string()))?;

                Ok(result.into())
            }
            Some(id) => {
                let model = users::ActiveModel {
                    id: Set(id.0),
                    name: Set(user.name),
                    email: Set(user.email),
                };

                let result = model.update(&self.db).await.map_err(|e| match e {
                    DbErr::RecordNotUpdated => DomainError::UserNotFound(id),
                    e => DomainError::Database(e.to_string()),
                })?;

                Ok(result.into())
            }
        }
    }

    async fn delete_by_id(&self, id: UserId) -> Result<(), DomainError> {
        users::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(())
    }
}

/// Convert SeaORM model to domain entity
impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        User {
            id: Some(UserId(model.id)),
            name: model.name,
            email: model.email,
        }
    }
}

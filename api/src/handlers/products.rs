//! Product handlers
//!
//! CRUD endpoints for toys under `/products`.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{Producer, Toy, ToyId};
use crate::domain::values::{ImageDemo, Won};
use crate::error::AppError;
use crate::handlers::extract::{not_blank, ValidatedJson};
use crate::AppState;

/// Request body for creating or replacing a toy
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ToyRequestData {
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    /// Price in won, bounded by the BIGINT `toys.price` column
    #[validate(range(
        max = 9223372036854775807u64,
        message = "must not exceed 9223372036854775807"
    ))]
    pub price: u64,
    /// Name of the producer
    #[validate(custom(function = "not_blank"))]
    pub maker: String,
    /// Demo image URL
    pub url: String,
}

impl ToyRequestData {
    /// Build the toy payload handed to the service
    pub fn into_toy(self) -> Result<Toy, AppError> {
        let toy = Toy::builder()
            .name(self.name)
            .producer(Producer::toy(self.maker))
            .price(Won::new(self.price))
            .demo(ImageDemo::new(self.url))
            .build()?;
        Ok(toy)
    }
}

/// Producer as embedded in a toy response
#[derive(Debug, Serialize, Deserialize)]
pub struct ProducerResponseData {
    pub id: Option<i64>,
    pub name: String,
}

/// Response body for a toy
#[derive(Debug, Serialize, Deserialize)]
pub struct ToyResponseData {
    pub id: Option<i64>,
    pub name: String,
    pub producer: ProducerResponseData,
    pub price: Won,
    pub demo: ImageDemo,
}

impl From<Toy> for ToyResponseData {
    fn from(toy: Toy) -> Self {
        Self {
            id: toy.id().map(|id| id.0),
            name: toy.name().to_string(),
            producer: ProducerResponseData {
                id: toy.producer().id().map(|id| id.0),
                name: toy.producer().name().to_string(),
            },
            price: toy.price(),
            demo: toy.demo().clone(),
        }
    }
}

/// GET /products
///
/// List all toys.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<ToyResponseData>>, AppError> {
    let toys = state.toy_service.show_all().await?;

    Ok(Json(toys.into_iter().map(ToyResponseData::from).collect()))
}

/// GET /products/:id
///
/// Get a single toy.
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ToyResponseData>, AppError> {
    let toy = state.toy_service.show_by_id(ToyId(id)).await?;

    Ok(Json(toy.into()))
}

/// POST /products
///
/// Create a toy along with its producer.
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<ToyRequestData>,
) -> Result<(StatusCode, Json<ToyResponseData>), AppError> {
    let toy = state.toy_service.create(request.into_toy()?).await?;

    Ok((StatusCode::CREATED, Json(toy.into())))
}

/// PATCH /products/:id
///
/// Replace every field of a toy.
pub async fn patch(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(request): ValidatedJson<ToyRequestData>,
) -> Result<Json<ToyResponseData>, AppError> {
    let toy = state
        .toy_service
        .update(ToyId(id), request.into_toy()?)
        .await?;

    Ok(Json(toy.into()))
}

/// DELETE /products/:id
///
/// Delete a toy.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.toy_service.delete_by(ToyId(id)).await?;

    Ok(StatusCode::NO_CONTENT)
}

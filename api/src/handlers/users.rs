//! User handlers
//!
//! Endpoints for user lookup and deletion under `/users`.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{User, UserId};
use crate::error::AppError;
use crate::AppState;

/// Detail read shape of a user
#[derive(Debug, Serialize, Deserialize)]
pub struct UserResponseData {
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
}

impl From<User> for UserResponseData {
    fn from(user: User) -> Self {
        Self {
            id: user.id.map(|id| id.0),
            name: user.name,
            email: user.email,
        }
    }
}

/// GET /users/:id
///
/// Get a single user.
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<UserResponseData>, AppError> {
    let user = state.user_service.show_by_id(UserId(id)).await?;

    Ok(Json(user.into()))
}

/// DELETE /users/:id
///
/// Delete a user.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.user_service.delete_by(UserId(id)).await?;

    Ok(StatusCode::NO_CONTENT)
}

//! User directory handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use roster_api_models::{NewUser, ProblemInvalidParam, UserCreated, UserRecord};
use tracing::{error, info, warn};

use crate::http::errors::ApiError;
use crate::state::ApiState;
use crate::store::StoreError;

pub(crate) async fn list_users(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<UserRecord>>, ApiError> {
    state.users.list().await.map(Json).map_err(storage_failure)
}

pub(crate) async fn create_user(
    State(state): State<Arc<ApiState>>,
    payload: Result<Json<NewUser>, JsonRejection>,
) -> Result<(StatusCode, Json<UserCreated>), ApiError> {
    let Json(user) = payload.map_err(|rejection| {
        warn!(error = %rejection.body_text(), "rejected malformed user payload");
        ApiError::bad_request(rejection.body_text())
    })?;

    let invalid = blank_fields(&user);
    if !invalid.is_empty() {
        warn!(fields = invalid.len(), "rejected user payload with blank fields");
        return Err(
            ApiError::bad_request("user fields must not be blank").with_invalid_params(invalid),
        );
    }

    match state.users.insert(user).await {
        Ok(record) => {
            info!(
                user_id = record.id.unwrap_or_default(),
                username = %record.username,
                "user created"
            );
            Ok((StatusCode::CREATED, Json(UserCreated::default())))
        }
        Err(err @ StoreError::DuplicateUsername { .. }) => {
            warn!(error = %err, "rejected duplicate username");
            Err(ApiError::conflict(err.to_string()))
        }
        Err(err) => Err(storage_failure(err)),
    }
}

fn storage_failure(err: StoreError) -> ApiError {
    match &err {
        StoreError::QueryFailed { operation, source } => {
            error!(operation = %operation, error = %source, "user storage failed");
        }
        StoreError::DuplicateUsername { .. } => {
            error!(error = %err, "unexpected storage error");
        }
    }
    ApiError::internal(err.to_string())
}

fn blank_fields(user: &NewUser) -> Vec<ProblemInvalidParam> {
    [("/username", &user.username), ("/email", &user.email)]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(pointer, _)| ProblemInvalidParam {
            pointer: pointer.to_string(),
            message: "must not be blank".to_string(),
        })
        .collect()
}

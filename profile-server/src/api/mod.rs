//! Profile REST endpoints.
//!
//! Failure statuses mirror the mobile client's expectations: a failed lookup
//! is 404, any failed write (including an unknown id) is 400.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use shared_types::{
    MessageBody, Profile, ProfileEnvelope, ProfileFields, MSG_LIST_FAILED, MSG_PROFILE_CREATED,
    MSG_PROFILE_DELETED, MSG_PROFILE_UPDATED,
};
use tracing::{error, info, warn};

use crate::error::ApiFailure;
use crate::AppState;

/// GET /profiles: every profile, oldest first
pub async fn list_profiles(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Profile>>, ApiFailure> {
    match state.store.list().await {
        Ok(profiles) => Ok(Json(profiles)),
        Err(e) => {
            error!("list profiles: {e}");
            Err(ApiFailure::new(StatusCode::INTERNAL_SERVER_ERROR, MSG_LIST_FAILED))
        }
    }
}

/// GET /profile/:id
pub async fn get_profile(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Profile>, ApiFailure> {
    state.store.get(&id).await.map(Json).map_err(|e| {
        warn!(id = %id, "get profile: {e}");
        ApiFailure::from_profile_error(StatusCode::NOT_FOUND, e)
    })
}

/// POST /profile: create, the store assigns the id
pub async fn create_profile(
    State(state): State<Arc<AppState>>,
    body: Result<Json<ProfileFields>, JsonRejection>,
) -> Result<impl IntoResponse, ApiFailure> {
    let Json(fields) = body.map_err(reject_body)?;
    match state.store.create(fields).await {
        Ok(profile) => {
            info!(id = %profile.id, "profile created");
            Ok((
                StatusCode::CREATED,
                Json(ProfileEnvelope {
                    message: MSG_PROFILE_CREATED.to_string(),
                    profile,
                }),
            ))
        }
        Err(e) => {
            warn!("create profile: {e}");
            Err(ApiFailure::from_profile_error(StatusCode::BAD_REQUEST, e))
        }
    }
}

/// PUT /profile/:id: replace the members present in the body
pub async fn update_profile(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    body: Result<Json<ProfileFields>, JsonRejection>,
) -> Result<Json<ProfileEnvelope>, ApiFailure> {
    let Json(fields) = body.map_err(reject_body)?;
    match state.store.update(&id, fields).await {
        Ok(profile) => {
            info!(id = %id, "profile updated");
            Ok(Json(ProfileEnvelope {
                message: MSG_PROFILE_UPDATED.to_string(),
                profile,
            }))
        }
        Err(e) => {
            warn!(id = %id, "update profile: {e}");
            Err(ApiFailure::from_profile_error(StatusCode::BAD_REQUEST, e))
        }
    }
}

/// DELETE /profile/:id
pub async fn delete_profile(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<MessageBody>, ApiFailure> {
    match state.store.delete(&id).await {
        Ok(()) => {
            info!(id = %id, "profile deleted");
            Ok(Json(MessageBody {
                message: MSG_PROFILE_DELETED.to_string(),
            }))
        }
        Err(e) => {
            warn!(id = %id, "delete profile: {e}");
            Err(ApiFailure::from_profile_error(StatusCode::BAD_REQUEST, e))
        }
    }
}

fn reject_body(rejection: JsonRejection) -> ApiFailure {
    ApiFailure::new(StatusCode::BAD_REQUEST, rejection.body_text())
}

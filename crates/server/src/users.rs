//! The module exposes the users that own expenses.

use api_types::user::{UserNew, UserView};
use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};
use engine::UserDraft;
use uuid::Uuid;

use crate::{ServerError, server::ServerState};

fn map_user(user: engine::User) -> UserView {
    UserView {
        id: user.id,
        name: user.name,
        email: user.email,
    }
}

pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<UserNew>, JsonRejection>,
) -> Result<(StatusCode, Json<UserView>), ServerError> {
    let Json(payload) = payload?;
    let user = state
        .engine
        .create_user(UserDraft {
            name: payload.name,
            email: payload.email,
        })
        .await?;
    tracing::info!("created user {}", user.id);
    Ok((StatusCode::CREATED, Json(map_user(user))))
}

pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<UserView>>, ServerError> {
    let users = state
        .engine
        .users()
        .await?
        .into_iter()
        .map(map_user)
        .collect();
    Ok(Json(users))
}

pub async fn get(
    State(state): State<ServerState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<UserView>, ServerError> {
    let Path(id) = id?;
    Ok(Json(map_user(state.engine.user(id).await?)))
}

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::{Value, json};

use crate::{
    catalog::Catalog,
    entities::episode,
    error::{AppError, AppResult},
    models::{CreateEpisode, UpdateEpisode},
};

pub async fn list(State(catalog): State<Catalog>) -> AppResult<Json<Vec<episode::Model>>> {
    Ok(Json(catalog.list_episodes().await?))
}

pub async fn get_one(
    State(catalog): State<Catalog>,
    Path(id): Path<i32>,
) -> AppResult<Json<episode::Model>> {
    let episode = catalog.get_episode(id).await?.ok_or(AppError::NotFound("Episode"))?;
    Ok(Json(episode))
}

pub async fn create(
    State(catalog): State<Catalog>,
    Json(req): Json<CreateEpisode>,
) -> AppResult<(StatusCode, Json<episode::Model>)> {
    let new = req.validate().map_err(AppError::Validation)?;
    let episode = catalog.create_episode(new).await?;
    Ok((StatusCode::CREATED, Json(episode)))
}

pub async fn update(
    State(catalog): State<Catalog>,
    Path(id): Path<i32>,
    Json(fields): Json<UpdateEpisode>,
) -> AppResult<Json<episode::Model>> {
    let errors = fields.validate();
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }
    let episode = catalog.update_episode(id, fields).await?.ok_or(AppError::NotFound("Episode"))?;
    Ok(Json(episode))
}

pub async fn remove(State(catalog): State<Catalog>, Path(id): Path<i32>) -> AppResult<Json<Value>> {
    if !catalog.delete_episode(id).await? {
        return Err(AppError::NotFound("Episode"));
    }
    Ok(Json(json!({ "message": "Episode deleted successfully" })))
}

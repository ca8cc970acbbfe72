use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::{Value, json};

use crate::{
    catalog::Catalog,
    entities::guest,
    error::{AppError, AppResult},
    models::{CreateGuest, UpdateGuest},
};

pub async fn list(State(catalog): State<Catalog>) -> AppResult<Json<Vec<guest::Model>>> {
    Ok(Json(catalog.list_guests().await?))
}

pub async fn get_one(
    State(catalog): State<Catalog>,
    Path(id): Path<i32>,
) -> AppResult<Json<guest::Model>> {
    let guest = catalog.get_guest(id).await?.ok_or(AppError::NotFound("Guest"))?;
    Ok(Json(guest))
}

pub async fn create(
    State(catalog): State<Catalog>,
    Json(req): Json<CreateGuest>,
) -> AppResult<(StatusCode, Json<guest::Model>)> {
    let new = req.validate().map_err(AppError::Validation)?;
    let guest = catalog.create_guest(new).await?;
    Ok((StatusCode::CREATED, Json(guest)))
}

pub async fn update(
    State(catalog): State<Catalog>,
    Path(id): Path<i32>,
    Json(fields): Json<UpdateGuest>,
) -> AppResult<Json<guest::Model>> {
    let errors = fields.validate();
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }
    let guest = catalog.update_guest(id, fields).await?.ok_or(AppError::NotFound("Guest"))?;
    Ok(Json(guest))
}

pub async fn remove(State(catalog): State<Catalog>, Path(id): Path<i32>) -> AppResult<Json<Value>> {
    if !catalog.delete_guest(id).await? {
        return Err(AppError::NotFound("Guest"));
    }
    Ok(Json(json!({ "message": "Guest deleted successfully" })))
}

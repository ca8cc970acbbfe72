use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::{Value, json};

use crate::{
    catalog::Catalog,
    entities::appearance,
    error::{AppError, AppResult},
    models::{CreateAppearance, UpdateAppearance},
};

pub async fn list(State(catalog): State<Catalog>) -> AppResult<Json<Vec<appearance::Model>>> {
    Ok(Json(catalog.list_appearances().await?))
}

pub async fn get_one(
    State(catalog): State<Catalog>,
    Path(id): Path<i32>,
) -> AppResult<Json<appearance::Model>> {
    let appearance = catalog.get_appearance(id).await?.ok_or(AppError::NotFound("Appearance"))?;
    Ok(Json(appearance))
}

pub async fn create(
    State(catalog): State<Catalog>,
    Json(req): Json<CreateAppearance>,
) -> AppResult<(StatusCode, Json<appearance::Model>)> {
    let new = req.validate().map_err(AppError::Validation)?;
    let appearance = catalog.create_appearance(new).await?;
    Ok((StatusCode::CREATED, Json(appearance)))
}

pub async fn update(
    State(catalog): State<Catalog>,
    Path(id): Path<i32>,
    Json(fields): Json<UpdateAppearance>,
) -> AppResult<Json<appearance::Model>> {
    let errors = fields.validate();
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }
    let appearance =
        catalog.update_appearance(id, fields).await?.ok_or(AppError::NotFound("Appearance"))?;
    Ok(Json(appearance))
}

pub async fn remove(State(catalog): State<Catalog>, Path(id): Path<i32>) -> AppResult<Json<Value>> {
    if !catalog.delete_appearance(id).await? {
        return Err(AppError::NotFound("Appearance"));
    }
    Ok(Json(json!({ "message": "Appearance deleted successfully" })))
}

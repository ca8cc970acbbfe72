use axum::{Router, routing::get};

use crate::catalog::Catalog;

pub mod appearances;
pub mod episodes;
pub mod guests;

pub fn router() -> Router<Catalog> {
    Router::new()
        .route("/episodes", get(episodes::list).post(episodes::create))
        .route(
            "/episodes/{id}",
            get(episodes::get_one).patch(episodes::update).delete(episodes::remove),
        )
        .route("/guests", get(guests::list).post(guests::create))
        .route("/guests/{id}", get(guests::get_one).patch(guests::update).delete(guests::remove))
        .route("/appearances", get(appearances::list).post(appearances::create))
        .route(
            "/appearances/{id}",
            get(appearances::get_one).patch(appearances::update).delete(appearances::remove),
        )
}

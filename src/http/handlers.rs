use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::dto::{CreateProductRequest, HealthResponse, UpdateProductRequest};
use super::errors::ApiError;
use super::extract::{ProductIdParam, ValidatedJson};
use crate::clients::ProductClient;
use crate::model::{DeleteConfirmation, Product};

pub async fn create_product(
    State(products): State<ProductClient>,
    ValidatedJson(body): ValidatedJson<CreateProductRequest>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let product = products.create(body.into()).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

pub async fn list_products(
    State(products): State<ProductClient>,
) -> Result<Json<Vec<Product>>, ApiError> {
    Ok(Json(products.find_all().await?))
}

pub async fn get_product(
    State(products): State<ProductClient>,
    ProductIdParam(id): ProductIdParam,
) -> Result<Json<Product>, ApiError> {
    Ok(Json(products.find_one(id).await?))
}

pub async fn update_product(
    State(products): State<ProductClient>,
    ProductIdParam(id): ProductIdParam,
    ValidatedJson(body): ValidatedJson<UpdateProductRequest>,
) -> Result<Json<Product>, ApiError> {
    Ok(Json(products.update(id, body.into()).await?))
}

pub async fn delete_product(
    State(products): State<ProductClient>,
    ProductIdParam(id): ProductIdParam,
) -> Result<Json<DeleteConfirmation>, ApiError> {
    Ok(Json(products.remove(id).await?))
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

//! Extractors that turn axum's rejections into [`ApiError`]s.

use axum::async_trait;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;
use validator::Validate;

use super::errors::ApiError;
use crate::model::ProductId;

/// A JSON body that has been deserialized *and* passed its `validate` rules.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::invalid(rejection.body_text()))?;
        value.validate()?;
        Ok(Self(value))
    }
}

/// The `:id` path segment, parsed as a product id.
#[derive(Debug, Clone, Copy)]
pub struct ProductIdParam(pub ProductId);

#[async_trait]
impl<S> FromRequestParts<S> for ProductIdParam
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<u64>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::invalid("Validation failed (numeric string is expected)"))?;
        Ok(Self(ProductId(id)))
    }
}

use axum::{
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use tracing::warn;

use super::ApiError;

/// The `{id}` segment of a venue or artist route. Anything that is not an
/// integer is answered with the 400 page.
#[derive(Debug, Clone, Copy)]
pub struct EntityId(pub i32);

impl<S> FromRequestParts<S> for EntityId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i32>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;
        Ok(Self(id))
    }
}

/// A url-encoded form body. Repeated keys collect into `Vec` fields; a body
/// that is not a form, or does not decode, is answered with the 400 page.
#[derive(Debug, Clone)]
pub struct FormBody<T>(pub T);

impl<T, S> FromRequest<S> for FormBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let path = req.uri().path().to_string();
        let axum_extra::extract::Form(value) =
            axum_extra::extract::Form::<T>::from_request(req, state)
                .await
                .map_err(|rejection| {
                    warn!(path = %path, error = %rejection, "Rejected form body");
                    ApiError::bad_request(rejection.to_string())
                })?;
        Ok(Self(value))
    }
}

//! Path extractor whose rejections use the standard error envelope.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::errors::AppError;

/// Deserialized path parameters.
///
/// A segment that does not parse into `T` (`/api/users/abc`, or an id
/// outside the `i32` range) is rejected with `AppError::Validation`.
pub struct PathParam<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for PathParam<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                tracing::debug!("Rejected path: {}", rejection.body_text());
                AppError::validation(rejection.body_text())
            })?;

        Ok(PathParam(value))
    }
}

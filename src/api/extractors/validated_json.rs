//! JSON body extractor that runs `validator` rules after deserializing.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::errors::AppError;

/// Deserialized and validated JSON body.
///
/// Malformed JSON and failed rules are both rejected with
/// `AppError::Validation`, i.e. a 400 with the standard error envelope.
///
/// ```rust,ignore
/// async fn create_user(ValidatedJson(payload): ValidatedJson<UserRequest>) {
///     // every #[validate] rule on UserRequest already passed
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                tracing::debug!("Rejected request body: {}", rejection.body_text());
                AppError::validation(rejection.body_text())
            })?;

        value
            .validate()
            .map_err(|errors| AppError::validation(describe(&errors)))?;

        Ok(ValidatedJson(value))
    }
}

/// One message per failed rule, sorted by field so the output is stable.
fn describe(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|(a, _), (b, _)| a.cmp(b));

    fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(message) => message.to_string(),
                None => format!("{} is invalid", field),
            })
        })
        .collect::<Vec<_>>()
        .join(", ")
}

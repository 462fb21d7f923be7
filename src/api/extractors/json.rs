use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use tracing::debug;
use crate::error::AppError;

/// Drop-in for `axum::Json` whose rejections come back as `AppError::InvalidRequest`,
/// so a body that cannot be read still gets the `{error, code}` envelope.
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(invalid_body)?;

        Ok(ApiJson(value))
    }
}

fn invalid_body(rejection: JsonRejection) -> AppError {
    debug!("Rejected request body: {}", rejection);
    AppError::InvalidRequest(rejection.body_text())
}

//! Estrattore JSON con validazione
//!
//! Come `axum::Json`, ma ogni errore di parsing (campo mancante, tipo sbagliato,
//! numero non intero) e ogni regola `validator` violata diventa un 400 `AppError`
//! invece del 422 predefinito di axum.

use crate::core::AppError;
use axum::extract::{FromRequest, Json, Request};
use serde::de::DeserializeOwned;
use validator::Validate;

pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value.validate()?;
        Ok(ValidatedJson(value))
    }
}

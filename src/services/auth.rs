//! Auth services - Login ed emissione del token JWT

use crate::core::{AppError, AppState, ValidatedJson, encode_jwt};
use axum::extract::{Json, State};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info, instrument, warn};
use validator::Validate;

/// DTO per il login (solo username e password)
#[derive(Deserialize, Validate)]
pub struct LoginDTO {
    pub username: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TokenDTO {
    pub jwt_token: String,
}

#[instrument(skip(state, body), fields(username = %body.username))]
pub async fn login_user(
    State(state): State<Arc<AppState>>,
    ValidatedJson(body): ValidatedJson<LoginDTO>, // JSON body
) -> Result<Json<TokenDTO>, AppError> {
    // 1. Cercare l'utente nel database tramite username (match esatto)
    // 2. Se l'utente non esiste, ritornare 400 "Invalid user"
    // 3. Verificare la password con bcrypt su un thread bloccante (hash lento)
    // 4. Se la password non corrisponde, ritornare 400 "Invalid password"
    // 5. Generare il token con il solo username come claim e ritornarlo come JSON
    let user = match state.user.find_by_username(&body.username).await? {
        Some(user) => user,
        None => {
            warn!("Login attempt for unknown user");
            return Err(AppError::invalid_user());
        }
    };

    let password = body.password;
    let (user, matched) = tokio::task::spawn_blocking(move || {
        let matched = user.verify_password(&password);
        (user, matched)
    })
    .await?;

    if !matched {
        warn!("Login attempt with wrong password");
        return Err(AppError::invalid_password());
    }

    let token = encode_jwt(user.username, &state.jwt_secret, state.token_ttl).map_err(|e| {
        error!("Unable to issue token: {:?}", e);
        AppError::internal_server_error("Internal server error")
    })?;

    info!("User logged in");
    Ok(Json(TokenDTO { jwt_token: token }))
}

use crate::core::{AppError, AppState};
use axum::extract::State;
use axum::{body::Body, extract::Request, http, http::Response, middleware::Next};
use chrono::{Duration, Utc};
use jsonwebtoken::errors::{Error as JwtError, ErrorKind};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, TokenData, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

// struct che codifica il contenuto del token jwt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub username: String,
    // Presente solo se è configurata una durata per i token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<usize>,
}

#[instrument(skip(secret), fields(username = %username))]
pub fn encode_jwt(username: String, secret: &str, ttl: Option<Duration>) -> Result<String, JwtError> {
    debug!("Encoding JWT token for user");
    let exp = match ttl {
        Some(ttl) => {
            let expires_at = Utc::now().checked_add_signed(ttl).ok_or_else(|| {
                error!("Token lifetime out of range: {}s", ttl.num_seconds());
                JwtError::from(ErrorKind::InvalidToken)
            })?;
            Some(expires_at.timestamp().max(0) as usize)
        }
        None => None,
    };
    let claim = Claims { username, exp };

    encode(
        &Header::new(Algorithm::HS256),
        &claim,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map(|token| {
        info!("JWT token encoded successfully");
        token
    })
    .map_err(|e| {
        error!("Failed to encode JWT token: {:?}", e);
        e
    })
}

/// Verifica firma (e scadenza, se presente) del token. Nessun I/O.
#[instrument(skip(jwt_token, secret))]
pub fn decode_jwt(jwt_token: &str, secret: &str) -> Result<TokenData<Claims>, JwtError> {
    debug!("Decoding JWT token");
    let mut validation = Validation::new(Algorithm::HS256);
    // exp non è obbligatorio, ma se c'è viene controllato
    validation.required_spec_claims.clear();
    validation.validate_exp = true;

    decode::<Claims>(
        jwt_token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map(|data| {
        debug!("JWT token decoded successfully for user: {}", data.claims.username);
        data
    })
}

/// Estrae il token dall'header `Authorization: Bearer <token>`
fn bearer_token(header: &str) -> Option<&str> {
    let mut parts = header.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(scheme), Some(token), None) if scheme.eq_ignore_ascii_case("bearer") => Some(token),
        _ => None,
    }
}

#[instrument(skip(state, req, next))]
pub async fn authentication_middleware(
    State(state): State<Arc<AppState>>,
    mut req: Request,
    next: Next,
) -> Result<Response<Body>, AppError> {
    debug!("Running authentication middleware");
    let auth_header = match req.headers().get(http::header::AUTHORIZATION) {
        Some(header) => header.to_str().map_err(|_| {
            warn!("Invalid authorization header format");
            AppError::invalid_token()
        })?,
        None => {
            warn!("Missing authorization header");
            return Err(AppError::missing_token());
        }
    };

    let token = bearer_token(auth_header).ok_or_else(|| {
        warn!("Authorization header is not a bearer token");
        AppError::invalid_token()
    })?;

    let token_data = decode_jwt(token, &state.jwt_secret).map_err(|e| {
        warn!("Failed to decode JWT token: {:?}", e.kind());
        AppError::invalid_token()
    })?;

    // tutti gli utenti autenticati hanno gli stessi privilegi: nessuna query sul db
    info!("Request authenticated for user: {}", token_data.claims.username);
    req.extensions_mut().insert(token_data.claims);
    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "unit-test-secret";

    #[test]
    fn test_token_roundtrip_without_expiration() {
        let token = encode_jwt("alice".to_string(), SECRET, None).unwrap();
        let data = decode_jwt(&token, SECRET).unwrap();

        assert_eq!(data.claims.username, "alice");
        assert_eq!(data.claims.exp, None);
    }

    #[test]
    fn test_token_with_ttl_carries_expiration() {
        let token = encode_jwt("alice".to_string(), SECRET, Some(Duration::hours(1))).unwrap();
        let data = decode_jwt(&token, SECRET).unwrap();

        let exp = data.claims.exp.expect("exp should be set");
        assert!(exp > Utc::now().timestamp() as usize);
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let token = encode_jwt("alice".to_string(), SECRET, Some(Duration::hours(-2))).unwrap();
        let err = decode_jwt(&token, SECRET).unwrap_err();

        assert!(matches!(err.kind(), ErrorKind::ExpiredSignature));
    }

    #[test]
    fn test_out_of_range_ttl_is_an_error() {
        let ttl = Duration::try_days(100_000_000).unwrap();
        let err = encode_jwt("alice".to_string(), SECRET, Some(ttl)).unwrap_err();

        assert!(matches!(err.kind(), ErrorKind::InvalidToken));
    }

    #[test]
    fn test_token_signed_with_other_secret_is_rejected() {
        let token = encode_jwt("alice".to_string(), "another-secret", None).unwrap();
        let err = decode_jwt(&token, SECRET).unwrap_err();

        assert!(matches!(err.kind(), ErrorKind::InvalidSignature));
    }

    #[test]
    fn test_garbage_token_is_rejected() {
        assert!(decode_jwt("not.a.token", SECRET).is_err());
        assert!(decode_jwt("", SECRET).is_err());
    }

    #[test]
    fn test_bearer_token_parsing() {
        assert_eq!(bearer_token("Bearer abc.def.ghi"), Some("abc.def.ghi"));
        assert_eq!(bearer_token("bearer abc"), Some("abc"));
        assert_eq!(bearer_token("Bearer"), None);
        assert_eq!(bearer_token("Basic abc"), None);
        assert_eq!(bearer_token("Bearer abc extra"), None);
        assert_eq!(bearer_token(""), None);
    }
}

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::IntoResponse,
};
use tracing::error;

/// Messaggio unico per tutti i fallimenti di autenticazione: non si rivela quale controllo è fallito
pub const INVALID_TOKEN_MESSAGE: &str = "Invalid JWT Token";

#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    message: &'static str,
    details: Option<String>,
}

impl AppError {
    pub fn new(status: StatusCode, message: &'static str) -> Self {
        Self {
            status,
            message,
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    // Common error constructors
    pub fn not_found(message: &'static str) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn bad_request(message: &'static str) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn unauthorized(message: &'static str) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    pub fn internal_server_error(message: &'static str) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn service_unavailable(message: &'static str) -> Self {
        Self::new(StatusCode::SERVICE_UNAVAILABLE, message)
    }

    // Errori del dominio
    pub fn missing_token() -> Self {
        Self::unauthorized(INVALID_TOKEN_MESSAGE)
    }

    pub fn invalid_token() -> Self {
        Self::unauthorized(INVALID_TOKEN_MESSAGE)
    }

    pub fn invalid_user() -> Self {
        Self::bad_request("Invalid user")
    }

    pub fn invalid_password() -> Self {
        Self::bad_request("Invalid password")
    }

    pub fn validation(details: impl Into<String>) -> Self {
        Self::bad_request("Validation error").with_details(details)
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => Self::not_found("Resource not found"),

            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
                error!("Database pool unavailable: {:?}", err);
                Self::service_unavailable("Database unavailable")
            }

            _ => {
                error!("Database error: {:?}", err);
                Self::internal_server_error("Internal server error")
            }
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::validation(err.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::validation(rejection.body_text())
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        error!("Blocking task failed: {:?}", err);
        Self::internal_server_error("Internal server error")
    }
}

// Il corpo è testo semplice, come si aspettano i client del portale
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let body = match self.details {
            Some(details) => format!("{}: {}", self.message, details),
            None => self.message.to_string(),
        };
        (self.status, body).into_response()
    }
}

//! Error handling for the inventory platform
//!
//! Every error leaves the server as `{"error": "<message>"}`. Business-rule
//! violations carry their message to the client verbatim; store and
//! internal failures are logged and replaced with a generic message.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use shared::LedgerError;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0} não encontrado.")]
    NotFound(String),

    // Validation errors
    #[error("{0}")]
    InvalidArgument(String),

    // Business rule errors
    #[error("{0}")]
    InvalidOperation(String),

    #[error("{0}")]
    InsufficientStock(String),

    #[error("{0}")]
    Conflict(String),

    #[error("E-mail ou senha incorretos.")]
    InvalidCredentials,

    // Database errors
    #[error("Database error: {0}")]
    DatabaseError(sqlx::Error),

    // Internal errors
    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Internal server error")]
    InternalError(#[from] anyhow::Error),
}

/// Error response structure
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl AppError {
    /// HTTP status for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidArgument(_)
            | AppError::InvalidOperation(_)
            | AppError::InsufficientStock(_) => StatusCode::BAD_REQUEST,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AppError::DatabaseError(_) | AppError::Internal(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message sent to the client
    pub fn client_message(&self) -> String {
        match self {
            AppError::DatabaseError(_) => "Erro interno no banco de dados.".to_string(),
            AppError::Internal(_) | AppError::InternalError(_) => {
                "Erro interno do servidor.".to_string()
            }
            other => other.to_string(),
        }
    }
}

/// Constraint violations the store reports for bad input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DbViolation {
    Unique,
    ForeignKey,
    Check,
}

fn classify_db_error(err: &sqlx::Error) -> Option<DbViolation> {
    let db_err = err.as_database_error()?;
    match db_err.code().as_deref() {
        Some("23505") => Some(DbViolation::Unique),
        Some("23503") => Some(DbViolation::ForeignKey),
        Some("23514") => Some(DbViolation::Check),
        _ => None,
    }
}

/// Constraint violations are the client's fault; everything else is ours
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match classify_db_error(&err) {
            Some(DbViolation::Unique) => {
                AppError::Conflict("Já existe um registro com estes dados.".to_string())
            }
            Some(DbViolation::ForeignKey) => AppError::InvalidArgument(
                "Operação viola um vínculo com outro registro.".to_string(),
            ),
            Some(DbViolation::Check) => {
                AppError::InvalidArgument("Valor fora do intervalo permitido.".to_string())
            }
            None => AppError::DatabaseError(err),
        }
    }
}

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::InvalidQuantity(_) => AppError::InvalidArgument(err.to_string()),
            LedgerError::InsufficientStock { .. } => AppError::InsufficientStock(err.to_string()),
            LedgerError::UnknownAction(_)
            | LedgerError::AlreadyReceived(_)
            | LedgerError::BalanceOverflow => AppError::InvalidOperation(err.to_string()),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<&str> = errors.field_errors().keys().copied().collect();
        fields.sort_unstable();
        AppError::InvalidArgument(format!("Campos inválidos: {}.", fields.join(", ")))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        let message = match &rejection {
            JsonRejection::MissingJsonContentType(_) => {
                "O corpo da requisição deve ser JSON (Content-Type: application/json).".to_string()
            }
            JsonRejection::JsonSyntaxError(_) => "JSON malformado no corpo da requisição.".to_string(),
            JsonRejection::JsonDataError(_) => {
                format!("Dados inválidos: {}", rejection.body_text())
            }
            _ => format!("Corpo da requisição inválido: {}", rejection.body_text()),
        };
        AppError::InvalidArgument(message)
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        match rejection {
            PathRejection::FailedToDeserializePathParams(_) => {
                AppError::InvalidArgument("Identificador inválido na URL.".to_string())
            }
            other => AppError::Internal(other.body_text()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!("Error: {:?}", self);
        } else {
            tracing::debug!("Request rejected: {}", self);
        }

        let body = ErrorResponse {
            error: self.client_message(),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;

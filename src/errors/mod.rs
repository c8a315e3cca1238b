use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use log::error;
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;
use validator::ValidationErrors;
use crate::db::StorageError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Cannot parse JSON: {0}")]
    Decode(String),
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("Invalid ID format: {0}")]
    InvalidIdentifier(String),
    #[error("{context}: {source}")]
    Storage {
        context: &'static str,
        #[source]
        source: StorageError,
    },
}

impl AppError {
    pub fn storage(context: &'static str) -> impl FnOnce(StorageError) -> AppError {
        move |source| AppError::Storage { context, source }
    }

    fn category(&self) -> &'static str {
        match self {
            AppError::Decode(_) => "decode_error",
            AppError::Validation(_) => "validation_error",
            AppError::InvalidIdentifier(_) => "invalid_identifier",
            AppError::Storage { source: StorageError::Timeout(_), .. } => "timeout",
            AppError::Storage { .. } => "storage_error",
        }
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: &'static str,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    fields: Option<BTreeMap<&'static str, Vec<String>>>,
}

fn field_messages(errors: &ValidationErrors) -> BTreeMap<&'static str, Vec<String>> {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errors)| {
            let messages = errors
                .iter()
                .map(|err| match &err.message {
                    Some(message) => message.to_string(),
                    None => err.code.to_string(),
                })
                .collect();
            (field, messages)
        })
        .collect()
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Decode(_) | AppError::Validation(_) | AppError::InvalidIdentifier(_) => StatusCode::BAD_REQUEST,
            AppError::Storage { source: StorageError::Timeout(_), .. } => StatusCode::GATEWAY_TIMEOUT,
            AppError::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::Decode(msg) => ErrorResponse {
                error: self.category(),
                message: format!("Cannot parse JSON: {}", msg),
                fields: None,
            },
            AppError::Validation(errors) => ErrorResponse {
                error: self.category(),
                message: "Validation failed".to_string(),
                fields: Some(field_messages(errors)),
            },
            AppError::InvalidIdentifier(_) => ErrorResponse {
                error: self.category(),
                message: "Invalid ID format".to_string(),
                fields: None,
            },
            AppError::Storage { context, source } => {
                error!("{}: {}", context, source);
                let message = match source {
                    StorageError::Timeout(_) => "Request timed out",
                    _ => context,
                };
                ErrorResponse {
                    error: self.category(),
                    message: message.to_string(),
                    fields: None,
                }
            }
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into HTTP responses. `AppError` is the top-level error type that
//! wraps domain-specific errors and implements `IntoResponse` for automatic error handling
//! in API endpoints. Every error body carries a stable code, a human message and the
//! underlying detail (see `ErrorDto`).

pub mod channel;
pub mod config;
pub mod internal;
pub mod ledger;
pub mod reader;

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        channel::ChannelError, config::ConfigError, internal::InternalError, ledger::LedgerError,
        reader::ReaderError,
    },
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Domain-specific errors like `ReaderError`
/// handle their own response mapping, while generic variants provide standard HTTP
/// status codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Card-read pipeline error.
    ///
    /// Delegates to `ReaderError::into_response()` for gateway-class status mapping.
    #[error(transparent)]
    ReaderErr(#[from] ReaderError),

    /// Message channel error outside of a card read, e.g. during startup.
    #[error(transparent)]
    ChannelErr(#[from] ChannelError),

    /// The ledger could not report a balance.
    ///
    /// Results in 502 Bad Gateway with code `LEDGER_UNREACHABLE`.
    #[error("Failed to read balance from SavaPage: {0}")]
    LedgerUnreachable(#[source] LedgerError),

    /// The ledger did not confirm a debit. No local transaction is recorded.
    ///
    /// Results in 502 Bad Gateway with code `LEDGER_CHARGE_FAILED`.
    #[error("Failed to charge SavaPage account: {0}")]
    LedgerChargeFailed(#[source] LedgerError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// HTTP client construction error from reqwest.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Socket error while binding or serving.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Stored data could not be converted into a domain model.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with code `INVALID_PAYLOAD`.
    #[error("{0}")]
    BadRequest(String),

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error. The provided message is logged
    /// but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Builds an error response with the shared `ErrorDto` body.
pub(crate) fn error_response(
    status: StatusCode,
    code: &str,
    message: &str,
    error: String,
) -> Response {
    (
        status,
        Json(ErrorDto {
            code: code.to_string(),
            message: message.to_string(),
            error,
        }),
    )
        .into_response()
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest`
/// - 404 Not Found - For `NotFound`
/// - 502 Bad Gateway - For ledger failures and channel failures
/// - Variable - For `ReaderErr`, delegated to `ReaderError::into_response()`
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::ReaderErr(err) => err.into_response(),
            Self::ChannelErr(err) => ReaderError::Channel(err).into_response(),
            Self::NotFound(msg) => {
                error_response(StatusCode::NOT_FOUND, "NOT_FOUND", &msg, msg.clone())
            }
            Self::BadRequest(msg) => error_response(
                StatusCode::BAD_REQUEST,
                "INVALID_PAYLOAD",
                "Payload is invalid",
                msg,
            ),
            Self::LedgerUnreachable(err) => {
                tracing::warn!("SavaPage balance lookup failed: {}", err);
                error_response(
                    StatusCode::BAD_GATEWAY,
                    "LEDGER_UNREACHABLE",
                    "Failed to reach SavaPage",
                    err.to_string(),
                )
            }
            Self::LedgerChargeFailed(err) => {
                tracing::warn!("SavaPage debit failed: {}", err);
                error_response(
                    StatusCode::BAD_GATEWAY,
                    "LEDGER_CHARGE_FAILED",
                    "Failed to charge SavaPage account",
                    err.to_string(),
                )
            }
            Self::InternalError(msg) => InternalServerError(msg).into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic message to the client to avoid leaking
/// implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL_SERVER_ERROR",
            "Internal server error",
            "Internal server error".to_string(),
        )
    }
}

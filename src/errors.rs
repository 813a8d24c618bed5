// src/errors.rs
// DOCUMENTATION: Custom error types and HTTP responses
// PURPOSE: Centralized error handling for entire application

use crate::db::StoreError;
use actix_web::{error::ResponseError, http::header::ContentType, http::StatusCode, HttpResponse};
use thiserror::Error;

/// Application-specific error types
/// DOCUMENTATION: One variant per failing step of a request
/// The Display text is the exact plain-text response body
#[derive(Error, Debug)]
pub enum TransactionsError {
    #[error("invalid body")]
    InvalidBody,

    #[error("amount must be > 0")]
    InvalidAmount,

    #[error("invalid id")]
    InvalidId,

    #[error("transaction not found")]
    NotFound,

    #[error("db not ready")]
    NotReady(#[source] StoreError),

    #[error("tx begin error")]
    Begin(#[source] StoreError),

    #[error("insert error")]
    Insert(#[source] StoreError),

    #[error("update error")]
    Update(#[source] StoreError),

    #[error("commit error")]
    Commit(#[source] StoreError),

    #[error("query error")]
    Query(#[source] StoreError),

    #[error("scan error")]
    Scan(#[source] StoreError),

    #[error("rows error")]
    Rows(#[source] StoreError),
}

/// Convert TransactionsError to HTTP response
/// DOCUMENTATION: Input errors are 400, missing rows 404, store failures 500/503
impl ResponseError for TransactionsError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::plaintext())
            .body(self.to_string())
    }

    fn status_code(&self) -> StatusCode {
        match self {
            TransactionsError::InvalidBody
            | TransactionsError::InvalidAmount
            | TransactionsError::InvalidId => StatusCode::BAD_REQUEST,
            TransactionsError::NotFound => StatusCode::NOT_FOUND,
            TransactionsError::NotReady(_) => StatusCode::SERVICE_UNAVAILABLE,
            TransactionsError::Begin(_)
            | TransactionsError::Insert(_)
            | TransactionsError::Update(_)
            | TransactionsError::Commit(_)
            | TransactionsError::Query(_)
            | TransactionsError::Scan(_)
            | TransactionsError::Rows(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

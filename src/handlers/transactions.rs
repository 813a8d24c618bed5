// src/handlers/transactions.rs
// DOCUMENTATION: HTTP handlers for transaction operations
// PURPOSE: Parse requests, call services, return responses

use crate::config::Config;
use crate::errors::TransactionsError;
use crate::models::TransactionAmountRequest;
use crate::services::TransactionService;
use actix_web::{web, HttpResponse, Responder};
use sqlx::PgPool;
use validator::Validate;

/// POST /transactions
/// Insert a transaction with a positive amount
pub async fn create_transaction(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    req: web::Json<TransactionAmountRequest>,
) -> Result<impl Responder, TransactionsError> {
    // Validate request before touching the store
    if req.validate().is_err() {
        return Err(TransactionsError::InvalidAmount);
    }

    let created =
        TransactionService::create_transaction(pool.get_ref(), config.get_ref(), req.into_inner())
            .await?;
    Ok(HttpResponse::Ok().json(created))
}

/// GET /transactions
/// List every transaction, newest first
pub async fn list_transactions(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
) -> Result<impl Responder, TransactionsError> {
    let result = TransactionService::list_transactions(pool.get_ref(), config.get_ref()).await?;
    Ok(HttpResponse::Ok().json(result))
}

/// PUT /transactions/{id}
/// Replace the amount of an existing transaction
pub async fn update_transaction(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    path: web::Path<i64>,
    req: web::Json<TransactionAmountRequest>,
) -> Result<impl Responder, TransactionsError> {
    if req.validate().is_err() {
        return Err(TransactionsError::InvalidAmount);
    }

    let updated = TransactionService::update_transaction(
        pool.get_ref(),
        config.get_ref(),
        path.into_inner(),
        req.into_inner(),
    )
    .await?;
    Ok(HttpResponse::Ok().json(updated))
}

/// Configuration for transaction routes
/// Body and path extraction failures answer with the service's own 400 bodies
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/transactions")
            .app_data(web::JsonConfig::default().error_handler(|err, _req| {
                log::debug!("Rejected transaction body: {}", err);
                TransactionsError::InvalidBody.into()
            }))
            .app_data(web::PathConfig::default().error_handler(|err, _req| {
                log::debug!("Rejected transaction id: {}", err);
                TransactionsError::InvalidId.into()
            }))
            .route("", web::post().to(create_transaction))
            .route("", web::get().to(list_transactions))
            .route("/{id}", web::put().to(update_transaction)),
    );
}

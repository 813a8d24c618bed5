// src/services/transaction_service.rs
// DOCUMENTATION: Business logic for transactions
// PURPOSE: Intermediary between handlers and repository, owns the request deadline

use crate::config::Config;
use crate::db::{Deadline, TransactionRepository};
use crate::errors::TransactionsError;
use crate::models::{
    CreateTransactionResponse, ListTransactionsResponse, TransactionAmountRequest,
    UpdateTransactionResponse, STATUS_SUCCESS,
};
use sqlx::PgPool;

pub struct TransactionService;

impl TransactionService {
    /// Create a new transaction
    /// Expects an already validated request
    pub async fn create_transaction(
        pool: &PgPool,
        config: &Config,
        req: TransactionAmountRequest,
    ) -> Result<CreateTransactionResponse, TransactionsError> {
        let deadline = Deadline::after(config.request_timeout);
        TransactionRepository::create(pool, req.amount, &deadline).await?;

        Ok(CreateTransactionResponse {
            status: STATUS_SUCCESS,
            amount: req.amount,
        })
    }

    /// List all transactions, newest first
    pub async fn list_transactions(
        pool: &PgPool,
        config: &Config,
    ) -> Result<ListTransactionsResponse, TransactionsError> {
        let deadline = Deadline::after(config.request_timeout);
        let transactions = TransactionRepository::list(pool, &deadline).await?;

        Ok(ListTransactionsResponse {
            status: STATUS_SUCCESS,
            data: transactions.iter().map(|t| t.to_response()).collect(),
        })
    }

    /// Replace the amount of an existing transaction
    pub async fn update_transaction(
        pool: &PgPool,
        config: &Config,
        id: i64,
        req: TransactionAmountRequest,
    ) -> Result<UpdateTransactionResponse, TransactionsError> {
        let deadline = Deadline::after(config.request_timeout);
        TransactionRepository::update_amount(pool, id, req.amount, &deadline).await?;

        Ok(UpdateTransactionResponse {
            status: STATUS_SUCCESS,
            id,
            amount: req.amount,
        })
    }
}

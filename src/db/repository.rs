// src/db/repository.rs
// DOCUMENTATION: Database access layer - all SQL queries
// PURPOSE: Run each endpoint's statement inside a deadline-bound transaction

use crate::db::{Deadline, StoreError};
use crate::errors::TransactionsError;
use crate::models::Transaction;
use futures::TryStreamExt;
use sqlx::{FromRow, PgPool, Postgres};

type PgTx = sqlx::Transaction<'static, Postgres>;

// Casts keep the statements valid for both INTEGER/SERIAL and BIGINT/BIGSERIAL columns
const INSERT_SQL: &str = r#"
    INSERT INTO transactions (amount)
    VALUES ($1::BIGINT)
    RETURNING id::BIGINT
"#;

const LIST_SQL: &str = r#"
    SELECT
        id::BIGINT AS id,
        amount::BIGINT AS amount,
        created_at::TIMESTAMPTZ AS created_at
    FROM transactions
    ORDER BY created_at DESC, id DESC
"#;

const UPDATE_SQL: &str = r#"
    UPDATE transactions
    SET amount = $1::BIGINT
    WHERE id = $2::BIGINT
"#;

/// TransactionRepository: All database operations for transactions
/// DOCUMENTATION: Writes follow begin -> execute -> commit, rolling back on any failure.
/// A sqlx::Transaction that is dropped before commit is rolled back by the pool,
/// so an abandoned request (timeout, cancelled future) never leaves a write applied.
pub struct TransactionRepository;

impl TransactionRepository {
    /// Insert one transaction row
    /// DOCUMENTATION: Used by POST /transactions; returns the store-assigned id
    pub async fn create(
        pool: &PgPool,
        amount: i64,
        deadline: &Deadline,
    ) -> Result<i64, TransactionsError> {
        let mut tx = Self::begin(pool, deadline).await?;

        let inserted = deadline
            .run(
                sqlx::query_as::<_, (i64,)>(INSERT_SQL)
                    .bind(amount)
                    .fetch_one(&mut *tx),
            )
            .await;

        let id = match inserted {
            Ok((id,)) => id,
            Err(e) => {
                log::error!("Failed to insert transaction (amount {}): {}", amount, e);
                Self::rollback(tx, deadline).await;
                return Err(TransactionsError::Insert(e));
            }
        };

        Self::commit(tx, deadline).await?;

        log::info!("Created transaction with id: {} (amount {})", id, amount);
        Ok(id)
    }

    /// List all transactions, most recent first
    /// DOCUMENTATION: Used by GET /transactions. Rows are streamed and decoded one
    /// at a time; a failure before the first row is a query error, a failure after
    /// it is a rows error, and a row that does not decode is a scan error.
    pub async fn list(
        pool: &PgPool,
        deadline: &Deadline,
    ) -> Result<Vec<Transaction>, TransactionsError> {
        let mut conn = deadline.run(pool.acquire()).await.map_err(|e| {
            log::error!("Failed to acquire connection for transaction list: {}", e);
            TransactionsError::Query(e)
        })?;

        let mut rows = sqlx::query(LIST_SQL).fetch(&mut *conn);
        let mut transactions = Vec::new();

        loop {
            let row = match deadline.run(rows.try_next()).await {
                Ok(Some(row)) => row,
                Ok(None) => break,
                Err(e) if transactions.is_empty() => {
                    log::error!("Failed to query transactions: {}", e);
                    return Err(TransactionsError::Query(e));
                }
                Err(e) => {
                    log::error!(
                        "Failed reading transaction rows after {} rows: {}",
                        transactions.len(),
                        e
                    );
                    return Err(TransactionsError::Rows(e));
                }
            };

            let transaction = Transaction::from_row(&row).map_err(|e| {
                log::error!("Failed to decode transaction row: {}", e);
                TransactionsError::Scan(StoreError::Sqlx(e))
            })?;
            transactions.push(transaction);
        }

        log::debug!("Listed {} transactions", transactions.len());
        Ok(transactions)
    }

    /// Change the amount of an existing transaction
    /// DOCUMENTATION: Used by PUT /transactions/{id}; zero affected rows is NotFound
    pub async fn update_amount(
        pool: &PgPool,
        id: i64,
        amount: i64,
        deadline: &Deadline,
    ) -> Result<(), TransactionsError> {
        let mut tx = Self::begin(pool, deadline).await?;

        let updated = deadline
            .run(
                sqlx::query(UPDATE_SQL)
                    .bind(amount)
                    .bind(id)
                    .execute(&mut *tx),
            )
            .await;

        let rows_affected = match updated {
            Ok(result) => result.rows_affected(),
            Err(e) => {
                log::error!("Failed to update transaction {}: {}", id, e);
                Self::rollback(tx, deadline).await;
                return Err(TransactionsError::Update(e));
            }
        };

        if rows_affected == 0 {
            log::info!("Transaction {} not found for update", id);
            Self::rollback(tx, deadline).await;
            return Err(TransactionsError::NotFound);
        }

        Self::commit(tx, deadline).await?;

        log::info!("Updated transaction {} to amount {}", id, amount);
        Ok(())
    }

    async fn begin(pool: &PgPool, deadline: &Deadline) -> Result<PgTx, TransactionsError> {
        deadline.run(pool.begin()).await.map_err(|e| {
            log::error!("Failed to begin transaction: {}", e);
            TransactionsError::Begin(e)
        })
    }

    async fn commit(tx: PgTx, deadline: &Deadline) -> Result<(), TransactionsError> {
        deadline.run(tx.commit()).await.map_err(|e| {
            log::error!("Failed to commit transaction: {}", e);
            TransactionsError::Commit(e)
        })
    }

    /// Explicit rollback on a failure path.
    /// If it fails or times out the dropped transaction is still rolled back by the pool.
    async fn rollback(tx: PgTx, deadline: &Deadline) {
        if let Err(e) = deadline.run(tx.rollback()).await {
            log::warn!("Failed to roll back transaction: {}", e);
        }
    }
}

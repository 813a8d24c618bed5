// src/models/transaction.rs
// DOCUMENTATION: Core data structures for transactions
// PURPOSE: Defines serialization models for API and database

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationError};

/// Value of the `status` field on every successful response
pub const STATUS_SUCCESS: &str = "success";

/// Represents a transaction record from the database
/// DOCUMENTATION: Maps to the transactions table in PostgreSQL
/// id and created_at are assigned by the store, amount is the only mutable field
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Transaction {
    pub id: i64,
    pub amount: i64,
    pub created_at: DateTime<Utc>,
}

/// Body of POST /transactions and PUT /transactions/{id}
/// DOCUMENTATION: A missing or null amount deserializes as 0 and fails validation
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TransactionAmountRequest {
    #[serde(default, deserialize_with = "null_as_zero")]
    #[validate(custom = "validate_positive_amount")]
    pub amount: i64,
}

fn null_as_zero<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<i64>::deserialize(deserializer)?.unwrap_or(0))
}

// Numeric fields are handed to custom validators by value
fn validate_positive_amount(amount: i64) -> Result<(), ValidationError> {
    if amount > 0 {
        Ok(())
    } else {
        let mut err = ValidationError::new("positive");
        err.message = Some("amount must be > 0".into());
        Err(err)
    }
}

/// Transaction as exposed via API
#[derive(Debug, Clone, Serialize)]
pub struct TransactionResponse {
    pub id: i64,
    pub amount: i64,
    /// RFC3339, second precision
    pub created_at: String,
}

#[derive(Debug, Serialize)]
pub struct CreateTransactionResponse {
    pub status: &'static str,
    pub amount: i64,
}

#[derive(Debug, Serialize)]
pub struct ListTransactionsResponse {
    pub status: &'static str,
    pub data: Vec<TransactionResponse>,
}

#[derive(Debug, Serialize)]
pub struct UpdateTransactionResponse {
    pub status: &'static str,
    pub id: i64,
    pub amount: i64,
}

impl Transaction {
    /// Convert database Transaction into API response
    pub fn to_response(&self) -> TransactionResponse {
        TransactionResponse {
            id: self.id,
            amount: self.amount,
            created_at: self.created_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}

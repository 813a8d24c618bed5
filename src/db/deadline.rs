// src/db/deadline.rs
// DOCUMENTATION: Per-request time budget for store operations
// PURPOSE: Bound every awaited database step by one absolute deadline

use std::future::Future;
use std::time::Duration;
use thiserror::Error;
use tokio::time::Instant;

/// Failure of a single store step
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("deadline of {0:?} exceeded")]
    Timeout(Duration),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Absolute point in time after which store work is abandoned
/// DOCUMENTATION: Created once per request; each step shares the remaining budget
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    at: Instant,
    budget: Duration,
}

impl Deadline {
    pub fn after(budget: Duration) -> Self {
        Deadline {
            at: Instant::now() + budget,
            budget,
        }
    }

    /// Run one store step, failing with `StoreError::Timeout` once the deadline passes.
    /// The step future is dropped on expiry, which releases anything it held.
    pub async fn run<F, T>(&self, step: F) -> Result<T, StoreError>
    where
        F: Future<Output = Result<T, sqlx::Error>>,
    {
        match tokio::time::timeout_at(self.at, step).await {
            Ok(result) => result.map_err(StoreError::from),
            Err(_) => Err(StoreError::Timeout(self.budget)),
        }
    }
}

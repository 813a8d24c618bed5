// src/handlers/mod.rs
// DOCUMENTATION: Handlers module organization
// PURPOSE: Re-export handler components

pub mod health;
pub mod transactions;

pub use health::config as health_config;
pub use transactions::config as transactions_config;

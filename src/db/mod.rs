// src/db/mod.rs
// DOCUMENTATION: Database module organization
// PURPOSE: Re-export database components

pub mod deadline;
pub mod repository;

pub use deadline::*;
pub use repository::*;

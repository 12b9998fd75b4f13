//! Hotel management backend.
//!
//! Entities for hotels, rooms, directors and cities, exposed over REST and
//! persisted through sea-orm. The domain services own the business rules;
//! the API and storage layers stay thin.

pub mod api;
pub mod config;
pub mod domain;
pub mod infra;

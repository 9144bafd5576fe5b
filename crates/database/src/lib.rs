//! # Planetary Database Crate
//!
//! This crate acts as the application-specific interface to the relational
//! store holding the `users` and `planets` tables.
//!
//! ## Architectural Principles
//!
//! - **Repository Adapter:** Handlers depend on the [`PlanetaryRepository`] trait,
//!   never on SQL. [`DbRepository`] is the sqlx/SQLite implementation; another
//!   backend only needs another implementation of the trait.
//! - **Single-Commit Writes:** Every write is either one statement or one
//!   transaction committed once, so there is no partial state to clean up.
//! - **Constraint-Backed Uniqueness:** Email uniqueness is enforced by the
//!   schema and surfaced as [`DbError::UniqueViolation`].
//!
//! ## Public API
//!
//! - `connect` / `connect_in_memory`: build the connection pool.
//! - `DbRepository`: schema management, queries, and inserts.
//! - `seed_sample_data`: the fixed sample rows used by the seed command.
//! - `DbError`: the specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod connection;
pub mod error;
pub mod repository;
mod schema;
pub mod seed;

// Re-export the key components to create a clean, public-facing API.
pub use connection::{connect, connect_in_memory};
pub use error::DbError;
pub use repository::{DbRepository, PlanetaryRepository};
pub use seed::{sample_planets, sample_user, seed_sample_data};

//! SQLite persistence adapters using Diesel ORM.
//!
//! This module provides the concrete record store behind the cafe repository
//! port, backed by a single SQLite file via Diesel, with async support
//! through `diesel-async` and `bb8` connection pooling.
//!
//! # Architecture
//!
//! - **Thin adapters**: the repository only translates between Diesel rows
//!   and domain types. No business logic resides here.
//! - **Internal models**: row structs (`models.rs`) and the schema
//!   (`schema.rs`) never leave this module.
//! - **Strongly typed errors**: database errors map onto
//!   `CafeRepositoryError` variants.
//!
//! # Example
//!
//! ```ignore
//! use cafe_directory::outbound::persistence::{
//!     DbPool, DieselCafeRepository, PoolConfig, run_pending_migrations,
//! };
//!
//! run_pending_migrations("cafes.db")?;
//! let pool = DbPool::new(PoolConfig::new("cafes.db")).await?;
//! let repo = DieselCafeRepository::new(pool);
//! ```

mod diesel_basic_error_mapping;
mod diesel_cafe_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_cafe_repository::DieselCafeRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};

//! Common library for the to-do backend
//!
//! This crate provides the infrastructure shared by the service crates:
//! PostgreSQL connection pooling, database configuration from the
//! environment, and the database error type.

pub mod database;
pub mod error;

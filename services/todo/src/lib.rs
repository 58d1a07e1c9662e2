//! Authenticated to-do backend service
//!
//! User registration and login with hashed credentials and signed session
//! tokens, plus per-user CRUD over to-do items. Every resource query is
//! scoped to the authenticated caller.

pub mod config;
pub mod error;
pub mod jwt;
pub mod middleware;
pub mod models;
pub mod password;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod validation;

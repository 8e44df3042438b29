//! GPDN Admin library.
//!
//! This crate provides the admin service as a library, allowing it to be
//! tested end-to-end and reused by the integration-tests crate.
//!
//! # Architecture
//!
//! The service owns no data of its own. Every CRUD operation is proxied to
//! the remote GPDN platform REST API; the only state kept here is the
//! session record written at login. Routes are guarded by the session and,
//! per management surface, by a capability check against the signed-in
//! admin's role.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod platform;
pub mod routes;
pub mod session_store;
pub mod state;

pub use config::AdminConfig;
pub use state::AppState;

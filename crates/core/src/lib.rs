//! GPDN Core - Shared types library.
//!
//! This crate provides common types used across the GPDN admin components:
//! - `admin` - Administration service (session/capability core, platform proxy)
//! - `integration-tests` - End-to-end tests
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no HTTP clients.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and emails, plus the
//!   capability/role model used for authorization.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;

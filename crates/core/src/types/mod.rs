//! Core types for the GPDN admin service.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod capability;
pub mod email;
pub mod id;
pub mod status;

pub use capability::{Capability, Role};
pub use email::{Email, EmailError};
pub use id::*;
pub use status::RegistrationStatus;

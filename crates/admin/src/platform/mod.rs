//! GPDN platform REST API client.
//!
//! The platform API is the service's only real external boundary: it owns
//! every entity the dashboard manages. This module provides a typed client
//! over it, one submodule per endpoint group.

mod admins;
mod auth;
mod blogs;
mod categories;
mod client;
mod envelope;
mod members;
mod palliative;
mod resources;
mod stats;
mod threads;

pub use admins::{CreateAdminRequest, CreateRoleRequest, EditAdminRequest, EditRoleRequest};
pub use client::PlatformClient;
pub use envelope::Envelope;
pub use palliative::{EditUnitRequest, NewUnitRequest};
pub use resources::EditResourceRequest;
pub use stats::{DashboardStats, RecentActivity};

use thiserror::Error;

/// Errors from the platform API boundary.
#[derive(Debug, Error)]
pub enum PlatformError {
    /// Transport or decoding failure (connection refused, timeout,
    /// non-JSON body).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The platform answered with a failure envelope.
    #[error("platform rejected the request: {message}")]
    Rejected {
        /// Upstream `message`, or a generic fallback when absent.
        message: String,
    },

    /// The platform reported success but the expected `data` was missing.
    #[error("platform response was missing data")]
    MissingData,
}

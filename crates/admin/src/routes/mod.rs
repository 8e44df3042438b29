//! HTTP route handlers for the admin service.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health                                - Liveness check
//! GET    /health/ready                          - Readiness check (platform API reachable)
//!
//! # Auth
//! POST   /api/auth/login                        - Sign in against the platform
//! POST   /api/auth/logout                       - Destroy the session
//! GET    /api/auth/me                           - Current admin and capabilities
//!
//! # Dashboard (any signed-in admin)
//! GET    /api/dashboard/stats                   - Totals across the platform
//! GET    /api/dashboard/activity                - Recent registrations and uploads
//!
//! # Members ("members management")
//! GET    /api/members                           - List members
//! POST   /api/members/register                  - Register a member (multipart)
//! POST   /api/members/invitations               - SMS invitation to a phone number
//! PATCH  /api/members/{id}/status               - Approve or decline a registration
//! DELETE /api/members/{id}                      - Delete a member
//!
//! # Threads ("thread management")
//! GET    /api/threads                           - List threads
//! PATCH  /api/threads                           - Edit a thread (multipart)
//! PATCH  /api/threads/{id}/approval             - Approve or decline a thread
//! DELETE /api/threads/{id}                      - Delete a thread
//! GET    /api/threads/categories                - List thread categories
//! POST   /api/threads/categories                - Add a thread category
//!
//! # Resources ("resource management")
//! GET    /api/resources                         - List resources
//! POST   /api/resources                         - Add a resource (multipart)
//! PATCH  /api/resources                         - Edit a resource (JSON)
//! PATCH  /api/resources/files                   - Edit a resource with new files (multipart)
//! PATCH  /api/resources/{id}/approval           - Approve or decline a resource
//! DELETE /api/resources/{id}                    - Delete a resource
//! GET    /api/resources/categories              - List resource categories
//! POST   /api/resources/categories              - Add a resource category
//! PATCH  /api/resources/categories/{id}         - Rename a resource category
//! PATCH  /api/resources/categories/{id}/approval - Approve or decline a category
//! DELETE /api/resources/categories/{id}         - Delete a resource category
//!
//! # News & blogs ("News & blogs management")
//! GET    /api/blogs                             - List posts
//! POST   /api/blogs                             - Publish a post (multipart)
//! PATCH  /api/blogs                             - Edit a post (multipart)
//! DELETE /api/blogs/{id}                        - Delete a post
//! GET    /api/blogs/categories                  - List blog categories
//!
//! # Palliative directory ("palliative unit management" / "services management")
//! GET    /api/palliative/units                  - List units
//! POST   /api/palliative/units                  - Add a unit
//! PATCH  /api/palliative/units                  - Edit a unit
//! PATCH  /api/palliative/units/{id}/visibility  - Publish or withdraw a unit
//! DELETE /api/palliative/units/{id}             - Remove a unit
//! GET    /api/palliative/services               - List service categories
//! POST   /api/palliative/services               - Add a service category
//! PATCH  /api/palliative/services/{id}          - Rename a service category
//! DELETE /api/palliative/services/{id}          - Delete a service category
//!
//! # Admins and roles ("admins management")
//! GET    /api/admins                            - List admin accounts
//! POST   /api/admins                            - Create an admin
//! PATCH  /api/admins                            - Edit an admin
//! DELETE /api/admins/{id}                       - Delete an admin
//! GET    /api/roles                             - List roles
//! POST   /api/roles                             - Create a role
//! PATCH  /api/roles                             - Edit a role
//! DELETE /api/roles/{id}                        - Delete a role
//! ```

use axum::routing::{delete, get, patch, post};
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

pub mod admins;
pub mod auth;
pub mod blogs;
pub mod dashboard;
pub mod forward;
pub mod members;
pub mod palliative;
pub mod resources;
pub mod threads;

/// Acknowledgement body for mutation endpoints.
#[derive(Debug, Serialize)]
pub struct Ack {
    pub success: bool,
    pub message: String,
}

impl Ack {
    fn ok(message: impl Into<String>) -> Json<Self> {
        Json(Self {
            success: true,
            message: message.into(),
        })
    }
}

/// Assembles all application routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Auth
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/me", get(auth::me))
        // Dashboard
        .route("/api/dashboard/stats", get(dashboard::stats))
        .route("/api/dashboard/activity", get(dashboard::activity))
        // Members
        .route("/api/members", get(members::index))
        .route("/api/members/register", post(members::register))
        .route("/api/members/invitations", post(members::invite))
        .route("/api/members/{id}/status", patch(members::set_status))
        .route("/api/members/{id}", delete(members::remove))
        // Threads
        .route("/api/threads", get(threads::index).patch(threads::edit))
        .route("/api/threads/{id}/approval", patch(threads::set_approval))
        .route("/api/threads/{id}", delete(threads::remove))
        .route(
            "/api/threads/categories",
            get(threads::categories).post(threads::add_category),
        )
        // Resources
        .route(
            "/api/resources",
            get(resources::index)
                .post(resources::add)
                .patch(resources::edit),
        )
        .route("/api/resources/files", patch(resources::edit_with_files))
        .route(
            "/api/resources/{id}/approval",
            patch(resources::set_approval),
        )
        .route("/api/resources/{id}", delete(resources::remove))
        .route(
            "/api/resources/categories",
            get(resources::categories).post(resources::add_category),
        )
        .route(
            "/api/resources/categories/{id}",
            patch(resources::edit_category).delete(resources::remove_category),
        )
        .route(
            "/api/resources/categories/{id}/approval",
            patch(resources::set_category_approval),
        )
        // News & blogs
        .route(
            "/api/blogs",
            get(blogs::index).post(blogs::add).patch(blogs::edit),
        )
        .route("/api/blogs/{id}", delete(blogs::remove))
        .route("/api/blogs/categories", get(blogs::categories))
        // Palliative directory
        .route(
            "/api/palliative/units",
            get(palliative::units)
                .post(palliative::add_unit)
                .patch(palliative::edit_unit),
        )
        .route(
            "/api/palliative/units/{id}/visibility",
            patch(palliative::set_unit_visibility),
        )
        .route("/api/palliative/units/{id}", delete(palliative::remove_unit))
        .route(
            "/api/palliative/services",
            get(palliative::services).post(palliative::add_service),
        )
        .route(
            "/api/palliative/services/{id}",
            patch(palliative::edit_service).delete(palliative::remove_service),
        )
        // Admins and roles
        .route(
            "/api/admins",
            get(admins::index).post(admins::create).patch(admins::edit),
        )
        .route("/api/admins/{id}", delete(admins::remove))
        .route(
            "/api/roles",
            get(admins::roles).post(admins::create_role).patch(admins::edit_role),
        )
        .route("/api/roles/{id}", delete(admins::remove_role))
}

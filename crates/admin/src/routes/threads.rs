//! Thread moderation routes, thread categories included.

use axum::extract::{Multipart, Path, State};
use axum::http::Uri;
use axum::{Json, response::Result as HandlerResult};
use gpdn_core::types::{Capability, ThreadId};
use serde::Deserialize;
use tracing::instrument;

use crate::error::AppError;
use crate::middleware::auth::{RequireAuth, require_capability};
use crate::models::{Category, Thread};
use crate::state::AppState;

use super::{Ack, forward};

/// Body for flipping a thread's approval flag.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalRequest {
    pub approval_status: bool,
}

/// Body for adding a category.
#[derive(Debug, Deserialize)]
pub struct NewCategoryRequest {
    pub category: String,
}

/// Lists all threads with moderation state, shaped for display.
#[instrument(skip(state, admin))]
pub async fn index(
    State(state): State<AppState>,
    RequireAuth(admin): RequireAuth,
    uri: Uri,
) -> HandlerResult<Json<Vec<Thread>>> {
    require_capability(&admin, &Capability::ThreadManagement, uri.path())?;
    let threads = state
        .platform()
        .fetch_threads()
        .await
        .map_err(AppError::from)?
        .into_iter()
        .map(Thread::into_listing)
        .collect();
    Ok(Json(threads))
}

/// Edits a thread; a replaced thumbnail rides along as a file part.
#[instrument(skip(state, admin, multipart))]
pub async fn edit(
    State(state): State<AppState>,
    RequireAuth(admin): RequireAuth,
    uri: Uri,
    multipart: Multipart,
) -> HandlerResult<Json<Ack>> {
    require_capability(&admin, &Capability::ThreadManagement, uri.path())?;
    let form = forward::into_platform_form(multipart).await?;
    state
        .platform()
        .edit_thread(form)
        .await
        .map_err(AppError::from)?;
    Ok(Ack::ok("Thread updated"))
}

/// Approves or declines a thread.
#[instrument(skip(state, admin))]
pub async fn set_approval(
    State(state): State<AppState>,
    RequireAuth(admin): RequireAuth,
    uri: Uri,
    Path(id): Path<ThreadId>,
    Json(body): Json<ApprovalRequest>,
) -> HandlerResult<Json<Ack>> {
    require_capability(&admin, &Capability::ThreadManagement, uri.path())?;
    state
        .platform()
        .set_thread_approval(&id, body.approval_status)
        .await
        .map_err(AppError::from)?;
    Ok(Ack::ok("Thread approval updated"))
}

/// Deletes a thread.
#[instrument(skip(state, admin))]
pub async fn remove(
    State(state): State<AppState>,
    RequireAuth(admin): RequireAuth,
    uri: Uri,
    Path(id): Path<ThreadId>,
) -> HandlerResult<Json<Ack>> {
    require_capability(&admin, &Capability::ThreadManagement, uri.path())?;
    state
        .platform()
        .delete_thread(&id)
        .await
        .map_err(AppError::from)?;
    Ok(Ack::ok("Thread deleted"))
}

/// Lists thread categories.
#[instrument(skip(state, admin))]
pub async fn categories(
    State(state): State<AppState>,
    RequireAuth(admin): RequireAuth,
    uri: Uri,
) -> HandlerResult<Json<Vec<Category>>> {
    require_capability(&admin, &Capability::ThreadManagement, uri.path())?;
    let categories = state
        .platform()
        .fetch_categories()
        .await
        .map_err(AppError::from)?;
    Ok(Json(categories))
}

/// Adds a thread category.
#[instrument(skip(state, admin, body))]
pub async fn add_category(
    State(state): State<AppState>,
    RequireAuth(admin): RequireAuth,
    uri: Uri,
    Json(body): Json<NewCategoryRequest>,
) -> HandlerResult<Json<Ack>> {
    require_capability(&admin, &Capability::ThreadManagement, uri.path())?;
    let category = body.category.trim();
    if category.is_empty() {
        return Err(AppError::BadRequest("category name is required".to_owned()).into());
    }
    state
        .platform()
        .add_category(category)
        .await
        .map_err(AppError::from)?;
    Ok(Ack::ok("Category added"))
}

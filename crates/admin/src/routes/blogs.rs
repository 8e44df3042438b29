//! News and blog publishing routes.

use axum::extract::{Multipart, Path, State};
use axum::http::Uri;
use axum::{Json, response::Result as HandlerResult};
use gpdn_core::types::{BlogId, Capability};
use tracing::instrument;

use crate::error::AppError;
use crate::middleware::auth::{RequireAuth, require_capability};
use crate::models::{Blog, Category};
use crate::state::AppState;

use super::{Ack, forward};

/// Lists all posts.
#[instrument(skip(state, admin))]
pub async fn index(
    State(state): State<AppState>,
    RequireAuth(admin): RequireAuth,
    uri: Uri,
) -> HandlerResult<Json<Vec<Blog>>> {
    require_capability(&admin, &Capability::NewsAndBlogsManagement, uri.path())?;
    let blogs = state
        .platform()
        .fetch_blogs()
        .await
        .map_err(AppError::from)?
        .into_iter()
        .map(Blog::into_listing)
        .collect();
    Ok(Json(blogs))
}

/// Lists the categories a post can be filed under.
#[instrument(skip(state, admin))]
pub async fn categories(
    State(state): State<AppState>,
    RequireAuth(admin): RequireAuth,
    uri: Uri,
) -> HandlerResult<Json<Vec<Category>>> {
    require_capability(&admin, &Capability::NewsAndBlogsManagement, uri.path())?;
    let categories = state
        .platform()
        .fetch_blog_categories()
        .await
        .map_err(AppError::from)?;
    Ok(Json(categories))
}

/// Publishes a post; cover image and thumbnail ride along as file parts.
#[instrument(skip(state, admin, multipart))]
pub async fn add(
    State(state): State<AppState>,
    RequireAuth(admin): RequireAuth,
    uri: Uri,
    multipart: Multipart,
) -> HandlerResult<Json<Ack>> {
    require_capability(&admin, &Capability::NewsAndBlogsManagement, uri.path())?;
    let form = forward::into_platform_form(multipart).await?;
    state
        .platform()
        .add_blog(form)
        .await
        .map_err(AppError::from)?;
    Ok(Ack::ok("Post published"))
}

/// Edits a post.
#[instrument(skip(state, admin, multipart))]
pub async fn edit(
    State(state): State<AppState>,
    RequireAuth(admin): RequireAuth,
    uri: Uri,
    multipart: Multipart,
) -> HandlerResult<Json<Ack>> {
    require_capability(&admin, &Capability::NewsAndBlogsManagement, uri.path())?;
    let form = forward::into_platform_form(multipart).await?;
    state
        .platform()
        .edit_blog(form)
        .await
        .map_err(AppError::from)?;
    Ok(Ack::ok("Post updated"))
}

/// Deletes a post.
#[instrument(skip(state, admin))]
pub async fn remove(
    State(state): State<AppState>,
    RequireAuth(admin): RequireAuth,
    uri: Uri,
    Path(id): Path<BlogId>,
) -> HandlerResult<Json<Ack>> {
    require_capability(&admin, &Capability::NewsAndBlogsManagement, uri.path())?;
    state
        .platform()
        .delete_blog(&id)
        .await
        .map_err(AppError::from)?;
    Ok(Ack::ok("Post deleted"))
}

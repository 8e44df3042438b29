//! Dashboard landing data. Visible to every signed-in admin; the
//! individual management surfaces stay capability-gated.

use axum::Json;
use axum::extract::State;
use tracing::instrument;

use crate::middleware::auth::RequireAuth;
use crate::platform::{DashboardStats, RecentActivity};
use crate::state::AppState;

/// Totals across members, threads, resources, and posts.
///
/// Endpoints the platform fails to answer count as zero rather than
/// failing the whole dashboard.
#[instrument(skip(state, _admin))]
pub async fn stats(
    State(state): State<AppState>,
    RequireAuth(_admin): RequireAuth,
) -> Json<DashboardStats> {
    Json(state.platform().fetch_dashboard_stats().await)
}

/// Recent registrations, uploads, and the monthly signup series.
#[instrument(skip(state, _admin))]
pub async fn activity(
    State(state): State<AppState>,
    RequireAuth(_admin): RequireAuth,
) -> Json<RecentActivity> {
    Json(state.platform().fetch_recent_activity().await)
}

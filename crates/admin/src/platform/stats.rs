//! Dashboard counters and recent activity.
//!
//! The dashboard degrades gracefully: a counter whose fetch fails renders
//! as zero and an activity feed renders empty, so these helpers swallow
//! per-endpoint failures instead of failing the whole page.

use serde::Serialize;
use tracing::instrument;

use crate::models::{Member, Resource};

use super::{Envelope, PlatformClient, PlatformError};

/// Entity counters shown on the dashboard landing page.
#[derive(Debug, Clone, Copy, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_members: u64,
    pub total_threads: u64,
    pub total_resources: u64,
    pub total_blogs: u64,
}

/// Recent platform activity shown on the dashboard landing page.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentActivity {
    /// Members who registered in the last day.
    pub recent_members: Vec<Member>,
    /// Resources added in the last day.
    pub recent_resources: Vec<Resource>,
    /// Members who registered in the last month.
    pub monthly_members: Vec<Member>,
}

impl PlatformClient {
    async fn fetch_count(&self, path: &str) -> u64 {
        let result: Result<Envelope<u64>, PlatformError> = self.get(path).await;
        match result.and_then(Envelope::into_data) {
            Ok(count) => count,
            Err(error) => {
                tracing::warn!(%path, %error, "Failed to fetch dashboard counter");
                0
            }
        }
    }

    /// Fetch the dashboard counters. Individual failures count as zero.
    #[instrument(skip(self))]
    pub async fn fetch_dashboard_stats(&self) -> DashboardStats {
        let (total_members, total_threads, total_resources, total_blogs) = tokio::join!(
            self.fetch_count("/api/admin/fetchTotalUsers"),
            self.fetch_count("/api/admin/fetchTotalThreads"),
            self.fetch_count("/api/admin/fetchTotalResources"),
            self.fetch_count("/api/admin/fetchTotalNewsAndBlogs"),
        );

        DashboardStats {
            total_members,
            total_threads,
            total_resources,
            total_blogs,
        }
    }

    /// Fetch recent activity. Individual failures yield empty feeds.
    #[instrument(skip(self))]
    pub async fn fetch_recent_activity(&self) -> RecentActivity {
        let (recent_members, recent_resources, monthly_members) = tokio::join!(
            self.fetch_activity_list::<Member>("/api/admin/fetchLastDayUserRegistration"),
            self.fetch_activity_list::<Resource>("/api/admin/fetchLastDayResource"),
            self.fetch_activity_list::<Member>("/api/admin/fetchLastMonthUserRegistration"),
        );

        RecentActivity {
            recent_members,
            recent_resources,
            monthly_members,
        }
    }

    async fn fetch_activity_list<T: serde::de::DeserializeOwned>(&self, path: &str) -> Vec<T> {
        let result: Result<Envelope<Vec<T>>, PlatformError> = self.get(path).await;
        match result.and_then(Envelope::into_list) {
            Ok(items) => items,
            Err(error) => {
                tracing::warn!(%path, %error, "Failed to fetch activity feed");
                Vec::new()
            }
        }
    }
}

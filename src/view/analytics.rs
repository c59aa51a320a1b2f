use std::sync::Arc;

use tokio::sync::Mutex;

use crate::analytics::AnalyticsSummary;
use crate::api::PostsApi;
use crate::notify::{Notification, Notifier};
use crate::posts::normalize_all;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyticsState {
    pub loading: bool,
    pub summary: AnalyticsSummary,
}

impl Default for AnalyticsState {
    fn default() -> Self {
        Self {
            loading: true,
            summary: AnalyticsSummary::default(),
        }
    }
}

/// Analytics screen. Loaded once when shown, never refreshed on its own.
pub struct AnalyticsViewModel {
    api: Arc<dyn PostsApi>,
    notifier: Arc<dyn Notifier>,
    state: Mutex<AnalyticsState>,
}

impl AnalyticsViewModel {
    pub fn new(api: Arc<dyn PostsApi>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            api,
            notifier,
            state: Mutex::new(AnalyticsState::default()),
        }
    }

    pub async fn snapshot(&self) -> AnalyticsState {
        self.state.lock().await.clone()
    }

    /// Returns whether the fetch succeeded
    pub async fn load(&self) -> bool {
        let result = self.api.list_posts().await;

        let mut state = self.state.lock().await;
        state.loading = false;
        match result {
            Ok(raw) => {
                let posts = normalize_all(raw);
                state.summary = AnalyticsSummary::from_posts(&posts);
                true
            }
            Err(e) => {
                drop(state);
                tracing::error!("Error fetching analytics: {}", e);
                self.notifier.notify(
                    Notification::destructive("Failed to Load Analytics")
                        .with_description("Could not load posts from server."),
                );
                false
            }
        }
    }
}

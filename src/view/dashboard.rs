use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::Refresh;
use crate::analytics::total_upvotes;
use crate::api::PostsApi;
use crate::notify::{Notification, Notifier};
use crate::posts::{normalize_all, shape, Category, CategoryFilter, Post, SortBy};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Loading,
    Ready,
    Failed,
}

/// What a single `reload` ended up doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded,
    /// Previous posts are still shown
    Failed,
    /// A newer load started while this one was in flight; its result was dropped
    Superseded,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardState {
    pub posts: Vec<Post>,
    pub phase: LoadPhase,
    pub sort_by: SortBy,
    pub filter: CategoryFilter,
    pub show_moderation: bool,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            posts: Vec::new(),
            phase: LoadPhase::Loading,
            sort_by: SortBy::default(),
            filter: CategoryFilter::default(),
            show_moderation: false,
        }
    }
}

impl DashboardState {
    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    pub fn total_voices(&self) -> usize {
        self.posts.len()
    }

    /// Over the filtered list currently shown
    pub fn total_upvotes(&self) -> u64 {
        total_upvotes(&self.posts)
    }

    pub fn category_count(&self) -> usize {
        Category::ALL.len()
    }
}

/// Dashboard screen: fetch, normalize, filter, sort.
///
/// Every input change and every successful mutation triggers a full reload.
/// Each reload takes a generation ticket; only the newest ticket may commit.
pub struct DashboardViewModel {
    api: Arc<dyn PostsApi>,
    notifier: Arc<dyn Notifier>,
    state: Mutex<DashboardState>,
    generation: AtomicU64,
}

impl DashboardViewModel {
    pub fn new(api: Arc<dyn PostsApi>, notifier: Arc<dyn Notifier>) -> Self {
        Self::with_state(api, notifier, DashboardState::default())
    }

    /// Start from a given sort and filter instead of recent/all
    pub fn with_state(
        api: Arc<dyn PostsApi>,
        notifier: Arc<dyn Notifier>,
        state: DashboardState,
    ) -> Self {
        Self {
            api,
            notifier,
            state: Mutex::new(state),
            generation: AtomicU64::new(0),
        }
    }

    pub async fn snapshot(&self) -> DashboardState {
        self.state.lock().await.clone()
    }

    pub async fn reload(&self) -> LoadOutcome {
        let (ticket, filter, sort_by) = {
            let mut state = self.state.lock().await;
            state.phase = LoadPhase::Loading;
            let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
            (ticket, state.filter, state.sort_by)
        };

        let result = self
            .api
            .list_posts()
            .await
            .map(|raw| shape(normalize_all(raw), filter, sort_by));

        let mut state = self.state.lock().await;
        if self.generation.load(Ordering::SeqCst) != ticket {
            tracing::debug!("Dropping dashboard load {}: superseded", ticket);
            return LoadOutcome::Superseded;
        }

        match result {
            Ok(posts) => {
                tracing::debug!(
                    "Dashboard load {} committed {} posts ({}, {})",
                    ticket,
                    posts.len(),
                    filter,
                    sort_by
                );
                state.posts = posts;
                state.phase = LoadPhase::Ready;
                LoadOutcome::Loaded
            }
            Err(e) => {
                state.phase = LoadPhase::Failed;
                drop(state);
                tracing::error!("Error fetching posts: {}", e);
                self.notifier.notify(
                    Notification::destructive("Failed to Load Posts")
                        .with_description("Could not load posts from server."),
                );
                LoadOutcome::Failed
            }
        }
    }

    pub async fn set_sort_by(&self, sort_by: SortBy) -> LoadOutcome {
        self.state.lock().await.sort_by = sort_by;
        self.reload().await
    }

    pub async fn set_filter(&self, filter: CategoryFilter) -> LoadOutcome {
        self.state.lock().await.filter = filter;
        self.reload().await
    }

    /// Presentation only; nothing is ever hidden, so no reload
    pub async fn set_show_moderation(&self, show: bool) {
        self.state.lock().await.show_moderation = show;
    }
}

#[async_trait]
impl Refresh for DashboardViewModel {
    async fn refresh(&self) {
        self.reload().await;
    }
}

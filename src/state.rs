use std::sync::Arc;

use crate::api::{HttpPostsApi, PostsApi};
use crate::config::Config;
use crate::error::ApiResult;
use crate::notify::Notifier;
use crate::posts::{CategoryFilter, PostId, SortBy};
use crate::view::{
    AnalyticsViewModel, DashboardState, DashboardViewModel, SubmissionForm, UpvoteHandler,
};

/// Client and notifier shared by every screen. Screens share nothing else.
#[derive(Clone)]
pub struct Board {
    pub api: Arc<dyn PostsApi>,
    pub notifier: Arc<dyn Notifier>,
}

impl Board {
    pub fn new(api: Arc<dyn PostsApi>, notifier: Arc<dyn Notifier>) -> Self {
        Self { api, notifier }
    }

    pub fn from_config(config: &Config, notifier: Arc<dyn Notifier>) -> ApiResult<Self> {
        let api = HttpPostsApi::new(&config.api)?;
        tracing::debug!("Posts API at {}", api.base_url());
        Ok(Self::new(Arc::new(api), notifier))
    }

    pub fn dashboard(&self) -> DashboardViewModel {
        DashboardViewModel::new(self.api.clone(), self.notifier.clone())
    }

    pub fn dashboard_with(&self, sort_by: SortBy, filter: CategoryFilter) -> DashboardViewModel {
        DashboardViewModel::with_state(
            self.api.clone(),
            self.notifier.clone(),
            DashboardState {
                sort_by,
                filter,
                ..DashboardState::default()
            },
        )
    }

    pub fn analytics(&self) -> AnalyticsViewModel {
        AnalyticsViewModel::new(self.api.clone(), self.notifier.clone())
    }

    pub fn submission_form(&self) -> SubmissionForm {
        SubmissionForm::new(self.api.clone(), self.notifier.clone())
    }

    pub fn upvote_handler(&self, post_id: PostId) -> UpvoteHandler {
        UpvoteHandler::new(self.api.clone(), self.notifier.clone(), post_id)
    }
}

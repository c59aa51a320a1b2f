use std::sync::Arc;

use super::{InFlight, Refresh};
use crate::api::PostsApi;
use crate::notify::{Notification, Notifier};
use crate::posts::PostId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpvoteOutcome {
    Upvoted,
    Failed,
    Busy,
}

/// Upvote button for one post.
///
/// The count is never bumped locally; a successful upvote asks the owner
/// of the list to refetch.
pub struct UpvoteHandler {
    api: Arc<dyn PostsApi>,
    notifier: Arc<dyn Notifier>,
    post_id: PostId,
    in_flight: InFlight,
}

impl UpvoteHandler {
    pub fn new(api: Arc<dyn PostsApi>, notifier: Arc<dyn Notifier>, post_id: PostId) -> Self {
        Self {
            api,
            notifier,
            post_id,
            in_flight: InFlight::new(),
        }
    }

    pub fn is_upvoting(&self) -> bool {
        self.in_flight.is_active()
    }

    pub async fn upvote(&self, on_post_updated: Option<&dyn Refresh>) -> UpvoteOutcome {
        let Some(_guard) = self.in_flight.try_acquire() else {
            return UpvoteOutcome::Busy;
        };

        match self.api.upvote_post(self.post_id).await {
            Ok(_) => {
                self.notifier.notify(Notification::info("Upvoted!"));
                if let Some(refresh) = on_post_updated {
                    refresh.refresh().await;
                }
                UpvoteOutcome::Upvoted
            }
            Err(e) => {
                tracing::warn!("Upvote of post {} failed: {}", self.post_id, e);
                self.notifier
                    .notify(Notification::destructive("Failed to upvote"));
                UpvoteOutcome::Failed
            }
        }
    }
}

use std::sync::Arc;

use tokio::sync::Mutex;

use super::{InFlight, Refresh};
use crate::api::PostsApi;
use crate::error::ValidationError;
use crate::notify::{Notification, Notifier};
use crate::posts::{normalize, Category, Post};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Submitted(Post),
    /// Rejected locally; nothing was sent
    Invalid(ValidationError),
    /// The server call failed; the fields are kept for a retry
    Failed,
    /// Another submission from this form is still in flight
    Busy,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Fields {
    message: String,
    category: Option<Category>,
}

impl Fields {
    fn validate(&self) -> Result<Category, ValidationError> {
        if self.message.trim().is_empty() {
            return Err(ValidationError::EmptyMessage);
        }
        self.category.ok_or(ValidationError::MissingCategory)
    }
}

/// "Share your voice" form
pub struct SubmissionForm {
    api: Arc<dyn PostsApi>,
    notifier: Arc<dyn Notifier>,
    fields: Mutex<Fields>,
    in_flight: InFlight,
}

impl SubmissionForm {
    pub fn new(api: Arc<dyn PostsApi>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            api,
            notifier,
            fields: Mutex::new(Fields::default()),
            in_flight: InFlight::new(),
        }
    }

    pub async fn set_message(&self, message: impl Into<String>) {
        self.fields.lock().await.message = message.into();
    }

    pub async fn set_category(&self, category: Option<Category>) {
        self.fields.lock().await.category = category;
    }

    /// Select by display name; an empty name clears the selection
    pub async fn set_category_name(&self, name: &str) -> Result<(), ValidationError> {
        let category = if name.is_empty() {
            None
        } else {
            Some(name.parse()?)
        };
        self.set_category(category).await;
        Ok(())
    }

    pub async fn message(&self) -> String {
        self.fields.lock().await.message.clone()
    }

    pub async fn category(&self) -> Option<Category> {
        self.fields.lock().await.category
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.is_active()
    }

    /// Validate, create the post, and on success clear the form and call `refresh`.
    pub async fn submit(&self, refresh: Option<&dyn Refresh>) -> SubmitOutcome {
        let Some(_guard) = self.in_flight.try_acquire() else {
            tracing::debug!("Submission already in flight");
            return SubmitOutcome::Busy;
        };

        let (message, category) = {
            let fields = self.fields.lock().await;
            match fields.validate() {
                Ok(category) => (fields.message.clone(), category),
                Err(e) => {
                    drop(fields);
                    tracing::debug!("Submission rejected: {}", e);
                    self.notifier.notify(
                        Notification::destructive("Missing info").with_description(e.to_string()),
                    );
                    return SubmitOutcome::Invalid(e);
                }
            }
        };

        match self.api.create_post(&message, category).await {
            Ok(raw) => {
                *self.fields.lock().await = Fields::default();
                self.notifier.notify(
                    Notification::info("Submitted!").with_description("Your message was shared."),
                );
                if let Some(refresh) = refresh {
                    refresh.refresh().await;
                }
                SubmitOutcome::Submitted(normalize(raw))
            }
            Err(e) => {
                tracing::error!("Error creating post: {}", e);
                self.notifier
                    .notify(Notification::destructive("Failed to submit"));
                SubmitOutcome::Failed
            }
        }
    }
}

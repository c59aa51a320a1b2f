use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Info,
    Destructive,
}

/// A short user-facing message, the way a toast would show it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: Option<String>,
    pub variant: Variant,
}

impl Notification {
    pub fn info(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            variant: Variant::Info,
        }
    }

    pub fn destructive(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            variant: Variant::Destructive,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == Variant::Destructive
    }
}

/// Where view-models send their notifications
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Buffers notifications until the front end drains them
#[derive(Debug, Default, Clone)]
pub struct NotificationQueue {
    inner: Arc<Mutex<Vec<Notification>>>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drain(&self) -> Vec<Notification> {
        match self.inner.lock() {
            Ok(mut queue) => std::mem::take(&mut *queue),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }

    pub fn titles(&self) -> Vec<String> {
        self.snapshot().into_iter().map(|n| n.title).collect()
    }

    pub fn snapshot(&self) -> Vec<Notification> {
        match self.inner.lock() {
            Ok(queue) => queue.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl Notifier for NotificationQueue {
    fn notify(&self, notification: Notification) {
        tracing::debug!("Queued notification: {}", notification.title);
        match self.inner.lock() {
            Ok(mut queue) => queue.push(notification),
            Err(poisoned) => poisoned.into_inner().push(notification),
        }
    }
}

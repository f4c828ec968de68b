//! Application state definitions

use crate::wizard::WizardController;
use std::time::{Duration, Instant};

/// Current view in the application
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    /// Store-creation wizard
    #[default]
    CreateStore,
    /// Dashboard of a store, reached after it was created
    StoreDashboard { store_id: String },
}

impl View {
    /// Resolve a router path like `/{store_id}/dashboard`. Everything in
    /// front of the `/dashboard` suffix is the id, slashes included.
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.trim_matches('/');
        if path == "create-store" {
            return Some(View::CreateStore);
        }
        path.strip_suffix("/dashboard")
            .filter(|store_id| !store_id.is_empty())
            .map(|store_id| View::StoreDashboard {
                store_id: store_id.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// Dismissible notification shown over the current view
#[derive(Debug, Clone)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    pub created_at: Instant,
}

impl Toast {
    pub fn new(kind: ToastKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            created_at: Instant::now(),
        }
    }

    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.created_at.elapsed() >= ttl
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    pub current_view: View,
    /// Live wizard; `None` once the workflow has been torn down
    pub wizard: Option<WizardController>,
    /// Newest last
    pub toasts: Vec<Toast>,
}

impl AppState {
    pub fn push_toast(&mut self, toast: Toast) {
        self.toasts.push(toast);
    }

    /// Dismiss the newest toast
    pub fn dismiss_toast(&mut self) -> bool {
        self.toasts.pop().is_some()
    }

    pub fn expire_toasts(&mut self, ttl: Duration) {
        self.toasts.retain(|t| !t.is_expired(ttl));
    }
}

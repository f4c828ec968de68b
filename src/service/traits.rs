//! Trait abstraction for the create-action boundary to enable mocking in tests

use crate::state::FormValues;
use anyhow::Result;
use async_trait::async_trait;

/// Server-side classification of a rejected create
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionKind {
    /// The name collides with an existing record
    DuplicateName,
    Other,
}

/// Answer of the create-action when the call itself went through
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionReply {
    Created { id: String },
    Rejected { kind: RejectionKind, message: String },
}

/// Persists a completed form. Transport failures are returned as `Err`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CreateAction: Send + Sync {
    async fn create(&self, values: FormValues) -> Result<ActionReply>;
}

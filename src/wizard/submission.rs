//! Submission gateway
//!
//! Sends the completed form to the create-action exactly once per attempt
//! and turns the classified outcome into a field error, a toast or a
//! navigation request.

use super::controller::{Resolution, WizardController};
use super::error::WizardError;
use crate::service::{ActionReply, CreateAction, RejectionKind};
use crate::state::FormValues;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::oneshot;

/// Why a submission did not create anything
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    /// The submitted name collides with an existing record
    #[error("{message}")]
    DuplicateName { message: String },
    /// Transport or server failure without field attribution
    #[error("{message}")]
    Failed { message: String },
}

/// Outcome of one submission attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionResult {
    Created { id: String },
    Rejected(SubmissionError),
}

impl SubmissionResult {
    /// Classify a create-action reply. Transport errors are generic failures.
    pub fn classify(reply: anyhow::Result<ActionReply>) -> Self {
        match reply {
            Ok(ActionReply::Created { id }) => SubmissionResult::Created { id },
            Ok(ActionReply::Rejected {
                kind: RejectionKind::DuplicateName,
                message,
            }) => SubmissionResult::Rejected(SubmissionError::DuplicateName { message }),
            Ok(ActionReply::Rejected {
                kind: RejectionKind::Other,
                message,
            }) => SubmissionResult::Rejected(SubmissionError::Failed { message }),
            Err(e) => SubmissionResult::Rejected(SubmissionError::Failed {
                message: format!("{e:#}"),
            }),
        }
    }
}

/// Sink for user-facing toasts
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// External router
#[cfg_attr(test, mockall::automock)]
pub trait Navigator: Send + Sync {
    /// Replace the current view with `path`
    fn replace(&self, path: &str);
}

/// Copy and routing knobs for one kind of created entity
#[derive(Debug, Clone)]
pub struct GatewayOptions {
    /// Toast shown after a successful create; empty disables it
    pub success_message: String,
    /// Toast shown for any non-conflict failure
    pub failure_message: String,
    /// Conflict message used when the server sends none
    pub duplicate_message: String,
    /// Path to navigate to for a created id
    pub redirect: fn(&str) -> String,
}

#[derive(Clone)]
pub struct SubmissionGateway {
    action: Arc<dyn CreateAction>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
    options: GatewayOptions,
}

impl SubmissionGateway {
    pub fn new(
        action: Arc<dyn CreateAction>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
        options: GatewayOptions,
    ) -> Self {
        Self {
            action,
            notifier,
            navigator,
            options,
        }
    }

    /// Call the create-action exactly once and classify its answer
    pub async fn submit(&self, values: FormValues) -> SubmissionResult {
        tracing::debug!("Submitting {} fields", values.len());
        SubmissionResult::classify(self.action.create(values).await)
    }

    /// Put the wizard into its submitting state and run [`Self::submit`] on
    /// the runtime. The wizard stays locked until the outcome is passed to
    /// [`Self::resolve`].
    pub fn dispatch(
        &self,
        wizard: &mut WizardController,
    ) -> Result<oneshot::Receiver<SubmissionResult>, WizardError> {
        let values = wizard.begin_submit()?;
        let gateway = self.clone();
        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            let result = gateway.submit(values).await;
            if tx.send(result).is_err() {
                tracing::warn!("Submission finished after its wizard was dropped");
            }
        });
        Ok(rx)
    }

    /// Apply an outcome to the wizard and fire the matching side effect
    pub fn resolve(&self, wizard: &mut WizardController, result: SubmissionResult) -> Resolution {
        let result = match result {
            SubmissionResult::Rejected(SubmissionError::DuplicateName { message })
                if message.trim().is_empty() =>
            {
                SubmissionResult::Rejected(SubmissionError::DuplicateName {
                    message: self.options.duplicate_message.clone(),
                })
            }
            other => other,
        };

        let resolution = wizard.resolve(&result);
        match &resolution {
            Resolution::Created { id } => {
                tracing::info!("Created entity {id}");
                if !self.options.success_message.is_empty() {
                    self.notifier.success(&self.options.success_message);
                }
                self.navigator.replace(&(self.options.redirect)(id));
            }
            Resolution::Conflict { field, step } => {
                tracing::info!("Conflict on '{field}', back to step {step}");
            }
            Resolution::Failed { message } => {
                tracing::warn!("Submission failed: {message}");
                self.notifier.error(&self.options.failure_message);
            }
        }
        resolution
    }
}

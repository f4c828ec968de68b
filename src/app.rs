//! Application state and core logic

use crate::config::TuiConfig;
use crate::service::{CreateAction, StoreClient};
use crate::state::{AppState, Toast, ToastKind, View};
use crate::wizard::{
    store, Advance, Navigator, Notifier, SubmissionError, SubmissionGateway, SubmissionResult,
    WizardError,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::sync::oneshot::{self, error::TryRecvError};

/// Forwards toasts into the app's event loop
struct ChannelNotifier(UnboundedSender<Toast>);

impl ChannelNotifier {
    fn send(&self, kind: ToastKind, message: &str) {
        if self.0.send(Toast::new(kind, message)).is_err() {
            tracing::debug!("Toast dropped, app is shutting down: {message}");
        }
    }
}

impl Notifier for ChannelNotifier {
    fn success(&self, message: &str) {
        self.send(ToastKind::Success, message);
    }

    fn error(&self, message: &str) {
        self.send(ToastKind::Error, message);
    }
}

/// Forwards navigation requests into the app's event loop
struct ChannelNavigator(UnboundedSender<String>);

impl Navigator for ChannelNavigator {
    fn replace(&self, path: &str) {
        if self.0.send(path.to_string()).is_err() {
            tracing::debug!("Navigation to {path} dropped, app is shutting down");
        }
    }
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Status line feedback
    pub status_message: Option<String>,
    gateway: SubmissionGateway,
    /// Outcome of the submission in flight, if any
    pending: Option<oneshot::Receiver<SubmissionResult>>,
    toasts: UnboundedReceiver<Toast>,
    routes: UnboundedReceiver<String>,
    toast_ttl: Duration,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App talking to the configured store service
    pub fn new(config: &TuiConfig) -> Result<Self> {
        let client = StoreClient::new(&config.server_address())?;
        tracing::info!("Using store service at {}", client.address());
        Self::with_action(Arc::new(client), config.toast_ttl())
    }

    /// Create an App around any create-action
    pub fn with_action(action: Arc<dyn CreateAction>, toast_ttl: Duration) -> Result<Self> {
        let (toast_tx, toasts) = mpsc::unbounded_channel();
        let (route_tx, routes) = mpsc::unbounded_channel();

        let gateway = SubmissionGateway::new(
            action,
            Arc::new(ChannelNotifier(toast_tx)),
            Arc::new(ChannelNavigator(route_tx)),
            store::gateway_options(),
        );

        let state = AppState {
            wizard: Some(store::store_wizard()?),
            ..Default::default()
        };

        Ok(Self {
            state,
            status_message: None,
            gateway,
            pending: None,
            toasts,
            routes,
            toast_ttl,
            quit: false,
        })
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn is_submitting(&self) -> bool {
        self.pending.is_some()
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.code == KeyCode::Esc && self.state.dismiss_toast() {
            return Ok(());
        }

        match self.state.current_view {
            View::CreateStore => self.handle_wizard_key(key),
            View::StoreDashboard { .. } => self.handle_dashboard_key(key)?,
        }
        Ok(())
    }

    fn handle_wizard_key(&mut self, key: KeyEvent) {
        let Some(wizard) = self.state.wizard.as_mut() else {
            return;
        };
        // Every control is disabled while the store is being saved
        if wizard.is_submitting() {
            return;
        }

        let focused_multiline = wizard
            .focused_field()
            .and_then(|name| wizard.form().field(name))
            .is_some_and(|f| f.is_multiline);

        match key.code {
            KeyCode::Tab => wizard.next_field(),
            KeyCode::BackTab => wizard.prev_field(),
            KeyCode::Enter
                if focused_multiline
                    && key
                        .modifiers
                        .intersects(KeyModifiers::SHIFT | KeyModifiers::ALT) =>
            {
                wizard.input_char('\n');
            }
            KeyCode::Enter => self.next_or_submit(),
            KeyCode::Esc => {
                wizard.retreat();
                self.status_message = None;
            }
            KeyCode::Backspace => wizard.backspace(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                wizard.input_char(c);
            }
            _ => {}
        }
    }

    fn handle_dashboard_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('n') => self.start_wizard()?,
            KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
        Ok(())
    }

    /// Advance, or submit when the last step is complete
    fn next_or_submit(&mut self) {
        let Some(wizard) = self.state.wizard.as_mut() else {
            return;
        };

        match wizard.advance() {
            Ok(Advance::Moved { to }) => {
                tracing::debug!("Wizard moved to step {to}");
                self.status_message = None;
            }
            Ok(Advance::Blocked { focus, .. }) => {
                self.status_message = Some(format!("Check the {focus} field"));
            }
            Ok(Advance::ReadyToSubmit) => self.submit(),
            Err(e) => tracing::debug!("Advance ignored: {e}"),
        }
    }

    fn submit(&mut self) {
        if self.is_submitting() {
            return;
        }
        let Some(wizard) = self.state.wizard.as_mut() else {
            return;
        };

        match self.gateway.dispatch(wizard) {
            Ok(rx) => {
                self.pending = Some(rx);
                self.status_message = Some("Saving store...".to_string());
            }
            Err(WizardError::Invalid(errors)) => {
                self.status_message = Some(format!("Check the form: {errors}"));
            }
            Err(e) => tracing::debug!("Submit ignored: {e}"),
        }
    }

    /// Drain everything the event loop has to react to: the submission
    /// outcome, toasts, navigation requests and expired toasts
    pub fn tick(&mut self) -> Result<()> {
        self.poll_submission();

        while let Ok(toast) = self.toasts.try_recv() {
            self.state.push_toast(toast);
        }
        while let Ok(path) = self.routes.try_recv() {
            self.navigate(&path)?;
        }

        self.state.expire_toasts(self.toast_ttl);
        Ok(())
    }

    fn poll_submission(&mut self) {
        let Some(rx) = self.pending.as_mut() else {
            return;
        };

        let result = match rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Closed) => {
                tracing::warn!("Submission task ended without an outcome");
                SubmissionResult::Rejected(SubmissionError::Failed {
                    message: "submission task ended without an outcome".to_string(),
                })
            }
        };

        self.pending = None;
        self.status_message = None;
        if let Some(wizard) = self.state.wizard.as_mut() {
            self.gateway.resolve(wizard, result);
        }
    }

    /// Router: switch views for a path produced by the gateway
    fn navigate(&mut self, path: &str) -> Result<()> {
        match View::from_path(path) {
            Some(View::CreateStore) => self.start_wizard()?,
            Some(view) => {
                // Leaving the wizard tears it down
                self.state.wizard = None;
                self.state.current_view = view;
            }
            None => tracing::warn!("No view for path {path}"),
        }
        Ok(())
    }

    /// Open a fresh store wizard
    fn start_wizard(&mut self) -> Result<()> {
        self.state.wizard = Some(store::store_wizard()?);
        self.state.current_view = View::CreateStore;
        self.status_message = None;
        Ok(())
    }
}

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::sync::Arc;
use std::time::Instant;

use crate::egui_app::auth::{AuthClient, ClientError};
use crate::egui_app::flow::{AuthFlow, FlowEvent, Screen};
use crate::egui_app::toast::ToastId;
use crate::egui_app::types::UserInfo;
use crate::egui_app::Config;
use crate::shared::error::SharedError;
use crate::shared::login::LoginForm;

type AuthResult = Result<UserInfo, ClientError>;

/// Central application state shared across egui views.
pub struct AppState {
    pub config: Config,
    pub flow: AuthFlow,
    pub email_input: String,
    pub password_input: String,
    /// Hint shown under the form when local validation fails
    pub form_error: Option<String>,
    pub user: Option<UserInfo>,
    client: Arc<dyn AuthClient>,
    auth_result: Option<Receiver<AuthResult>>,
}

impl AppState {
    pub fn new(config: Config, client: Arc<dyn AuthClient>) -> Self {
        tracing::debug!(server = config.server_url(), "AppState initialized");
        Self {
            config,
            flow: AuthFlow::new(),
            email_input: String::new(),
            password_input: String::new(),
            form_error: None,
            user: None,
            client,
            auth_result: None,
        }
    }

    fn apply(&mut self, event: FlowEvent, now: Instant) {
        self.flow = std::mem::take(&mut self.flow).apply(event, now);
    }

    /// Submit the login form
    ///
    /// Returns `false` when a request is already in flight or the login
    /// screen is not showing. The password buffer is cleared on every
    /// accepted submit.
    pub fn handle_login(&mut self, now: Instant) -> bool {
        if self.flow.screen() != Screen::Login {
            tracing::debug!(screen = ?self.flow.screen(), "Not on the login screen, ignoring submit");
            return false;
        }
        if self.flow.is_busy() {
            tracing::debug!("Login already in flight, ignoring submit");
            return false;
        }

        let password = std::mem::take(&mut self.password_input);
        self.form_error = None;
        self.apply(FlowEvent::SubmitStarted, now);

        let form = match LoginForm::new(self.email_input.clone(), password).validated() {
            Ok(form) => form,
            Err(e) => {
                tracing::debug!(error = %e, "Login form rejected locally");
                self.form_error = Some(match e {
                    SharedError::ValidationError { message, .. } => message,
                    other => other.to_string(),
                });
                self.apply(FlowEvent::LoginFailed, now);
                return true;
            }
        };

        let client = Arc::clone(&self.client);
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let _ = tx.send(client.login(&form));
        });

        self.auth_result = Some(rx);
        true
    }

    /// Pick up the worker's answer, if it has arrived
    pub fn check_auth_result(&mut self, now: Instant) {
        let Some(rx) = &self.auth_result else {
            return;
        };

        let result = match rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Disconnected) => {
                Err(ClientError::GraphQl("login worker exited without a result".to_string()))
            }
        };
        self.auth_result = None;

        match result {
            Ok(user) => {
                tracing::info!(email = %user.email, "Login succeeded");
                let email = user.email.clone();
                self.user = Some(user);
                self.apply(FlowEvent::LoginSucceeded { email }, now);
            }
            Err(e) => {
                tracing::warn!(error = %e, "Login failed");
                self.apply(FlowEvent::LoginFailed, now);
            }
        }
    }

    pub fn logout(&mut self, now: Instant) {
        tracing::info!("Logged out");
        self.apply(FlowEvent::Logout, now);
        self.user = None;
        self.email_input.clear();
        self.password_input.clear();
        self.form_error = None;
    }

    pub fn close_toast(&mut self, id: ToastId, now: Instant) {
        self.apply(FlowEvent::ToastClosed(id), now);
    }

    /// Per-frame housekeeping: collect results and expire the toast
    pub fn tick(&mut self, now: Instant) {
        self.check_auth_result(now);
        self.apply(FlowEvent::Tick, now);
    }
}

/**
 * Login Flow State Machine
 *
 * All screen-level state of the client lives in `AuthFlow` and changes only
 * through `AuthFlow::apply`. Views read it; `AppState` feeds it events.
 *
 * # Transitions
 *
 * | Event            | From            | Effect                                    |
 * |------------------|-----------------|-------------------------------------------|
 * | `SubmitStarted`  | Login, idle     | busy                                      |
 * | `LoginSucceeded` | Login           | Welcome, session, success toast           |
 * | `LoginFailed`    | Login           | stay on Login, error toast                |
 * | `Logout`         | Welcome         | Login, session and toast cleared          |
 * | `ToastClosed`    | any             | close that toast if still current         |
 * | `Tick`           | any             | expire the toast past its deadline        |
 *
 * Anything else is ignored.
 */

use std::time::Instant;

use crate::egui_app::toast::{Toast, ToastId, ToastKind, Toaster};
use crate::shared::messages;

/// Which screen is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Login,
    Welcome,
}

/// The signed-in user, held in memory only
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub email: String,
}

/// Inputs to the state machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowEvent {
    SubmitStarted,
    LoginSucceeded { email: String },
    LoginFailed,
    Logout,
    ToastClosed(ToastId),
    Tick,
}

/// Client UI state
#[derive(Debug, Clone, Default)]
pub struct AuthFlow {
    screen: Screen,
    session: Option<Session>,
    busy: bool,
    toaster: Toaster,
}

impl AuthFlow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one event and return the next state
    pub fn apply(mut self, event: FlowEvent, now: Instant) -> Self {
        match (event, self.screen) {
            (FlowEvent::SubmitStarted, Screen::Login) if !self.busy => {
                tracing::debug!("Login submitted");
                self.busy = true;
            }
            (FlowEvent::LoginSucceeded { email }, Screen::Login) => {
                tracing::debug!(email = %email, "Login -> Welcome");
                self.busy = false;
                self.screen = Screen::Welcome;
                self.session = Some(Session { email });
                self.toaster.show(messages::LOGIN_SUCCEEDED, ToastKind::Success, now);
            }
            (FlowEvent::LoginFailed, Screen::Login) => {
                tracing::debug!("Login failed, staying on Login");
                self.busy = false;
                self.toaster.show(messages::LOGIN_FAILED, ToastKind::Error, now);
            }
            (FlowEvent::Logout, Screen::Welcome) => {
                tracing::debug!("Welcome -> Login");
                self.screen = Screen::Login;
                self.session = None;
                self.toaster.clear();
            }
            (FlowEvent::ToastClosed(id), _) => {
                self.toaster.dismiss(id);
            }
            (FlowEvent::Tick, _) => {
                self.toaster.expire(now);
            }
            (event, screen) => {
                tracing::debug!(?event, ?screen, busy = self.busy, "Ignored flow event");
            }
        }
        self
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Whether a login request is in flight
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn toast(&self) -> Option<&Toast> {
        self.toaster.current()
    }

    pub fn toaster(&self) -> &Toaster {
        &self.toaster
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::egui_app::toast::TOAST_DURATION;
    use std::time::Duration;

    fn succeeded() -> FlowEvent {
        FlowEvent::LoginSucceeded {
            email: "ana@example.com".to_string(),
        }
    }

    #[test]
    fn test_initial_state() {
        let flow = AuthFlow::new();
        assert_eq!(flow.screen(), Screen::Login);
        assert!(flow.session().is_none());
        assert!(!flow.is_busy());
        assert!(flow.toast().is_none());
    }

    #[test]
    fn test_success_moves_to_welcome() {
        let now = Instant::now();
        let flow = AuthFlow::new()
            .apply(FlowEvent::SubmitStarted, now)
            .apply(succeeded(), now);

        assert_eq!(flow.screen(), Screen::Welcome);
        assert!(!flow.is_busy());
        assert_eq!(flow.session().unwrap().email, "ana@example.com");
        let toast = flow.toast().unwrap();
        assert_eq!(toast.message, messages::LOGIN_SUCCEEDED);
        assert_eq!(toast.kind, ToastKind::Success);
    }

    #[test]
    fn test_failure_stays_on_login() {
        let now = Instant::now();
        let flow = AuthFlow::new()
            .apply(FlowEvent::SubmitStarted, now)
            .apply(FlowEvent::LoginFailed, now);

        assert_eq!(flow.screen(), Screen::Login);
        assert!(!flow.is_busy());
        assert!(flow.session().is_none());
        let toast = flow.toast().unwrap();
        assert_eq!(toast.message, messages::LOGIN_FAILED);
        assert_eq!(toast.kind, ToastKind::Error);
    }

    #[test]
    fn test_second_submit_while_busy_is_ignored() {
        let now = Instant::now();
        let flow = AuthFlow::new().apply(FlowEvent::SubmitStarted, now);
        let again = flow.clone().apply(FlowEvent::SubmitStarted, now);
        assert!(again.is_busy());
        assert_eq!(again.screen(), flow.screen());
    }

    #[test]
    fn test_logout_clears_session_and_toast() {
        let now = Instant::now();
        let flow = AuthFlow::new()
            .apply(FlowEvent::SubmitStarted, now)
            .apply(succeeded(), now)
            .apply(FlowEvent::Logout, now + Duration::from_secs(1));

        assert_eq!(flow.screen(), Screen::Login);
        assert!(flow.session().is_none());
        assert!(flow.toast().is_none());
    }

    #[test]
    fn test_logout_on_login_screen_is_ignored() {
        let now = Instant::now();
        let flow = AuthFlow::new()
            .apply(FlowEvent::LoginFailed, now)
            .apply(FlowEvent::Logout, now);
        assert_eq!(flow.screen(), Screen::Login);
        assert!(flow.toast().is_some());
    }

    #[test]
    fn test_tick_expires_toast() {
        let now = Instant::now();
        let flow = AuthFlow::new().apply(FlowEvent::LoginFailed, now);

        let flow = flow.apply(FlowEvent::Tick, now + Duration::from_secs(3));
        assert!(flow.toast().is_some());

        let flow = flow.apply(FlowEvent::Tick, now + TOAST_DURATION);
        assert!(flow.toast().is_none());
    }

    #[test]
    fn test_toast_closed_uses_current_id_only() {
        let now = Instant::now();
        let flow = AuthFlow::new().apply(FlowEvent::LoginFailed, now);
        let stale = flow.toast().unwrap().id;

        let flow = flow.apply(FlowEvent::LoginFailed, now);
        let current = flow.toast().unwrap().id;

        let flow = flow.apply(FlowEvent::ToastClosed(stale), now);
        assert_eq!(flow.toast().map(|t| t.id), Some(current));

        let flow = flow.apply(FlowEvent::ToastClosed(current), now);
        assert!(flow.toast().is_none());
    }
}

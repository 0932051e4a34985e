//! Who is signed in.

use shared::models::User;
use std::rc::Rc;
use yewdux::prelude::Reducer;

use super::app_state::AppState;

/// Who is signed in, and whether that is still being determined.
///
/// `user` is only ever `Some` while `is_authenticated` holds; the reducer
/// drops user payloads that arrive for a signed-out session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    /// A user is signed in.
    pub is_authenticated: bool,
    /// The signed-in account.
    pub user: Option<User>,
    /// A session check or login is in flight.
    pub loading: bool,
    /// Last login, sign-up or session-check failure.
    pub error: Option<String>,
    /// Advances every time a user signs in or out. Replies to requests made
    /// for an earlier epoch are dropped (see `SessionScoped`).
    pub epoch: u64,
}

impl Default for SessionState {
    /// The app starts with a session check pending.
    fn default() -> Self {
        Self {
            is_authenticated: false,
            user: None,
            loading: true,
            error: None,
            epoch: 0,
        }
    }
}

impl SessionState {
    /// A settled, signed-out session.
    pub fn guest() -> Self {
        Self {
            loading: false,
            ..Self::default()
        }
    }

    /// The settled, signed-out session that follows this one.
    pub fn ended(&self) -> Self {
        Self {
            epoch: self.epoch.wrapping_add(1),
            ..Self::guest()
        }
    }

    /// Apply one session action.
    pub fn reduce(&mut self, action: SessionAction) {
        match action {
            SessionAction::CheckStarted | SessionAction::LoginStarted => {
                self.loading = true;
                self.error = None;
            }
            SessionAction::CheckFinished(Some(user)) | SessionAction::LoginSucceeded(user) => {
                self.is_authenticated = true;
                self.user = Some(user);
                self.loading = false;
                self.error = None;
                self.epoch = self.epoch.wrapping_add(1);
            }
            SessionAction::CheckFinished(None) => {
                *self = Self {
                    epoch: self.epoch,
                    ..Self::guest()
                };
            }
            SessionAction::LoginFailed(message) => {
                *self = Self {
                    error: Some(message),
                    epoch: self.epoch,
                    ..Self::guest()
                };
            }
            SessionAction::UserLoaded(user) => {
                if self.is_authenticated {
                    self.user = Some(user);
                } else {
                    log::warn!("ignoring user profile for a signed-out session");
                }
            }
            SessionAction::Failed(message) => {
                self.error = Some(message);
            }
        }
    }
}

/// Changes to [`SessionState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionAction {
    /// The start-up session check began.
    CheckStarted,
    /// Result of the start-up check: the user when the stored session is
    /// valid, `None` otherwise.
    CheckFinished(Option<User>),
    /// Credentials were submitted.
    LoginStarted,
    /// The credentials were accepted.
    LoginSucceeded(User),
    /// The credentials were rejected, with the reason.
    LoginFailed(String),
    /// Profile refresh for the current session.
    UserLoaded(User),
    /// A session-related request (e.g. sign-up) failed without changing
    /// who is signed in or settling a pending check.
    Failed(String),
}

impl Reducer<AppState> for SessionAction {
    fn apply(self, mut state: Rc<AppState>) -> Rc<AppState> {
        Rc::make_mut(&mut state).session.reduce(self);
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::user;

    #[test]
    fn check_with_user_authenticates() {
        let mut session = SessionState::default();
        session.reduce(SessionAction::CheckFinished(Some(user())));
        assert!(session.is_authenticated);
        assert_eq!(session.user, Some(user()));
        assert!(!session.loading);
    }

    #[test]
    fn check_without_user_settles_as_guest() {
        let mut session = SessionState::default();
        session.reduce(SessionAction::CheckFinished(None));
        assert_eq!(session, SessionState::guest());
    }

    #[test]
    fn failed_login_clears_user_and_keeps_message() {
        let mut session = SessionState::guest();
        session.reduce(SessionAction::LoginStarted);
        assert!(session.loading);
        session.reduce(SessionAction::LoginFailed("Invalid credentials".into()));
        assert!(!session.is_authenticated);
        assert!(session.user.is_none());
        assert!(!session.loading);
        assert_eq!(session.error.as_deref(), Some("Invalid credentials"));
    }

    #[test]
    fn failure_during_check_keeps_loading() {
        let mut session = SessionState::default();
        session.reduce(SessionAction::Failed("Unable to connect to server".into()));
        assert!(session.loading);
        assert!(session.error.is_some());
    }

    #[test]
    fn user_payload_for_guest_is_dropped() {
        let mut session = SessionState::guest();
        session.reduce(SessionAction::UserLoaded(user()));
        assert!(session.user.is_none());
    }

    #[test]
    fn signing_in_starts_a_new_epoch() {
        let mut session = SessionState::default();
        session.reduce(SessionAction::CheckFinished(None));
        assert_eq!(session.epoch, 0);
        session.reduce(SessionAction::LoginSucceeded(user()));
        assert_eq!(session.epoch, 1);
        session.reduce(SessionAction::LoginFailed("expired".into()));
        assert_eq!(session.epoch, 1);

        let ended = session.ended();
        assert_eq!(ended.epoch, 2);
        assert!(!ended.is_authenticated);
        assert!(!ended.loading);
    }

    #[test]
    fn generic_failure_keeps_authentication() {
        let mut session = SessionState::guest();
        session.reduce(SessionAction::LoginSucceeded(user()));
        session.reduce(SessionAction::Failed("email: already exists".into()));
        assert!(session.is_authenticated);
        assert!(!session.loading);
        assert_eq!(session.error.as_deref(), Some("email: already exists"));
    }
}

//! Session lifecycle: identity resolution, login, logout, registration.
//!
//! # Design
//! - `Pending` until the initial identity check settles; pending viewers are not authenticated.
//! - Operations return reducer actions so the provider owns every state change.
//! - Logout always clears local identity, whatever the remote outcome.

use crate::core::api::AuthApi;
use crate::core::error::ApiError;
use std::rc::Rc;
use tubestream_api_models::{LoginRequest, RegisterRequest, SessionUser};
use yew::Reducible;

/// Fallback recorded when a login fails without a server message.
pub const LOGIN_FAILED: &str = "Login failed";
/// Fallback shown by the login page.
pub const LOGIN_PAGE_FAILED: &str = "Failed to login. Please check your credentials.";
/// Fallback when registration fails without a server message.
pub const REGISTRATION_FAILED: &str = "Registration failed";

/// Where the identity check stands.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum SessionPhase {
    /// Initial identity check in flight.
    #[default]
    Pending,
    /// A user is signed in.
    Authenticated(SessionUser),
    /// No user is signed in.
    Anonymous,
}

/// Session as seen by the component tree.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct SessionState {
    /// Identity phase.
    pub phase: SessionPhase,
    /// Message from the most recent failed login.
    pub last_error: Option<String>,
}

impl SessionState {
    /// Signed-in session for `user`.
    #[must_use]
    pub const fn authenticated(user: SessionUser) -> Self {
        Self {
            phase: SessionPhase::Authenticated(user),
            last_error: None,
        }
    }

    /// Settled session with nobody signed in.
    #[must_use]
    pub const fn anonymous() -> Self {
        Self {
            phase: SessionPhase::Anonymous,
            last_error: None,
        }
    }

    /// Signed-in user, if any.
    #[must_use]
    pub const fn user(&self) -> Option<&SessionUser> {
        match &self.phase {
            SessionPhase::Authenticated(user) => Some(user),
            SessionPhase::Pending | SessionPhase::Anonymous => None,
        }
    }

    /// Whether a user is signed in. False while pending.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self.phase, SessionPhase::Authenticated(_))
    }

    /// Login page banner: the server's message, or the page's own wording for the generic failure.
    #[must_use]
    pub fn login_page_error(&self) -> Option<&str> {
        self.last_error.as_deref().map(|message| {
            if message == LOGIN_FAILED {
                LOGIN_PAGE_FAILED
            } else {
                message
            }
        })
    }

    /// Whether the identity check is still running.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self.phase, SessionPhase::Pending)
    }
}

/// Session transitions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionAction {
    /// Identity check settled.
    Resolved(Option<SessionUser>),
    /// Login succeeded.
    LoggedIn(SessionUser),
    /// Login failed; identity unchanged.
    LoginFailed(String),
    /// Identity cleared.
    SignedOut,
    /// Dismiss the last login error.
    ClearError,
}

impl Reducible for SessionState {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            SessionAction::Resolved(Some(user)) | SessionAction::LoggedIn(user) => {
                next = Self::authenticated(user);
            }
            SessionAction::Resolved(None) | SessionAction::SignedOut => {
                next = Self::anonymous();
            }
            SessionAction::LoginFailed(message) => next.last_error = Some(message),
            SessionAction::ClearError => {
                if next.last_error.is_none() {
                    return self;
                }
                next.last_error = None;
            }
        }
        Rc::new(next)
    }
}

/// Ask the service who is signed in. Any failure resolves to anonymous.
pub async fn resolve_session<A: AuthApi + ?Sized>(api: &A) -> SessionAction {
    match api.current_user().await {
        Ok(user) => {
            tracing::debug!(user = %user.id, "session resolved");
            SessionAction::Resolved(Some(user))
        }
        Err(err) => {
            tracing::debug!(error = %err, "no active session");
            SessionAction::Resolved(None)
        }
    }
}

/// Attempt a login.
///
/// # Errors
///
/// Returns the transport error; pair it with [`login_action`] to update the session.
pub async fn login<A: AuthApi + ?Sized>(
    api: &A,
    request: &LoginRequest,
) -> Result<SessionUser, ApiError> {
    api.login(request).await.inspect_err(|err| {
        tracing::warn!(error = %err, "login rejected");
    })
}

/// Session action for a login outcome.
#[must_use]
pub fn login_action(outcome: &Result<SessionUser, ApiError>) -> SessionAction {
    match outcome {
        Ok(user) => SessionAction::LoggedIn(user.clone()),
        Err(err) => SessionAction::LoginFailed(err.user_message(LOGIN_FAILED)),
    }
}

/// Sign out remotely, then clear local credentials regardless of the outcome.
pub async fn logout<A, F>(api: &A, clear_credentials: F) -> SessionAction
where
    A: AuthApi + ?Sized,
    F: FnOnce(),
{
    if let Err(err) = api.logout().await {
        tracing::warn!(error = %err, "remote logout failed; clearing local session anyway");
    }
    clear_credentials();
    SessionAction::SignedOut
}

/// Create an account. The session is left untouched.
///
/// # Errors
///
/// Returns the message to show: the server's, or [`REGISTRATION_FAILED`].
pub async fn register<A: AuthApi + ?Sized>(
    api: &A,
    request: &RegisterRequest,
) -> Result<(), String> {
    api.register(request).await.map_err(|err| {
        tracing::warn!(error = %err, "registration rejected");
        err.user_message(REGISTRATION_FAILED)
    })
}

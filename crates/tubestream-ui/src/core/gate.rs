//! Sign-in gate for viewer mutations and protected pages.

use crate::core::optimistic::{Optimistic, OptimisticAction};
use crate::core::session::SessionState;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::future::Future;

/// Query string of the login route.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginQuery {
    /// Local path to return to after signing in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
    /// Set after a successful registration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registered: Option<bool>,
}

impl LoginQuery {
    /// Query asking the login page to return to `path`.
    #[must_use]
    pub fn returning_to(path: &str) -> Self {
        Self {
            redirect: Some(sanitize_redirect(Some(path))),
            registered: None,
        }
    }

    /// Query shown right after registering.
    #[must_use]
    pub const fn after_registration() -> Self {
        Self {
            redirect: None,
            registered: Some(true),
        }
    }

    /// Where to navigate once signed in.
    #[must_use]
    pub fn destination(&self) -> String {
        sanitize_redirect(self.redirect.as_deref())
    }

    /// [`Self::destination`] split for the router.
    #[must_use]
    pub fn destination_target(&self) -> Destination {
        Destination::parse(&self.destination())
    }
}

/// Local path with its query pairs decoded, ready for `push_with_query`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Destination {
    /// Path without query or fragment.
    pub path: String,
    /// Decoded query pairs in their original order.
    pub query: Vec<(String, String)>,
}

impl Destination {
    /// Split a local href. The fragment is dropped.
    #[must_use]
    pub fn parse(href: &str) -> Self {
        let href = href.split_once('#').map_or(href, |(before, _)| before);
        let (path, raw_query) = href.split_once('?').unwrap_or((href, ""));
        let query = raw_query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                (decode_component(key), decode_component(value))
            })
            .collect();
        Self {
            path: if path.is_empty() { "/".to_string() } else { path.to_string() },
            query,
        }
    }

    /// Path and query joined back into an href.
    #[must_use]
    pub fn href(&self) -> String {
        if self.query.is_empty() {
            return self.path.clone();
        }
        let query = self
            .query
            .iter()
            .map(|(key, value)| {
                format!("{}={}", urlencoding::encode(key), urlencoding::encode(value))
            })
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{query}", self.path)
    }
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    let decoded = urlencoding::decode(&spaced).map(Cow::into_owned);
    decoded.unwrap_or(spaced)
}

/// Navigation the caller must perform instead of the gated action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginRedirect {
    /// Query for the login route.
    pub query: LoginQuery,
}

impl LoginRedirect {
    /// Full href, for links rather than router pushes.
    #[must_use]
    pub fn href(&self) -> String {
        login_href(&self.query.destination())
    }
}

/// Outcome of pressing a gated toggle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Gated<P> {
    /// Viewer must sign in first; nothing was changed.
    SignIn(LoginRedirect),
    /// A mutation on this control is already in flight, or nothing would change.
    Ignored,
    /// Apply this plan.
    Proceed(P),
}

/// Allow signed-in viewers through; everyone else, pending included, is sent to login.
///
/// # Errors
///
/// Returns the redirect to perform when nobody is signed in.
pub fn authorize(session: &SessionState, return_path: &str) -> Result<(), LoginRedirect> {
    if session.is_authenticated() {
        Ok(())
    } else {
        Err(LoginRedirect {
            query: LoginQuery::returning_to(return_path),
        })
    }
}

/// Gate a toggle press: sign-in check, in-flight check, then plan.
pub fn gate_toggle<T, P>(
    session: &SessionState,
    return_path: &str,
    value: &Optimistic<T>,
    plan: impl FnOnce(&T) -> Option<P>,
) -> Gated<P>
where
    T: Clone,
{
    if let Err(redirect) = authorize(session, return_path) {
        return Gated::SignIn(redirect);
    }
    if value.is_pending() {
        tracing::debug!("toggle ignored while a mutation is in flight");
        return Gated::Ignored;
    }
    plan(value.current()).map_or(Gated::Ignored, Gated::Proceed)
}

/// Gate a toggle press and, when it proceeds, confirm it remotely.
///
/// `begin` receives the plan before `send` is awaited so the caller can show
/// the optimistic value. Nothing is sent unless the viewer is signed in.
pub async fn press_toggle<T, P, Fut>(
    session: &SessionState,
    return_path: &str,
    value: &Optimistic<T>,
    plan: impl FnOnce(&T) -> Option<P>,
    begin: impl FnOnce(&P),
    send: impl FnOnce(P) -> Fut,
) -> Gated<OptimisticAction<T>>
where
    T: Clone,
    Fut: Future<Output = OptimisticAction<T>>,
{
    match gate_toggle(session, return_path, value, plan) {
        Gated::SignIn(redirect) => Gated::SignIn(redirect),
        Gated::Ignored => Gated::Ignored,
        Gated::Proceed(plan) => {
            begin(&plan);
            Gated::Proceed(send(plan).await)
        }
    }
}

/// `/login?redirect=<path>`.
#[must_use]
pub fn login_href(return_path: &str) -> String {
    format!(
        "/login?redirect={}",
        urlencoding::encode(&sanitize_redirect(Some(return_path)))
    )
}

/// Accept only local absolute paths; anything else becomes `/`.
#[must_use]
pub fn sanitize_redirect(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(path) if path.starts_with('/') && !path.starts_with("//") && !path.contains('\\') => {
            path.to_string()
        }
        _ => "/".to_string(),
    }
}

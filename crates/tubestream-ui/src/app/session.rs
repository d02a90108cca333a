//! Session context provider.
//!
//! # Design
//! - One reducer at the root owns the session; children read it through context.
//! - The identity check runs once on mount.

use crate::app::api::use_api;
use crate::app::preferences::clear_credentials;
use crate::app::Route;
use crate::core::gate::LoginRedirect;
use crate::core::session::{SessionState, logout, resolve_session};
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::Navigator;

/// Session handle shared with the component tree.
#[derive(Clone, PartialEq)]
pub(crate) struct SessionCtx {
    /// Reducer handle; deref for state, `dispatch` for transitions.
    pub handle: UseReducerHandle<SessionState>,
}

#[derive(Properties, PartialEq)]
pub(crate) struct SessionProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(SessionProvider)]
pub(crate) fn session_provider(props: &SessionProviderProps) -> Html {
    let api = use_api();
    let handle = use_reducer(SessionState::default);
    {
        let handle = handle.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    let action = resolve_session(&*api).await;
                    handle.dispatch(action);
                });
                || ()
            },
            (),
        );
    }
    html! {
        <ContextProvider<SessionCtx> context={SessionCtx { handle }}>
            {props.children.clone()}
        </ContextProvider<SessionCtx>>
    }
}

/// Session from the nearest provider; anonymous when rendered outside one.
#[hook]
pub(crate) fn use_session() -> UseReducerHandle<SessionState> {
    let detached = use_reducer(SessionState::anonymous);
    use_context::<SessionCtx>().map_or(detached, |ctx| ctx.handle)
}

/// Sign out and clear local credentials.
#[hook]
pub(crate) fn use_sign_out() -> Callback<()> {
    let api = use_api();
    let session = use_session();
    Callback::from(move |()| {
        let api = api.clone();
        let session = session.clone();
        spawn_local(async move {
            let action = logout(&*api, clear_credentials).await;
            session.dispatch(action);
        });
    })
}

/// Send the viewer to the login page, keeping the return path.
pub(crate) fn go_to_login(navigator: Option<&Navigator>, redirect: &LoginRedirect) {
    let Some(navigator) = navigator else {
        tracing::error!(href = %redirect.href(), "no router available for login redirect");
        return;
    };
    if let Err(err) = navigator.push_with_query(&Route::Login, &redirect.query) {
        tracing::error!(error = ?err, "login redirect failed");
    }
}

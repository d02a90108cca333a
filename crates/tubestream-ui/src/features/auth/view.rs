//! Login and registration pages.

use crate::app::Route;
use crate::app::api::use_api;
use crate::app::session::use_session;
use crate::core::gate::{Destination, LoginQuery};
use crate::core::session::{SessionAction, login, login_action, register};
use crate::features::auth::state::{LoginForm, REGISTERED_NOTICE, RegisterForm};
use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

fn input_value(event: &InputEvent) -> String {
    let input: HtmlInputElement = event.target_unchecked_into();
    input.value()
}

fn return_to(navigator: Option<&Navigator>, destination: &Destination) {
    let Some(navigator) = navigator else {
        return;
    };
    let route = Route::recognize(&destination.path).unwrap_or(Route::Home);
    if destination.query.is_empty() {
        navigator.push(&route);
    } else if let Err(err) = navigator.push_with_query(&route, &destination.query) {
        tracing::warn!(error = ?err, href = %destination.href(), "could not restore query after login");
        navigator.push(&route);
    }
}

#[function_component(LoginPage)]
pub(crate) fn login_page() -> Html {
    let api = use_api();
    let session = use_session();
    let navigator = use_navigator();
    let query = use_location()
        .and_then(|location| location.query::<LoginQuery>().ok())
        .unwrap_or_default();
    let form = use_state(LoginForm::default);
    let error = use_state(|| None::<String>);
    let busy = use_state(|| false);
    {
        let session = session.clone();
        use_effect_with_deps(
            move |_| {
                session.dispatch(SessionAction::ClearError);
                || ()
            },
            (),
        );
    }

    let on_email = {
        let form = form.clone();
        Callback::from(move |event: InputEvent| {
            let mut next = (*form).clone();
            next.email = input_value(&event);
            form.set(next);
        })
    };
    let on_password = {
        let form = form.clone();
        Callback::from(move |event: InputEvent| {
            let mut next = (*form).clone();
            next.password = input_value(&event);
            form.set(next);
        })
    };
    let on_submit = {
        let form = form.clone();
        let error = error.clone();
        let busy = busy.clone();
        let session = session.clone();
        let destination = query.destination_target();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *busy {
                return;
            }
            let request = match form.request() {
                Ok(request) => request,
                Err(err) => {
                    error.set(Some(err.to_string()));
                    return;
                }
            };
            busy.set(true);
            error.set(None);
            session.dispatch(SessionAction::ClearError);
            let api = api.clone();
            let session = session.clone();
            let navigator = navigator.clone();
            let busy = busy.clone();
            let destination = destination.clone();
            spawn_local(async move {
                let outcome = login(&*api, &request).await;
                session.dispatch(login_action(&outcome));
                busy.set(false);
                if outcome.is_ok() {
                    return_to(navigator.as_ref(), &destination);
                }
            });
        })
    };

    let banner = (*error)
        .clone()
        .or_else(|| session.login_page_error().map(str::to_string));

    html! {
        <div class="auth-page">
            <h1 class="page-title">{"Sign In"}</h1>
            {if query.registered == Some(true) {
                html! { <div class="notice success">{REGISTERED_NOTICE}</div> }
            } else {
                html! {}
            }}
            {banner.map(|message| html! {
                <div class="error-notice" role="alert">{message}</div>
            }).unwrap_or_default()}
            <form class="auth-form" onsubmit={on_submit}>
                <label>
                    <span>{"Email"}</span>
                    <input type="email" placeholder="Enter your email" value={form.email.clone()} oninput={on_email} />
                </label>
                <label>
                    <span>{"Password"}</span>
                    <input type="password" placeholder="Enter your password" value={form.password.clone()} oninput={on_password} />
                </label>
                <button type="submit" class="primary" disabled={*busy}>
                    {if *busy { "Signing in..." } else { "Sign In" }}
                </button>
            </form>
            <p class="muted">
                {"Don't have an account? "}
                <Link<Route> to={Route::Register}>{"Sign Up"}</Link<Route>>
            </p>
        </div>
    }
}

#[function_component(RegisterPage)]
pub(crate) fn register_page() -> Html {
    let api = use_api();
    let navigator = use_navigator();
    let form = use_state(RegisterForm::default);
    let error = use_state(|| None::<String>);
    let busy = use_state(|| false);

    let on_field = |apply: fn(&mut RegisterForm, String)| {
        let form = form.clone();
        Callback::from(move |event: InputEvent| {
            let mut next = (*form).clone();
            apply(&mut next, input_value(&event));
            form.set(next);
        })
    };
    let on_submit = {
        let form = form.clone();
        let error = error.clone();
        let busy = busy.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *busy {
                return;
            }
            let request = match form.request() {
                Ok(request) => request,
                Err(err) => {
                    error.set(Some(err.to_string()));
                    return;
                }
            };
            busy.set(true);
            error.set(None);
            let api = api.clone();
            let navigator = navigator.clone();
            let error = error.clone();
            let busy = busy.clone();
            spawn_local(async move {
                let outcome = register(&*api, &request).await;
                busy.set(false);
                match outcome {
                    Ok(()) => {
                        let Some(navigator) = &navigator else {
                            return;
                        };
                        let query = LoginQuery::after_registration();
                        if let Err(err) = navigator.push_with_query(&Route::Login, &query) {
                            tracing::error!(error = ?err, "post-registration redirect failed");
                        }
                    }
                    Err(message) => error.set(Some(message)),
                }
            });
        })
    };

    html! {
        <div class="auth-page">
            <h1 class="page-title">{"Create Account"}</h1>
            {(*error).clone().map(|message| html! {
                <div class="error-notice" role="alert">{message}</div>
            }).unwrap_or_default()}
            <form class="auth-form" onsubmit={on_submit}>
                <label>
                    <span>{"Username"}</span>
                    <input
                        type="text"
                        placeholder="Choose a username"
                        value={form.username.clone()}
                        oninput={on_field(|form, value| form.username = value)}
                    />
                </label>
                <label>
                    <span>{"Email"}</span>
                    <input
                        type="email"
                        placeholder="Enter your email"
                        value={form.email.clone()}
                        oninput={on_field(|form, value| form.email = value)}
                    />
                </label>
                <label>
                    <span>{"Password"}</span>
                    <input
                        type="password"
                        placeholder="Create a password"
                        value={form.password.clone()}
                        oninput={on_field(|form, value| form.password = value)}
                    />
                </label>
                <label>
                    <span>{"Confirm Password"}</span>
                    <input
                        type="password"
                        placeholder="Confirm your password"
                        value={form.confirm.clone()}
                        oninput={on_field(|form, value| form.confirm = value)}
                    />
                </label>
                <button type="submit" class="primary" disabled={*busy}>
                    {if *busy { "Creating account..." } else { "Sign Up" }}
                </button>
            </form>
            <p class="muted">
                {"Already have an account? "}
                <Link<Route> to={Route::Login}>{"Sign In"}</Link<Route>>
            </p>
        </div>
    }
}

//! Top bar with brand, search, and the account controls.
//!
//! # Design
//! - Search navigates only for non-blank input.
//! - The user menu closes on any mousedown outside it.

use crate::app::Route;
use crate::app::preferences::persist_sidebar_expanded;
use crate::app::session::{use_session, use_sign_out};
use crate::components::atoms::InitialAvatar;
use crate::core::store::UiStore;
use crate::features::search::state::SearchParams;
use gloo::events::EventListener;
use gloo::utils::document;
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, Node};
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::Dispatch;

#[function_component(Navbar)]
pub(crate) fn navbar() -> Html {
    let session = use_session();
    let sign_out = use_sign_out();
    let navigator = use_navigator();
    let query = use_state(String::new);
    let menu_open = use_state(|| false);
    let menu_ref = use_node_ref();

    {
        let menu_open = menu_open.clone();
        let menu_ref = menu_ref.clone();
        use_effect_with_deps(
            move |_| {
                let listener = EventListener::new(&document(), "mousedown", move |event| {
                    let Some(menu) = menu_ref.cast::<Node>() else {
                        return;
                    };
                    let inside = event
                        .target()
                        .and_then(|target| target.dyn_into::<Node>().ok())
                        .is_some_and(|target| menu.contains(Some(&target)));
                    if !inside {
                        menu_open.set(false);
                    }
                });
                move || drop(listener)
            },
            (),
        );
    }

    let on_input = {
        let query = query.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            query.set(input.value());
        })
    };
    let on_search = {
        let query = query.clone();
        let navigator = navigator.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let Some(params) = SearchParams::from_input(&query) else {
                return;
            };
            if let Some(navigator) = &navigator {
                if let Err(err) = navigator.push_with_query(&Route::Search, &params) {
                    tracing::error!(error = ?err, "search navigation failed");
                }
            }
        })
    };
    let toggle_sidebar = Callback::from(|_| {
        let dispatch = Dispatch::<UiStore>::new();
        dispatch.reduce_mut(|store| store.sidebar_expanded = !store.sidebar_expanded);
        persist_sidebar_expanded(dispatch.get().sidebar_expanded);
    });
    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(!*menu_open))
    };
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(false))
    };
    let on_sign_out = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| {
            sign_out.emit(());
            menu_open.set(false);
        })
    };

    let account = match session.user() {
        Some(user) => html! {
            <>
                <Link<Route> to={Route::Upload} classes="icon-button" >
                    <span aria-label="Upload">{"⇪"}</span>
                </Link<Route>>
                <div class="user-menu" ref={menu_ref}>
                    <button class="avatar-button" onclick={toggle_menu} aria-label="Account menu">
                        <InitialAvatar
                            picture={user.profile_picture.clone().map(AttrValue::from)}
                            name={user.username.clone()}
                            size={32}
                        />
                    </button>
                    {if *menu_open {
                        html! {
                            <div class="menu">
                                <div class="menu-header">
                                    <p class="strong">{user.username.clone()}</p>
                                    <p class="muted">{user.email.clone()}</p>
                                </div>
                                <div onclick={close_menu}>
                                    <Link<Route> to={Route::Channel { id: user.id.clone() }} classes="menu-item">
                                        {"Your channel"}
                                    </Link<Route>>
                                </div>
                                <button class="menu-item danger" onclick={on_sign_out}>{"Sign out"}</button>
                            </div>
                        }
                    } else {
                        html! {}
                    }}
                </div>
            </>
        },
        None => html! {
            <Link<Route> to={Route::Login} classes="sign-in">{"Sign in"}</Link<Route>>
        },
    };

    html! {
        <header class="navbar">
            <div class="navbar-left">
                <button class="icon-button" onclick={toggle_sidebar} aria-label="Toggle sidebar">{"☰"}</button>
                <Link<Route> to={Route::Home} classes="brand">
                    <span class="brand-tube">{"Tube"}</span>
                    <span class="brand-stream">{"Stream"}</span>
                </Link<Route>>
            </div>
            <form class="navbar-search" onsubmit={on_search}>
                <input
                    type="text"
                    placeholder="Search"
                    value={(*query).clone()}
                    oninput={on_input}
                />
                <button type="submit" aria-label="Search">{"⌕"}</button>
            </form>
            <div class="navbar-right">{account}</div>
        </header>
    }
}

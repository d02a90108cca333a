//! Application root: contexts, router, shell, and bootstrap.
//!
//! # Design
//! - One API client and one session reducer per boot, both provided through context.
//! - Toasts and the sidebar flag live in the yewdux [`UiStore`].

use crate::components::shell::AppShell;
use crate::core::config::ClientConfig;
use crate::core::store::{ToastKind, UiStore};
use crate::features::auth::view::{LoginPage, RegisterPage};
use crate::features::channel::view::ChannelPage;
use crate::features::home::view::HomePage;
use crate::features::search::view::SearchPage;
use crate::features::upload::view::UploadPage;
use crate::features::watch::view::WatchPage;
use crate::telemetry::{LoggingConfig, init_logging};
use api::ApiCtx;
use preferences::{load_config, load_sidebar_expanded};
pub(crate) use routes::Route;
use session::SessionProvider;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::Dispatch;

pub(crate) mod api;
pub(crate) mod hooks;
pub(crate) mod preferences;
mod routes;
pub(crate) mod session;

#[derive(Properties, PartialEq)]
pub(crate) struct TubeStreamAppProps {
    pub config: ClientConfig,
}

#[function_component(TubeStreamApp)]
pub(crate) fn tubestream_app(props: &TubeStreamAppProps) -> Html {
    let api_ctx = use_memo(ApiCtx::from_config, props.config.clone());
    use_effect_with_deps(
        |_| {
            let expanded = load_sidebar_expanded();
            Dispatch::<UiStore>::new().reduce_mut(|store| {
                store.sidebar_expanded = expanded;
            });
            || ()
        },
        (),
    );

    html! {
        <ContextProvider<ApiCtx> context={(*api_ctx).clone()}>
            <SessionProvider>
                <BrowserRouter>
                    <AppShell>
                        <Switch<Route> render={switch} />
                    </AppShell>
                </BrowserRouter>
            </SessionProvider>
        </ContextProvider<ApiCtx>>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::Category { slug } => html! { <HomePage slug={Some(slug)} /> },
        Route::Watch { id } => html! { <WatchPage key={id.clone()} {id} /> },
        Route::Channel { id } => html! { <ChannelPage key={id.clone()} {id} /> },
        Route::Search => html! { <SearchPage /> },
        Route::Upload => html! { <UploadPage /> },
        Route::Login => html! { <LoginPage /> },
        Route::Register => html! { <RegisterPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}

#[function_component(NotFoundPage)]
fn not_found_page() -> Html {
    html! {
        <section class="not-found">
            <h1>{"Page not found"}</h1>
            <p class="muted">{"The page you are looking for does not exist."}</p>
            <Link<Route> to={Route::Home} classes="btn">{"Back to home"}</Link<Route>>
        </section>
    }
}

/// Queue a toast in the shared store.
pub(crate) fn notify(kind: ToastKind, message: impl Into<String>) {
    let message = message.into();
    Dispatch::<UiStore>::new().reduce_mut(|store| {
        store.push_toast(kind, message);
    });
}

/// Entry point for the wasm bundle.
pub fn run_app() {
    console_error_panic_hook::set_once();
    let config = load_config();
    if let Err(err) = init_logging(&LoggingConfig::from(&config)) {
        gloo::console::error!(format!("logging setup failed: {err}"));
    }
    tracing::info!(api = %config.api_base_url, "tubestream ui starting");
    let props = TubeStreamAppProps { config };
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<TubeStreamApp>::with_root_and_props(root, props).render();
    } else {
        yew::Renderer::<TubeStreamApp>::with_props(props).render();
    }
}

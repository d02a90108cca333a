//! Upload page.
//!
//! # Design
//! - Signed-out viewers are sent to login; the page waits while the session is still resolving.
//! - File types are checked on pick, required inputs on submit, both before any request.

use crate::app::Route;
use crate::app::api::use_api;
use crate::app::session::{go_to_login, use_session};
use crate::components::atoms::Loading;
use crate::core::categories::UPLOAD_CATEGORIES;
use crate::core::gate::authorize;
use crate::features::upload::state::{MediaSlot, SelectedFile, UploadForm};
use crate::services::upload::upload_video;
use web_sys::{File, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

const UPLOAD_PATH: &str = "/upload";

#[function_component(UploadPage)]
pub(crate) fn upload_page() -> Html {
    let api = use_api();
    let session = use_session();
    let navigator = use_navigator();
    let form = use_state(UploadForm::<File>::default);
    let error = use_state(|| None::<String>);
    let busy = use_state(|| false);
    let progress = use_state(|| 0_u8);

    {
        let navigator = navigator.clone();
        let session = session.clone();
        use_effect_with_deps(
            move |(pending, _)| {
                if !*pending {
                    if let Err(redirect) = authorize(&session, UPLOAD_PATH) {
                        go_to_login(navigator.as_ref(), &redirect);
                    }
                }
                || ()
            },
            (session.is_pending(), session.is_authenticated()),
        );
    }

    if !session.is_authenticated() {
        return html! { <Loading /> };
    }

    let on_title = {
        let form = form.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            let mut next = (*form).clone();
            next.title = input.value();
            form.set(next);
        })
    };
    let on_description = {
        let form = form.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlTextAreaElement = event.target_unchecked_into();
            let mut next = (*form).clone();
            next.description = input.value();
            form.set(next);
        })
    };
    let on_category = {
        let form = form.clone();
        Callback::from(move |event: Event| {
            let select: HtmlSelectElement = event.target_unchecked_into();
            let mut next = (*form).clone();
            next.category = select.value();
            form.set(next);
        })
    };
    let on_pick = |slot: MediaSlot| {
        let form = form.clone();
        let error = error.clone();
        Callback::from(move |event: Event| {
            let input: HtmlInputElement = event.target_unchecked_into();
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            let picked = SelectedFile {
                name: file.name(),
                mime: file.type_(),
                size_bytes: file.size(),
                handle: file,
            };
            let mut next = (*form).clone();
            match next.pick(slot, picked) {
                Ok(()) => {
                    form.set(next);
                    error.set(None);
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        })
    };
    let on_submit = {
        let form = form.clone();
        let error = error.clone();
        let busy = busy.clone();
        let progress = progress.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *busy {
                return;
            }
            let submission = match form.submission() {
                Ok(submission) => submission,
                Err(err) => {
                    error.set(Some(err.to_string()));
                    return;
                }
            };
            busy.set(true);
            error.set(None);
            progress.set(0);
            let api = api.clone();
            let navigator = navigator.clone();
            let error = error.clone();
            let busy = busy.clone();
            let progress = progress.clone();
            spawn_local(async move {
                let on_progress = {
                    let progress = progress.clone();
                    move |percent| progress.set(percent)
                };
                match upload_video(&api, submission, on_progress).await {
                    Ok(created) => {
                        tracing::info!(video = %created.id, "upload finished");
                        if let Some(navigator) = &navigator {
                            navigator.push(&Route::Watch { id: created.id });
                        }
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
                busy.set(false);
            });
        })
    };

    html! {
        <div class="upload-page">
            <h1 class="page-title">{"Upload Video"}</h1>
            {(*error).clone().map(|message| html! {
                <div class="error-notice" role="alert">{message}</div>
            }).unwrap_or_default()}
            <form class="upload-form" onsubmit={on_submit}>
                <label>
                    <span>{"Title *"}</span>
                    <input
                        type="text"
                        placeholder="Enter video title"
                        value={form.title.clone()}
                        oninput={on_title}
                    />
                </label>
                <label>
                    <span>{"Description *"}</span>
                    <textarea
                        rows="4"
                        placeholder="Enter video description"
                        value={form.description.clone()}
                        oninput={on_description}
                    />
                </label>
                <label>
                    <span>{"Category"}</span>
                    <select onchange={on_category}>
                        {for UPLOAD_CATEGORIES.iter().map(|name| html! {
                            <option value={*name} selected={form.category == *name}>{*name}</option>
                        })}
                    </select>
                </label>
                <label>
                    <span>{"Video File *"}</span>
                    <input type="file" accept={MediaSlot::Video.accept()} onchange={on_pick(MediaSlot::Video)} />
                    {form.video.as_ref().map(|picked| html! {
                        <p class="muted small">{picked.summary_with_size()}</p>
                    }).unwrap_or_default()}
                </label>
                <label>
                    <span>{"Thumbnail *"}</span>
                    <input type="file" accept={MediaSlot::Thumbnail.accept()} onchange={on_pick(MediaSlot::Thumbnail)} />
                    {form.thumbnail.as_ref().map(|picked| html! {
                        <p class="muted small">{picked.summary()}</p>
                    }).unwrap_or_default()}
                </label>
                {if *busy {
                    html! {
                        <div class="progress" role="progressbar" aria-valuenow={progress.to_string()}>
                            <div class="progress-bar" style={format!("width: {}%", *progress)}></div>
                            <span class="muted small">{format!("{}%", *progress)}</span>
                        </div>
                    }
                } else {
                    html! {}
                }}
                <button type="submit" class="primary" disabled={*busy}>
                    {if *busy { "Uploading..." } else { "Upload" }}
                </button>
            </form>
        </div>
    }
}

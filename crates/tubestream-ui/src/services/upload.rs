//! Multipart video upload over `XMLHttpRequest` so progress events are observable.

use crate::core::api::paths;
use crate::core::error::ApiError;
use crate::features::upload::state::{UPLOAD_FAILED, UploadError, UploadSubmission, progress_percent};
use crate::services::api::ApiClient;
use futures::channel::oneshot;
use std::cell::RefCell;
use std::rc::Rc;
use tubestream_api_models::CreatedVideo;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{File, FormData, ProgressEvent, XmlHttpRequest};

type Completion = Rc<RefCell<Option<oneshot::Sender<bool>>>>;

/// Send the upload, reporting rounded progress percentages as bytes go out.
pub(crate) async fn upload_video(
    client: &ApiClient,
    submission: UploadSubmission<File>,
    on_progress: impl Fn(u8) + 'static,
) -> Result<CreatedVideo, UploadError> {
    let form = build_form(&submission).map_err(js_failure)?;
    let xhr = XmlHttpRequest::new().map_err(js_failure)?;
    xhr.open_with_async("POST", &client.url(paths::VIDEOS), true)
        .map_err(js_failure)?;
    xhr.set_with_credentials(true);

    let progress = Closure::<dyn FnMut(ProgressEvent)>::new(move |event: ProgressEvent| {
        if event.length_computable() {
            on_progress(progress_percent(event.loaded(), event.total()));
        }
    });
    xhr.upload()
        .map_err(js_failure)?
        .set_onprogress(Some(progress.as_ref().unchecked_ref()));

    let (sender, receiver) = oneshot::channel::<bool>();
    let completion: Completion = Rc::new(RefCell::new(Some(sender)));
    let on_load = completion_handler(&completion, true);
    let on_error = completion_handler(&completion, false);
    xhr.set_onload(Some(on_load.as_ref().unchecked_ref()));
    xhr.set_onerror(Some(on_error.as_ref().unchecked_ref()));

    xhr.send_with_opt_form_data(Some(&form))
        .map_err(js_failure)?;
    let delivered = receiver.await.unwrap_or(false);
    drop((progress, on_load, on_error));
    if !delivered {
        tracing::error!("upload transport failed");
        return Err(UploadError::Failed(UPLOAD_FAILED.to_string()));
    }

    let status = xhr.status().map_err(js_failure)?;
    let body = xhr.response_text().map_err(js_failure)?.unwrap_or_default();
    if !(200..300).contains(&status) {
        let err = ApiError::from_status(status, &body);
        tracing::error!(error = %err, "upload rejected");
        return Err(UploadError::Failed(err.user_message(UPLOAD_FAILED)));
    }
    serde_json::from_str::<CreatedVideo>(&body).map_err(|err| {
        tracing::error!(error = %err, "upload response did not decode");
        UploadError::Failed(UPLOAD_FAILED.to_string())
    })
}

fn build_form(submission: &UploadSubmission<File>) -> Result<FormData, JsValue> {
    let form = FormData::new()?;
    form.append_with_str("title", &submission.fields.title)?;
    form.append_with_str("description", &submission.fields.description)?;
    form.append_with_str("category", &submission.fields.category)?;
    form.append_with_blob("video", &submission.video)?;
    form.append_with_blob("thumbnail", &submission.thumbnail)?;
    Ok(form)
}

fn completion_handler(completion: &Completion, delivered: bool) -> Closure<dyn FnMut()> {
    let completion = Rc::clone(completion);
    Closure::<dyn FnMut()>::new(move || {
        if let Some(sender) = completion.borrow_mut().take() {
            let _ = sender.send(delivered);
        }
    })
}

fn js_failure(err: JsValue) -> UploadError {
    tracing::error!(error = ?err, "upload setup failed");
    UploadError::Failed(UPLOAD_FAILED.to_string())
}

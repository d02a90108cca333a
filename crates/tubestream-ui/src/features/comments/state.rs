//! Comment composer gating and list updates.

use crate::core::api::VideoApi;
use crate::core::gate::{Gated, authorize};
use crate::core::session::SessionState;
use tubestream_api_models::{Comment, NewComment};

/// Shown when posting fails without a server message.
pub const COMMENT_FAILED: &str = "Failed to post comment. Please try again.";
/// Shown for an empty list.
pub const NO_COMMENTS: &str = "No comments yet. Be the first to comment!";

/// Decide what a submit press does: sign in, nothing, or send.
#[must_use]
pub fn plan_submit(
    session: &SessionState,
    return_path: &str,
    draft: &str,
    submitting: bool,
) -> Gated<NewComment> {
    if let Err(redirect) = authorize(session, return_path) {
        return Gated::SignIn(redirect);
    }
    let content = draft.trim();
    if submitting || content.is_empty() {
        return Gated::Ignored;
    }
    Gated::Proceed(NewComment {
        content: content.to_string(),
    })
}

/// Whether the submit button is enabled.
#[must_use]
pub fn can_submit(draft: &str, submitting: bool) -> bool {
    !submitting && !draft.trim().is_empty()
}

/// Post a comment.
///
/// # Errors
///
/// Returns the message to show: the server's, or [`COMMENT_FAILED`].
pub async fn submit_comment<A: VideoApi + ?Sized>(
    api: &A,
    video_id: &str,
    comment: &NewComment,
) -> Result<Comment, String> {
    api.post_comment(video_id, comment).await.map_err(|err| {
        tracing::error!(error = %err, video = video_id, "posting comment failed");
        err.user_message(COMMENT_FAILED)
    })
}

/// Handle a submit press end to end. `begin` runs just before the request.
pub async fn submit_draft<A: VideoApi + ?Sized>(
    api: &A,
    session: &SessionState,
    return_path: &str,
    video_id: &str,
    draft: &str,
    submitting: bool,
    begin: impl FnOnce(),
) -> Gated<Result<Comment, String>> {
    match plan_submit(session, return_path, draft, submitting) {
        Gated::SignIn(redirect) => Gated::SignIn(redirect),
        Gated::Ignored => Gated::Ignored,
        Gated::Proceed(comment) => {
            begin();
            Gated::Proceed(submit_comment(api, video_id, &comment).await)
        }
    }
}

/// New comments go to the top of the list.
#[must_use]
pub fn with_new_comment(comments: &[Comment], created: Comment) -> Vec<Comment> {
    let mut next = Vec::with_capacity(comments.len() + 1);
    next.push(created);
    next.extend_from_slice(comments);
    next
}

//! Like/dislike reaction state for a single video.
//!
//! # Design
//! - One `Reaction` value per viewer and video, so like and dislike cannot both be set.
//! - Counter adjustments derive from the transition, never from two independent flags.
//! - The remote call for a transition is chosen here; the server is not trusted to enforce exclusivity.

use crate::core::api::VideoApi;
use crate::core::gate::{Gated, press_toggle};
use crate::core::optimistic::{Optimistic, OptimisticAction, settle};
use crate::core::session::SessionState;
use tubestream_api_models::{LikeStatus, Video};

/// Toast shown when a reaction change is reverted.
pub const REACTION_FAILED: &str = "Could not update reaction";

/// Viewer's reaction to a video.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Reaction {
    /// No reaction.
    #[default]
    None,
    /// Thumbs up.
    Like,
    /// Thumbs down.
    Dislike,
}

impl Reaction {
    /// Map the server's flags onto a single reaction.
    #[must_use]
    pub fn from_status(status: LikeStatus) -> Self {
        match (status.liked, status.disliked) {
            (true, true) => {
                tracing::warn!("like-status reported both flags; keeping the like");
                Self::Like
            }
            (true, false) => Self::Like,
            (false, true) => Self::Dislike,
            (false, false) => Self::None,
        }
    }

    /// Result of pressing a button: pressing the active button clears it.
    #[must_use]
    pub const fn after_press(self, press: ReactionPress) -> Self {
        match (self, press) {
            (Self::Like, ReactionPress::Like) | (Self::Dislike, ReactionPress::Dislike) => {
                Self::None
            }
            (_, ReactionPress::Like) => Self::Like,
            (_, ReactionPress::Dislike) => Self::Dislike,
        }
    }
}

/// Button pressed by the viewer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReactionPress {
    /// Thumbs-up button.
    Like,
    /// Thumbs-down button.
    Dislike,
}

/// Remote mutation backing a reaction transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReactionCall {
    /// `POST .../like`.
    Like,
    /// `DELETE .../unlike`.
    Unlike,
    /// `POST .../dislike`.
    Dislike,
    /// `DELETE .../undislike`.
    Undislike,
}

impl ReactionCall {
    /// Final path segment of the endpoint.
    #[must_use]
    pub const fn segment(self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Unlike => "unlike",
            Self::Dislike => "dislike",
            Self::Undislike => "undislike",
        }
    }

    /// Whether the endpoint expects `DELETE` rather than `POST`.
    #[must_use]
    pub const fn is_delete(self) -> bool {
        matches!(self, Self::Unlike | Self::Undislike)
    }

    /// Call needed to move from `from` to `to`, if any.
    #[must_use]
    pub const fn for_transition(from: Reaction, to: Reaction) -> Option<Self> {
        match (from, to) {
            (Reaction::Like, Reaction::Like)
            | (Reaction::Dislike, Reaction::Dislike)
            | (Reaction::None, Reaction::None) => None,
            (_, Reaction::Like) => Some(Self::Like),
            (_, Reaction::Dislike) => Some(Self::Dislike),
            (Reaction::Like, Reaction::None) => Some(Self::Unlike),
            (Reaction::Dislike, Reaction::None) => Some(Self::Undislike),
        }
    }
}

/// Displayed reaction plus counters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ReactionState {
    /// Viewer's current reaction.
    pub reaction: Reaction,
    /// Displayed like count.
    pub likes: u64,
    /// Displayed dislike count.
    pub dislikes: u64,
}

impl ReactionState {
    /// Seed from a fetched video, assuming no reaction until the status check resolves.
    #[must_use]
    pub const fn from_video(video: &Video) -> Self {
        Self {
            reaction: Reaction::None,
            likes: video.likes,
            dislikes: video.dislikes,
        }
    }

    /// Adopt the viewer's server-side reaction; counters already include it.
    #[must_use]
    pub const fn with_status(self, reaction: Reaction) -> Self {
        Self { reaction, ..self }
    }

    /// Move to `target`, adjusting counters for the reaction left and the one entered.
    #[must_use]
    pub const fn transition(self, target: Reaction) -> Self {
        let mut likes = self.likes;
        let mut dislikes = self.dislikes;
        match self.reaction {
            Reaction::Like => likes = likes.saturating_sub(1),
            Reaction::Dislike => dislikes = dislikes.saturating_sub(1),
            Reaction::None => {}
        }
        match target {
            Reaction::Like => likes = likes.saturating_add(1),
            Reaction::Dislike => dislikes = dislikes.saturating_add(1),
            Reaction::None => {}
        }
        Self {
            reaction: target,
            likes,
            dislikes,
        }
    }

    /// Whether the like button is active.
    #[must_use]
    pub const fn liked(&self) -> bool {
        matches!(self.reaction, Reaction::Like)
    }

    /// Whether the dislike button is active.
    #[must_use]
    pub const fn disliked(&self) -> bool {
        matches!(self.reaction, Reaction::Dislike)
    }
}

/// Optimistic next state and the remote call that confirms it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingReaction {
    /// State to display immediately.
    pub next: ReactionState,
    /// Mutation to issue.
    pub call: ReactionCall,
}

/// Plan the effect of a button press.
#[must_use]
pub const fn plan_press(state: ReactionState, press: ReactionPress) -> Option<PendingReaction> {
    let target = state.reaction.after_press(press);
    match ReactionCall::for_transition(state.reaction, target) {
        Some(call) => Some(PendingReaction {
            next: state.transition(target),
            call,
        }),
        None => None,
    }
}

/// Issue the mutation and translate the outcome into a reducer action.
pub async fn send_reaction<A: VideoApi + ?Sized>(
    api: &A,
    video_id: &str,
    call: ReactionCall,
) -> OptimisticAction<ReactionState> {
    let outcome = api.send_reaction(video_id, call).await;
    settle(&outcome, call.segment())
}

/// Handle a like or dislike press end to end: gate, optimistic begin, remote call.
pub async fn press_reaction<A: VideoApi + ?Sized>(
    api: &A,
    session: &SessionState,
    return_path: &str,
    value: &Optimistic<ReactionState>,
    video_id: &str,
    press: ReactionPress,
    begin: impl FnOnce(ReactionState),
) -> Gated<OptimisticAction<ReactionState>> {
    press_toggle(
        session,
        return_path,
        value,
        |current| plan_press(*current, press),
        |plan| begin(plan.next),
        |plan| send_reaction(api, video_id, plan.call),
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::{FakeApi, user_fixture, video_fixture};
    use futures::executor::block_on;

    fn seeded(likes: u64, dislikes: u64) -> ReactionState {
        ReactionState {
            reaction: Reaction::None,
            likes,
            dislikes,
        }
    }

    #[test]
    fn like_while_disliked_moves_both_counters() {
        let state = seeded(5, 2).transition(Reaction::Dislike);
        assert_eq!(state.dislikes, 3);
        let pending = plan_press(state, ReactionPress::Like).expect("press plans a call");
        assert_eq!(pending.call, ReactionCall::Like);
        assert!(pending.next.liked());
        assert!(!pending.next.disliked());
        assert_eq!(pending.next.likes, 6);
        assert_eq!(pending.next.dislikes, 2);
    }

    #[test]
    fn pressing_active_button_clears_it() {
        let liked = seeded(1, 0).transition(Reaction::Like);
        let pending = plan_press(liked, ReactionPress::Like).expect("unlike");
        assert_eq!(pending.call, ReactionCall::Unlike);
        assert_eq!(pending.next, seeded(1, 0));

        let disliked = seeded(0, 0).transition(Reaction::Dislike);
        let pending = plan_press(disliked, ReactionPress::Dislike).expect("undislike");
        assert_eq!(pending.call, ReactionCall::Undislike);
        assert_eq!(pending.next.dislikes, 0);
    }

    #[test]
    fn flags_never_both_set_across_press_sequences() {
        let presses = [ReactionPress::Like, ReactionPress::Dislike];
        for mask in 0_u32..(1 << 8) {
            let mut state = seeded(10, 10);
            for bit in 0..8 {
                let press = presses[((mask >> bit) & 1) as usize];
                if let Some(pending) = plan_press(state, press) {
                    state = pending.next;
                }
                assert!(!(state.liked() && state.disliked()));
                let expected_likes = 10 + u64::from(state.liked());
                let expected_dislikes = 10 + u64::from(state.disliked());
                assert_eq!(state.likes, expected_likes);
                assert_eq!(state.dislikes, expected_dislikes);
            }
        }
    }

    #[test]
    fn counters_saturate_at_zero() {
        let state = ReactionState {
            reaction: Reaction::Like,
            likes: 0,
            dislikes: 0,
        };
        assert_eq!(state.transition(Reaction::None).likes, 0);
    }

    #[test]
    fn status_with_both_flags_prefers_like() {
        let status = LikeStatus {
            liked: true,
            disliked: true,
        };
        assert_eq!(Reaction::from_status(status), Reaction::Like);
        assert_eq!(
            Reaction::from_status(LikeStatus {
                liked: false,
                disliked: true
            }),
            Reaction::Dislike
        );
    }

    #[test]
    fn seeding_status_keeps_server_counts() {
        let video = video_fixture("v1", "owner");
        let state = ReactionState::from_video(&video).with_status(Reaction::Like);
        assert_eq!(state.likes, video.likes);
        assert!(state.liked());
    }

    #[test]
    fn failed_mutation_rolls_back_to_snapshot() {
        let api = FakeApi::default();
        api.fail("like");
        let mut value = Optimistic::new(seeded(3, 1));
        let pending = plan_press(*value.current(), ReactionPress::Like).expect("like");
        assert!(value.begin(pending.next));
        let action = block_on(send_reaction(&api, "v1", pending.call));
        assert_eq!(action, OptimisticAction::Rollback);
        value.rollback();
        assert_eq!(*value.current(), seeded(3, 1));
        assert_eq!(api.calls(), vec!["like v1".to_string()]);
    }

    #[test]
    fn successful_mutation_commits() {
        let api = FakeApi::default();
        let action = block_on(send_reaction(&api, "v1", ReactionCall::Dislike));
        assert_eq!(action, OptimisticAction::Commit);
        assert_eq!(api.calls(), vec!["dislike v1".to_string()]);
    }

    #[test]
    fn press_sends_only_for_signed_in_viewers() {
        let api = FakeApi::default();
        let value = Optimistic::new(seeded(5, 1));
        for session in [SessionState::default(), SessionState::anonymous()] {
            for press in [ReactionPress::Like, ReactionPress::Dislike] {
                let gated = block_on(press_reaction(&api, &session, "/watch/v1", &value, "v1", press, |_| {
                    panic!("signed-out press must not begin");
                }));
                assert!(matches!(gated, Gated::SignIn(_)));
            }
        }
        assert!(api.calls().is_empty());

        let mut shown = None;
        let session = SessionState::authenticated(user_fixture("u1"));
        let gated = block_on(press_reaction(
            &api,
            &session,
            "/watch/v1",
            &value,
            "v1",
            ReactionPress::Dislike,
            |next| shown = Some(next),
        ));
        assert_eq!(gated, Gated::Proceed(OptimisticAction::Commit));
        assert!(shown.is_some_and(|next| next.disliked() && next.dislikes == 2));
        assert_eq!(api.calls(), vec!["dislike v1".to_string()]);
    }

    #[test]
    fn call_methods_match_endpoints() {
        assert!(!ReactionCall::Like.is_delete());
        assert!(ReactionCall::Unlike.is_delete());
        assert!(!ReactionCall::Dislike.is_delete());
        assert!(ReactionCall::Undislike.is_delete());
        assert_eq!(
            ReactionCall::for_transition(Reaction::Like, Reaction::Like),
            None
        );
    }
}

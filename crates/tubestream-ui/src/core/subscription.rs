//! Subscribe toggle for a channel.

use crate::core::api::ChannelApi;
use crate::core::gate::{Gated, press_toggle};
use crate::core::optimistic::{Optimistic, OptimisticAction, settle};
use crate::core::session::SessionState;

/// Toast shown when a subscription change is reverted.
pub const SUBSCRIPTION_FAILED: &str = "Could not update subscription";

/// Displayed subscription flag and subscriber count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct SubscriptionState {
    /// Viewer is subscribed.
    pub subscribed: bool,
    /// Displayed subscriber count.
    pub subscribers: u64,
}

impl SubscriptionState {
    /// Build a state.
    #[must_use]
    pub const fn new(subscribed: bool, subscribers: u64) -> Self {
        Self {
            subscribed,
            subscribers,
        }
    }

    /// Flip the flag and move the count with it, saturating at zero.
    #[must_use]
    pub const fn toggled(self) -> Self {
        if self.subscribed {
            Self::new(false, self.subscribers.saturating_sub(1))
        } else {
            Self::new(true, self.subscribers.saturating_add(1))
        }
    }

    /// Adopt the viewer's server-side flag; the fetched count already reflects it.
    #[must_use]
    pub const fn with_status(self, subscribed: bool) -> Self {
        Self::new(subscribed, self.subscribers)
    }
}

/// Remote mutation for a subscription change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubscriptionCall {
    /// `POST /api/users/subscribe/{id}`.
    Subscribe,
    /// `DELETE /api/users/unsubscribe/{id}`.
    Unsubscribe,
}

impl SubscriptionCall {
    /// Label used in logs.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Subscribe => "subscribe",
            Self::Unsubscribe => "unsubscribe",
        }
    }
}

/// Optimistic next state and the call that confirms it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingSubscription {
    /// State to display immediately.
    pub next: SubscriptionState,
    /// Mutation to issue.
    pub call: SubscriptionCall,
}

/// Plan a toggle from the displayed state.
#[must_use]
pub const fn plan_toggle(state: SubscriptionState) -> PendingSubscription {
    let call = if state.subscribed {
        SubscriptionCall::Unsubscribe
    } else {
        SubscriptionCall::Subscribe
    };
    PendingSubscription {
        next: state.toggled(),
        call,
    }
}

/// Issue the mutation for `channel_id` and translate the outcome.
pub async fn send_subscription<A: ChannelApi + ?Sized>(
    api: &A,
    channel_id: &str,
    call: SubscriptionCall,
) -> OptimisticAction<SubscriptionState> {
    let outcome = match call {
        SubscriptionCall::Subscribe => api.subscribe(channel_id).await,
        SubscriptionCall::Unsubscribe => api.unsubscribe(channel_id).await,
    };
    settle(&outcome, call.label())
}

/// Handle a subscribe press end to end: gate, optimistic begin, remote call.
pub async fn press_subscribe<A: ChannelApi + ?Sized>(
    api: &A,
    session: &SessionState,
    return_path: &str,
    value: &Optimistic<SubscriptionState>,
    channel_id: &str,
    begin: impl FnOnce(SubscriptionState),
) -> Gated<OptimisticAction<SubscriptionState>> {
    press_toggle(
        session,
        return_path,
        value,
        |current| Some(plan_toggle(*current)),
        |plan| begin(plan.next),
        |plan| send_subscription(api, channel_id, plan.call),
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::{FakeApi, user_fixture};
    use futures::executor::block_on;
    use std::cell::Cell;

    #[test]
    fn press_sends_only_for_signed_in_viewers() {
        let api = FakeApi::default();
        let value = Optimistic::new(SubscriptionState::new(false, 41));
        for session in [SessionState::default(), SessionState::anonymous()] {
            let gated = block_on(press_subscribe(&api, &session, "/channel/u2", &value, "u2", |_| {
                panic!("signed-out press must not begin");
            }));
            assert!(matches!(gated, Gated::SignIn(_)));
        }
        assert!(api.calls().is_empty());

        let shown = Cell::new(None);
        let session = SessionState::authenticated(user_fixture("u1"));
        let gated = block_on(press_subscribe(&api, &session, "/channel/u2", &value, "u2", |next| {
            shown.set(Some(next));
        }));
        assert_eq!(gated, Gated::Proceed(OptimisticAction::Commit));
        assert_eq!(shown.get(), Some(SubscriptionState::new(true, 42)));
        assert_eq!(api.calls(), vec!["subscribe u2"]);
    }

    #[test]
    fn subscribe_then_unsubscribe_restores_count() {
        let api = FakeApi::default();
        let mut value = Optimistic::new(SubscriptionState::new(false, 41));

        let first = plan_toggle(*value.current());
        assert_eq!(first.call, SubscriptionCall::Subscribe);
        assert!(value.begin(first.next));
        assert_eq!(
            block_on(send_subscription(&api, "u2", first.call)),
            OptimisticAction::Commit
        );
        value.commit();
        assert_eq!(*value.current(), SubscriptionState::new(true, 42));

        let second = plan_toggle(*value.current());
        assert_eq!(second.call, SubscriptionCall::Unsubscribe);
        assert!(value.begin(second.next));
        assert_eq!(
            block_on(send_subscription(&api, "u2", second.call)),
            OptimisticAction::Commit
        );
        value.commit();
        assert_eq!(*value.current(), SubscriptionState::new(false, 41));
        assert_eq!(api.calls(), vec!["subscribe u2", "unsubscribe u2"]);
    }

    #[test]
    fn failed_subscribe_reverts() {
        let api = FakeApi::default();
        api.fail("subscribe");
        let mut value = Optimistic::new(SubscriptionState::new(false, 0));
        let plan = plan_toggle(*value.current());
        assert!(value.begin(plan.next));
        assert!(value.current().subscribed);
        let action = block_on(send_subscription(&api, "u2", plan.call));
        assert_eq!(action, OptimisticAction::Rollback);
        value.rollback();
        assert_eq!(*value.current(), SubscriptionState::new(false, 0));
    }

    #[test]
    fn unsubscribe_saturates_at_zero() {
        let state = SubscriptionState::new(true, 0).toggled();
        assert_eq!(state, SubscriptionState::new(false, 0));
    }

    #[test]
    fn status_seeding_keeps_count() {
        let state = SubscriptionState::new(false, 9).with_status(true);
        assert_eq!(state, SubscriptionState::new(true, 9));
    }
}

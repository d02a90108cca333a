//! Fetch hook applying the generation guard.

use crate::core::fetch::{FetchGeneration, FetchState};
use std::future::Future;
use yew::platform::spawn_local;
use yew::prelude::*;

/// Run `load` whenever `key` changes; results from superseded or unmounted runs are dropped.
#[hook]
pub(crate) fn use_fetch<K, T, F, Fut>(key: K, load: F) -> UseStateHandle<FetchState<T>>
where
    K: PartialEq + Clone + 'static,
    T: 'static,
    F: FnOnce(K) -> Fut + 'static,
    Fut: Future<Output = FetchState<T>> + 'static,
{
    let state = use_state(|| FetchState::Loading);
    let generation = use_mut_ref(FetchGeneration::default);
    {
        let state = state.clone();
        use_effect_with_deps(
            move |key: &K| {
                state.set(FetchState::Loading);
                let ticket = generation.borrow_mut().begin();
                let pending = load(key.clone());
                let guard = generation.clone();
                spawn_local(async move {
                    let outcome = pending.await;
                    guard
                        .borrow()
                        .settle(ticket, outcome, |value| state.set(value));
                });
                move || generation.borrow_mut().invalidate()
            },
            key,
        );
    }
    state
}

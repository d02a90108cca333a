//! Optimistic value with snapshot and rollback.
//!
//! # Design
//! - A mutation records the pre-change value before applying the next one.
//! - Settling either drops the snapshot (commit) or restores it (rollback).
//! - Only one mutation may be in flight; a second `begin` is refused.
//! - Seeding from a later server read is ignored while a mutation is pending.

use crate::core::error::ApiError;
use std::rc::Rc;
use yew::Reducible;

/// Value plus the snapshot taken when the in-flight mutation started.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Optimistic<T> {
    current: T,
    snapshot: Option<T>,
}

impl<T: Clone> Optimistic<T> {
    /// Start from a settled value.
    #[must_use]
    pub const fn new(value: T) -> Self {
        Self {
            current: value,
            snapshot: None,
        }
    }

    /// Value as currently displayed.
    #[must_use]
    pub const fn current(&self) -> &T {
        &self.current
    }

    /// Whether a mutation is awaiting its remote outcome.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.snapshot.is_some()
    }

    /// Apply `next` optimistically. Returns `false` (and changes nothing) while pending.
    pub fn begin(&mut self, next: T) -> bool {
        if self.snapshot.is_some() {
            return false;
        }
        let previous = std::mem::replace(&mut self.current, next);
        self.snapshot = Some(previous);
        true
    }

    /// Keep the optimistic value.
    pub fn commit(&mut self) {
        self.snapshot = None;
    }

    /// Restore the value captured by `begin`.
    pub fn rollback(&mut self) {
        if let Some(previous) = self.snapshot.take() {
            self.current = previous;
        }
    }

    /// Replace the settled value with a fresh server read. Returns `false` while pending.
    pub fn seed(&mut self, value: T) -> bool {
        if self.snapshot.is_some() {
            return false;
        }
        self.current = value;
        true
    }
}

/// Reducer actions for [`Optimistic`] when held in a component.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OptimisticAction<T> {
    /// Apply a new value and keep a snapshot.
    Begin(T),
    /// Drop the snapshot.
    Commit,
    /// Restore the snapshot.
    Rollback,
    /// Replace the settled value (ignored while pending).
    Seed(T),
    /// Reset to a new settled value, discarding any pending mutation.
    Reset(T),
}

impl<T: Clone> Reducible for Optimistic<T> {
    type Action = OptimisticAction<T>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            OptimisticAction::Begin(value) => {
                if !next.begin(value) {
                    return self;
                }
            }
            OptimisticAction::Commit => next.commit(),
            OptimisticAction::Rollback => next.rollback(),
            OptimisticAction::Seed(value) => {
                if !next.seed(value) {
                    return self;
                }
            }
            OptimisticAction::Reset(value) => next = Self::new(value),
        }
        Rc::new(next)
    }
}

/// Map a remote mutation outcome onto the matching reducer action, logging failures.
pub fn settle<T>(outcome: &Result<(), ApiError>, what: &'static str) -> OptimisticAction<T> {
    match outcome {
        Ok(()) => OptimisticAction::Commit,
        Err(err) => {
            tracing::error!(error = %err, mutation = what, "mutation failed; reverting optimistic state");
            OptimisticAction::Rollback
        }
    }
}

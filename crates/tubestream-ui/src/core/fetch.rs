//! Fetch view state and the generation guard that drops stale results.
//!
//! # Design
//! - Each fetch takes a ticket when dispatched; only the newest ticket may apply its result.
//! - Invalidation bumps the generation, so an unmount or key change discards anything outstanding.
//! - Not-found is its own state rather than an error message.

use crate::core::error::ApiError;

/// View state for one fetched entity.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum FetchState<T> {
    /// Request in flight.
    #[default]
    Loading,
    /// Request failed; the message is ready for display.
    Failed(String),
    /// The service has no such entity.
    NotFound,
    /// Data is available.
    Ready(T),
}

impl<T> FetchState<T> {
    /// Map a list-style result; failures log and show `fallback`.
    #[must_use]
    pub fn from_result(result: Result<T, ApiError>, fallback: &str) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(err) => {
                tracing::warn!(error = %err, "fetch failed");
                Self::Failed(fallback.to_string())
            }
        }
    }

    /// Map a lookup where an empty answer or a 404 means not found.
    #[must_use]
    pub fn from_lookup(result: Result<Option<T>, ApiError>, fallback: &str) -> Self {
        match result {
            Ok(Some(value)) => Self::Ready(value),
            Ok(None) => Self::NotFound,
            Err(err) if err.is_not_found() => Self::NotFound,
            Err(err) => {
                tracing::warn!(error = %err, "lookup failed");
                Self::Failed(fallback.to_string())
            }
        }
    }

    /// Loaded data, if any.
    #[must_use]
    pub const fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }
}

/// Ticket captured when a fetch is dispatched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// Monotonic counter deciding which fetch may still apply its result.
#[derive(Debug, Default)]
pub struct FetchGeneration {
    current: u64,
}

impl FetchGeneration {
    /// Start a fetch, superseding any earlier one.
    pub const fn begin(&mut self) -> FetchTicket {
        self.current = self.current.wrapping_add(1);
        FetchTicket(self.current)
    }

    /// Whether `ticket` belongs to the newest fetch.
    #[must_use]
    pub const fn is_current(&self, ticket: FetchTicket) -> bool {
        self.current == ticket.0
    }

    /// Discard every outstanding ticket.
    pub const fn invalidate(&mut self) {
        self.current = self.current.wrapping_add(1);
    }

    /// Apply `value` through `apply` only if `ticket` is still current.
    pub fn settle<T>(&self, ticket: FetchTicket, value: T, apply: impl FnOnce(T)) -> bool {
        if self.is_current(ticket) {
            apply(value);
            true
        } else {
            tracing::debug!("dropping stale fetch result");
            false
        }
    }
}

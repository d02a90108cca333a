//! App-wide yewdux store.
//!
//! # Design
//! - Holds only cross-cutting UI state: toasts and the sidebar toggle.
//! - Session identity lives in its own context, not here.

use yewdux::store::Store;

/// Maximum number of toasts kept on screen.
pub const MAX_TOASTS: usize = 4;
/// Toast lifetime in milliseconds.
pub const TOAST_TIMEOUT_MS: u32 = 4_000;

/// Toast severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    /// Informational.
    Info,
    /// Success confirmation.
    Success,
    /// Failure.
    Error,
}

/// Toast payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Monotonic identifier.
    pub id: u64,
    /// Display text.
    pub message: String,
    /// Severity.
    pub kind: ToastKind,
}

/// Shared UI state.
#[derive(Clone, Debug, PartialEq, Eq, Store)]
pub struct UiStore {
    /// Visible toasts, oldest first.
    pub toasts: Vec<Toast>,
    /// Last issued toast id.
    pub next_toast_id: u64,
    /// Sidebar shows labels.
    pub sidebar_expanded: bool,
}

impl Default for UiStore {
    fn default() -> Self {
        Self {
            toasts: Vec::new(),
            next_toast_id: 0,
            sidebar_expanded: true,
        }
    }
}

impl UiStore {
    /// Append a toast, dropping the oldest beyond [`MAX_TOASTS`].
    pub fn push_toast(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.next_toast_id += 1;
        let id = self.next_toast_id;
        self.toasts.push(Toast {
            id,
            message: message.into(),
            kind,
        });
        if self.toasts.len() > MAX_TOASTS {
            let excess = self.toasts.len() - MAX_TOASTS;
            self.toasts.drain(0..excess);
        }
        id
    }

    /// Remove a toast by id.
    pub fn dismiss_toast(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }
}

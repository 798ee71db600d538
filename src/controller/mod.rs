//! Resource lifecycle controllers.
//!
//! Each surface of the client owns one controller instance holding its
//! fetched state. Controllers run on a single logical task: every
//! operation is an `&mut self` async call, so state changes only between
//! that call's own await points, and a completed load always replaces the
//! held items wholesale. Mutation patches are keyed by id and commute
//! with wholesale loads; the one ordering callers must avoid themselves
//! is issuing a reload that races a delete, which is why every delete
//! path here reconciles by patching.

pub mod detail;
pub mod list;
pub mod notifications;

pub use detail::{DetailController, DetailStatus};
pub use list::{ListController, ListStatus};
pub use notifications::ReadStateController;

/// How a mutation's success folds back into locally held state.
///
/// Declared per operation as an associated const, so the strategy is part
/// of the controller's contract rather than an incidental implementation
/// choice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reconcile {
    /// Patch the held items by id. A patched-out item can never be
    /// resurrected by a slow concurrent fetch.
    Patch,
    /// Replace local state with a fresh authoritative fetch.
    Reload,
}

/// Result of a confirmation-gated delete.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Deleted server-side and reconciled locally.
    Deleted,
    /// The user declined the confirmation; nothing was sent.
    Declined,
    /// The ownership gate rejected the request; nothing was sent.
    NotPermitted,
    /// The backend rejected the call or it failed in transit.
    Failed,
}

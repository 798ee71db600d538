//! List surface over one REST collection.

use crate::api::ResourceClient;
use crate::confirm::Confirmation;
use crate::models::OwnedResource;
use crate::notify::Notifier;
use crate::ownership;

use super::{DeleteOutcome, Reconcile};

/// Lifecycle of the fetched collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListStatus {
    /// Fetch in flight; render a placeholder, not stale content.
    Loading,
    /// Items reflect the latest completed fetch.
    Ready,
    /// The last fetch failed; content rendering stays blocked.
    Error,
}

/// Holds the fetched items for a collection view and reconciles them
/// after mutations. Identity is injected at construction; the controller
/// never consults ambient state.
pub struct ListController<C: ResourceClient, N: Notifier> {
    client: C,
    notifier: N,
    current_user: Option<String>,
    filter: Option<String>,
    items: Vec<C::Resource>,
    status: ListStatus,
}

impl<C: ResourceClient, N: Notifier> ListController<C, N> {
    /// Delete reconciles by patching, never by reloading, so a deleted id
    /// cannot reappear behind a stale concurrent fetch.
    pub const DELETE_RECONCILE: Reconcile = Reconcile::Patch;

    pub fn new(client: C, notifier: N, current_user: Option<String>) -> Self {
        Self {
            client,
            notifier,
            current_user,
            filter: None,
            items: Vec::new(),
            status: ListStatus::Loading,
        }
    }

    /// Opaque server-side filter passed through on every load.
    pub fn with_filter(mut self, filter: Option<String>) -> Self {
        self.filter = filter;
        self
    }

    pub fn items(&self) -> &[C::Resource] {
        &self.items
    }

    pub fn status(&self) -> ListStatus {
        self.status
    }

    /// Whether edit/delete affordances are shown for `resource`.
    pub fn can_mutate(&self, resource: &C::Resource) -> bool {
        ownership::can_mutate(self.current_user.as_deref(), resource)
    }

    /// Authoritative fetch. Success replaces the items wholesale; failure
    /// keeps the previous items, flips the status to [`ListStatus::Error`]
    /// and emits exactly one failure notification.
    pub async fn load_all(&mut self) {
        self.status = ListStatus::Loading;
        match self.client.list(self.filter.as_deref()).await {
            Ok(items) => {
                self.items = items;
                self.status = ListStatus::Ready;
            }
            Err(err) => {
                self.status = ListStatus::Error;
                self.notifier
                    .error(&format!("Failed to load {}s: {err}", self.client.label()));
            }
        }
    }

    /// Confirmation-gated delete. A decline is a no-op: no network call,
    /// items untouched. On success the item is patched out of the held
    /// list without a refetch.
    pub async fn request_delete(&mut self, id: &str, confirm: &dyn Confirmation) -> DeleteOutcome {
        let label = self.client.label();
        if !confirm.confirm(&format!("Are you sure you want to delete this {label}?")) {
            return DeleteOutcome::Declined;
        }
        match self.client.delete(id).await {
            Ok(()) => {
                match Self::DELETE_RECONCILE {
                    Reconcile::Patch => self.items.retain(|item| item.id() != id),
                    Reconcile::Reload => self.load_all().await,
                }
                self.notifier.success(&format!("Deleted {label} {id}"));
                DeleteOutcome::Deleted
            }
            Err(err) => {
                self.notifier
                    .error(&format!("Failed to delete {label}: {err}"));
                DeleteOutcome::Failed
            }
        }
    }
}

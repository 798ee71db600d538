//! Single-resource surface with owner-gated destructive actions.

use crate::api::ResourceClient;
use crate::confirm::Confirmation;
use crate::error::ApiError;
use crate::models::OwnedResource;
use crate::notify::Notifier;
use crate::ownership;

use super::{DeleteOutcome, Reconcile};

/// Render state for the detail view. Failure messages render in place of
/// the content, not through the notifier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DetailStatus {
    Loading,
    Ready,
    /// The id does not exist server-side; kept distinct from other
    /// failures so the view can say so.
    NotFound(String),
    /// The load failed for any other reason.
    Error(String),
    /// Deleted through this controller; the view's context is gone and
    /// the caller must navigate away.
    Gone,
}

pub struct DetailController<C: ResourceClient, N: Notifier> {
    client: C,
    notifier: N,
    current_user: Option<String>,
    resource: Option<C::Resource>,
    status: DetailStatus,
}

impl<C: ResourceClient, N: Notifier> DetailController<C, N> {
    /// Returning from an edit flow re-fetches the resource; pre-edit
    /// local fields are never trusted.
    pub const EDIT_RETURN_RECONCILE: Reconcile = Reconcile::Reload;

    pub fn new(client: C, notifier: N, current_user: Option<String>) -> Self {
        Self {
            client,
            notifier,
            current_user,
            resource: None,
            status: DetailStatus::Loading,
        }
    }

    pub fn resource(&self) -> Option<&C::Resource> {
        self.resource.as_ref()
    }

    pub fn status(&self) -> &DetailStatus {
        &self.status
    }

    /// Whether edit/delete affordances are shown for the loaded resource.
    pub fn can_mutate(&self) -> bool {
        self.resource
            .as_ref()
            .is_some_and(|resource| ownership::can_mutate(self.current_user.as_deref(), resource))
    }

    pub async fn load(&mut self, id: &str) {
        self.status = DetailStatus::Loading;
        self.resource = None;
        match self.client.get(id).await {
            Ok(resource) => {
                self.resource = Some(resource);
                self.status = DetailStatus::Ready;
            }
            Err(ApiError::NotFound(message)) => {
                self.status = DetailStatus::NotFound(message);
            }
            Err(err) => {
                self.status = DetailStatus::Error(err.to_string());
            }
        }
    }

    /// Re-sync after an edit flow handed control back.
    pub async fn reload_after_edit(&mut self, id: &str) {
        match Self::EDIT_RETURN_RECONCILE {
            Reconcile::Reload => self.load(id).await,
            // Patching here would keep pre-edit fields; the server copy
            // wins instead.
            Reconcile::Patch => {}
        }
    }

    /// Owner- and confirmation-gated delete. A guard rejection issues no
    /// network call.
    pub async fn delete(&mut self, confirm: &dyn Confirmation) -> DeleteOutcome {
        let label = self.client.label();
        let Some(resource) = self.resource.as_ref() else {
            self.notifier
                .error(&format!("No {label} loaded to delete"));
            return DeleteOutcome::NotPermitted;
        };
        if !ownership::can_mutate(self.current_user.as_deref(), resource) {
            self.notifier
                .error(&format!("Only the owner can delete this {label}"));
            return DeleteOutcome::NotPermitted;
        }
        if !confirm.confirm(&format!("Are you sure you want to delete this {label}?")) {
            return DeleteOutcome::Declined;
        }
        let id = resource.id().to_string();
        match self.client.delete(&id).await {
            Ok(()) => {
                self.resource = None;
                self.status = DetailStatus::Gone;
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

//! Notification inbox with per-item read transitions.

use crate::api::NotificationClient;
use crate::models::Notification;
use crate::notify::Notifier;

use super::Reconcile;
use super::list::ListStatus;

/// Inbox for one recipient.
///
/// Every operation is scoped to the user id the controller was built
/// with; recipient scoping is the ownership gate here, so there is no
/// per-item guard. Within the held items the read flag only ever moves
/// unread to read; loads replace the snapshot wholesale and are the only
/// way a flag can appear unread again.
pub struct ReadStateController<C: NotificationClient, N: Notifier> {
    client: C,
    notifier: N,
    user_id: String,
    items: Vec<Notification>,
    status: ListStatus,
}

impl<C: NotificationClient, N: Notifier> ReadStateController<C, N> {
    /// Marking one item patches the one flag locally; no refetch.
    pub const MARK_READ_RECONCILE: Reconcile = Reconcile::Patch;
    /// The bulk operation's exact scope is server-defined, so the
    /// follow-up is an authoritative reload rather than a local guess.
    pub const MARK_ALL_READ_RECONCILE: Reconcile = Reconcile::Reload;
    /// Removal filters the item out locally; no refetch.
    pub const REMOVE_RECONCILE: Reconcile = Reconcile::Patch;

    pub fn new(client: C, notifier: N, user_id: String) -> Self {
        Self {
            client,
            notifier,
            user_id,
            items: Vec::new(),
            status: ListStatus::Loading,
        }
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn status(&self) -> ListStatus {
        self.status
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.read).count()
    }

    /// Fetch every notification for the user; wholesale replacement.
    pub async fn load(&mut self) {
        self.status = ListStatus::Loading;
        match self.client.list_for_user(&self.user_id).await {
            Ok(items) => {
                self.items = items;
                self.status = ListStatus::Ready;
            }
            Err(err) => {
                self.status = ListStatus::Error;
                self.notifier
                    .error(&format!("Failed to fetch notifications: {err}"));
            }
        }
    }

    /// Fetch only unread notifications; wholesale replacement.
    pub async fn load_unread(&mut self) {
        self.status = ListStatus::Loading;
        match self.client.unread_for_user(&self.user_id).await {
            Ok(items) => {
                self.items = items;
                self.status = ListStatus::Ready;
            }
            Err(err) => {
                self.status = ListStatus::Error;
                self.notifier
                    .error(&format!("Failed to fetch notifications: {err}"));
            }
        }
    }

    /// Flip one notification to read. Safe to repeat: the endpoint is
    /// idempotent and the local flag only moves unread to read.
    pub async fn mark_read(&mut self, id: &str) -> bool {
        match self.client.mark_read(id, &self.user_id).await {
            Ok(()) => {
                match Self::MARK_READ_RECONCILE {
                    Reconcile::Patch => {
                        if let Some(item) = self.items.iter_mut().find(|n| n.id == id) {
                            item.read = true;
                        }
                    }
                    Reconcile::Reload => self.load().await,
                }
                true
            }
            Err(err) => {
                self.notifier
                    .error(&format!("Failed to mark notification as read: {err}"));
                false
            }
        }
    }

    /// Mark the whole inbox read, then resync from the server.
    pub async fn mark_all_read(&mut self) -> bool {
        match self.client.mark_all_read(&self.user_id).await {
            Ok(()) => {
                match Self::MARK_ALL_READ_RECONCILE {
                    Reconcile::Reload => self.load().await,
                    Reconcile::Patch => {
                        for item in &mut self.items {
                            item.read = true;
                        }
                    }
                }
                self.notifier.success("All notifications marked as read");
                true
            }
            Err(err) => {
                self.notifier
                    .error(&format!("Failed to mark notifications as read: {err}"));
                false
            }
        }
    }

    /// Delete one notification; read and unread items both leave the
    /// inbox.
    pub async fn remove(&mut self, id: &str) -> bool {
        match self.client.delete(id, &self.user_id).await {
            Ok(()) => {
                match Self::REMOVE_RECONCILE {
                    Reconcile::Patch => self.items.retain(|n| n.id != id),
                    Reconcile::Reload => self.load().await,
                }
                self.notifier.success("Notification removed");
                true
            }
            Err(err) => {
                self.notifier
                    .error(&format!("Failed to remove notification: {err}"));
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::test_helpers::{FakeInbox, RecordingNotifier, sample_notification};

    fn controller(
        items: Vec<Notification>,
    ) -> (
        ReadStateController<FakeInbox, RecordingNotifier>,
        FakeInbox,
        RecordingNotifier,
    ) {
        let api = FakeInbox::new(items);
        let notifier = RecordingNotifier::default();
        let controller =
            ReadStateController::new(api.clone(), notifier.clone(), "u1".to_string());
        (controller, api, notifier)
    }

    #[tokio::test]
    async fn load_scopes_to_the_recipient() {
        let (mut controller, _, _) = controller(vec![
            sample_notification("n1", "u1", false),
            sample_notification("n2", "u2", false),
        ]);
        controller.load().await;
        assert_eq!(controller.status(), ListStatus::Ready);
        assert_eq!(controller.items().len(), 1);
        assert_eq!(controller.items()[0].id, "n1");
    }

    #[tokio::test]
    async fn load_unread_filters_read_items() {
        let (mut controller, _, _) = controller(vec![
            sample_notification("n1", "u1", true),
            sample_notification("n2", "u1", false),
        ]);
        controller.load_unread().await;
        assert_eq!(controller.items().len(), 1);
        assert_eq!(controller.items()[0].id, "n2");
    }

    #[tokio::test]
    async fn failed_load_keeps_items_and_reports_once() {
        let (mut controller, api, notifier) =
            controller(vec![sample_notification("n1", "u1", false)]);
        controller.load().await;

        api.fail_next(ApiError::Network("connection refused".to_string()));
        controller.load().await;

        assert_eq!(controller.status(), ListStatus::Error);
        assert_eq!(controller.items().len(), 1);
        assert_eq!(notifier.errors().len(), 1);
    }

    #[tokio::test]
    async fn mark_read_flips_exactly_one_item() {
        let (mut controller, api, _) = controller(vec![
            sample_notification("n1", "u1", false),
            sample_notification("n2", "u1", false),
        ]);
        controller.load().await;
        assert_eq!(controller.unread_count(), 2);

        assert!(controller.mark_read("n1").await);

        assert!(controller.items()[0].read);
        assert!(!controller.items()[1].read, "other items must keep their state");
        assert_eq!(controller.unread_count(), 1);
        // Patch reconciliation: no refetch after the flip.
        assert_eq!(api.calls(), vec!["list u1", "mark_read n1 u1"]);
    }

    #[tokio::test]
    async fn mark_read_is_idempotent() {
        let (mut controller, _, notifier) =
            controller(vec![sample_notification("n1", "u1", true)]);
        controller.load().await;

        assert!(controller.mark_read("n1").await);
        assert!(controller.items()[0].read);
        assert!(notifier.errors().is_empty());
    }

    #[tokio::test]
    async fn failed_mark_read_changes_nothing() {
        let (mut controller, api, notifier) =
            controller(vec![sample_notification("n1", "u1", false)]);
        controller.load().await;

        api.fail_next(ApiError::Network("timed out".to_string()));
        assert!(!controller.mark_read("n1").await);

        assert!(!controller.items()[0].read);
        assert_eq!(notifier.errors().len(), 1);
    }

    #[tokio::test]
    async fn mark_all_read_reloads_from_the_server() {
        let (mut controller, api, notifier) = controller(vec![
            sample_notification("n1", "u1", false),
            sample_notification("n2", "u1", false),
        ]);
        controller.load().await;

        assert!(controller.mark_all_read().await);

        assert_eq!(controller.unread_count(), 0);
        assert!(controller.items().iter().all(|n| n.read));
        // Reload reconciliation: the bulk call is followed by a fresh list.
        assert_eq!(api.calls(), vec!["list u1", "mark_all u1", "list u1"]);
        assert_eq!(notifier.successes().len(), 1);
    }

    #[tokio::test]
    async fn remove_patches_the_item_out() {
        let (mut controller, api, _) = controller(vec![
            sample_notification("n1", "u1", true),
            sample_notification("n2", "u1", false),
        ]);
        controller.load().await;

        assert!(controller.remove("n1").await);

        assert_eq!(controller.items().len(), 1);
        assert_eq!(controller.items()[0].id, "n2");
        assert_eq!(api.calls(), vec!["list u1", "delete n1 u1"]);
    }

    #[tokio::test]
    async fn failed_remove_keeps_the_item() {
        let (mut controller, api, notifier) =
            controller(vec![sample_notification("n1", "u1", false)]);
        controller.load().await;

        api.fail_next(ApiError::NotFound("already gone".to_string()));
        assert!(!controller.remove("n1").await);

        assert_eq!(controller.items().len(), 1);
        assert!(notifier.errors()[0].contains("already gone"));
    }
}

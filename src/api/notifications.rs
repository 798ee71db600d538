//! `/notifications` routes.
//!
//! These do not follow the plain collection shape: every route is scoped
//! to a recipient, and read-state transitions are dedicated endpoints
//! rather than document updates.

use std::sync::Arc;

use crate::error::ApiResult;
use crate::models::Notification;

use super::NotificationClient;
use super::http::Http;

#[derive(Clone)]
pub struct NotificationHttpClient {
    http: Arc<Http>,
}

impl NotificationHttpClient {
    pub(crate) fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

impl NotificationClient for NotificationHttpClient {
    async fn list_for_user(&self, user_id: &str) -> ApiResult<Vec<Notification>> {
        self.http
            .get_json(&format!("/notifications/user/{user_id}"), None)
            .await
    }

    async fn unread_for_user(&self, user_id: &str) -> ApiResult<Vec<Notification>> {
        self.http
            .get_json(&format!("/notifications/user/{user_id}/unread"), None)
            .await
    }

    async fn mark_read(&self, id: &str, user_id: &str) -> ApiResult<()> {
        self.http
            .put_empty(
                &format!("/notifications/{id}/mark-as-read"),
                Some(&format!("userId={user_id}")),
            )
            .await
    }

    async fn mark_all_read(&self, user_id: &str) -> ApiResult<()> {
        self.http
            .put_empty(&format!("/notifications/user/{user_id}/mark-all-as-read"), None)
            .await
    }

    async fn delete(&self, id: &str, user_id: &str) -> ApiResult<()> {
        self.http
            .delete_empty(
                &format!("/notifications/{id}"),
                Some(&format!("userId={user_id}")),
            )
            .await
    }
}

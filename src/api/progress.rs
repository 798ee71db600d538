//! `/progress-updates` collection client.

use std::sync::Arc;

use crate::error::ApiResult;
use crate::models::{ProgressDraft, ProgressUpdate};

use super::ResourceClient;
use super::http::Http;

/// Unlike plans, listings are served as a bare JSON array.
#[derive(Clone)]
pub struct ProgressClient {
    http: Arc<Http>,
}

impl ProgressClient {
    pub(crate) fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

impl ResourceClient for ProgressClient {
    type Resource = ProgressUpdate;
    type Draft = ProgressDraft;

    fn label(&self) -> &'static str {
        "progress update"
    }

    async fn list(&self, filter: Option<&str>) -> ApiResult<Vec<ProgressUpdate>> {
        self.http.get_json("/progress-updates", filter).await
    }

    async fn get(&self, id: &str) -> ApiResult<ProgressUpdate> {
        self.http.get_json(&format!("/progress-updates/{id}"), None).await
    }

    async fn create(&self, draft: &ProgressDraft) -> ApiResult<ProgressUpdate> {
        self.http.post_json("/progress-updates", draft).await
    }

    async fn update(&self, id: &str, draft: &ProgressDraft) -> ApiResult<ProgressUpdate> {
        self.http.put_json(&format!("/progress-updates/{id}"), draft).await
    }

    async fn delete(&self, id: &str) -> ApiResult<()> {
        self.http.delete_empty(&format!("/progress-updates/{id}"), None).await
    }
}

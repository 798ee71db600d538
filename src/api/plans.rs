//! `/plans` collection client.

use std::sync::Arc;

use crate::error::ApiResult;
use crate::models::{LearningPlan, Page, PlanDraft};

use super::ResourceClient;
use super::http::Http;

/// Listings arrive wrapped in a page envelope; item routes return the
/// resource bare.
#[derive(Clone)]
pub struct PlanClient {
    http: Arc<Http>,
}

impl PlanClient {
    pub(crate) fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

impl ResourceClient for PlanClient {
    type Resource = LearningPlan;
    type Draft = PlanDraft;

    fn label(&self) -> &'static str {
        "learning plan"
    }

    async fn list(&self, filter: Option<&str>) -> ApiResult<Vec<LearningPlan>> {
        let page: Page<LearningPlan> = self.http.get_json("/plans", filter).await?;
        Ok(page.content)
    }

    async fn get(&self, id: &str) -> ApiResult<LearningPlan> {
        self.http.get_json(&format!("/plans/{id}"), None).await
    }

    async fn create(&self, draft: &PlanDraft) -> ApiResult<LearningPlan> {
        self.http.post_json("/plans", draft).await
    }

    async fn update(&self, id: &str, draft: &PlanDraft) -> ApiResult<LearningPlan> {
        self.http.put_json(&format!("/plans/{id}"), draft).await
    }

    async fn delete(&self, id: &str) -> ApiResult<()> {
        self.http.delete_empty(&format!("/plans/{id}"), None).await
    }
}

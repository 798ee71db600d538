//! Typed access to the LearnLoop REST collections.

pub mod http;
pub mod notifications;
pub mod plans;
pub mod progress;

pub use http::{ApiConfig, Http};
pub use notifications::NotificationHttpClient;
pub use plans::PlanClient;
pub use progress::ProgressClient;

use std::sync::Arc;

use crate::error::ApiResult;
use crate::models::{Notification, OwnedResource};

/// CRUD contract over one REST collection.
///
/// Implementations are pure transport wrappers: one round-trip per call,
/// no local caching, no reinterpretation of failures beyond the
/// [`crate::error::ApiError`] taxonomy.
#[allow(async_fn_in_trait)]
pub trait ResourceClient {
    type Resource: OwnedResource + Clone;
    type Draft: serde::Serialize;

    /// Human label for user-facing messages, e.g. "learning plan".
    fn label(&self) -> &'static str;

    /// Fetch the collection. `filter` is an opaque query string the server
    /// interprets; it is passed through untouched.
    async fn list(&self, filter: Option<&str>) -> ApiResult<Vec<Self::Resource>>;

    async fn get(&self, id: &str) -> ApiResult<Self::Resource>;

    async fn create(&self, draft: &Self::Draft) -> ApiResult<Self::Resource>;

    async fn update(&self, id: &str, draft: &Self::Draft) -> ApiResult<Self::Resource>;

    async fn delete(&self, id: &str) -> ApiResult<()>;
}

/// Per-recipient notification operations. Every call is scoped by the
/// recipient's user id; the server enforces that scoping.
#[allow(async_fn_in_trait)]
pub trait NotificationClient {
    async fn list_for_user(&self, user_id: &str) -> ApiResult<Vec<Notification>>;

    async fn unread_for_user(&self, user_id: &str) -> ApiResult<Vec<Notification>>;

    /// Idempotent: marking an already-read notification succeeds.
    async fn mark_read(&self, id: &str, user_id: &str) -> ApiResult<()>;

    async fn mark_all_read(&self, user_id: &str) -> ApiResult<()>;

    async fn delete(&self, id: &str, user_id: &str) -> ApiResult<()>;
}

/// Entry point handing out the typed collection clients over one shared
/// transport.
#[derive(Clone)]
pub struct ApiClient {
    http: Arc<Http>,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: Http::shared(config),
        }
    }

    pub fn plans(&self) -> PlanClient {
        PlanClient::new(self.http.clone())
    }

    pub fn progress(&self) -> ProgressClient {
        ProgressClient::new(self.http.clone())
    }

    pub fn notifications(&self) -> NotificationHttpClient {
        NotificationHttpClient::new(self.http.clone())
    }
}

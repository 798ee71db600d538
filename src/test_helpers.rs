//! Shared sample data and scripted doubles for controller tests.

use std::sync::{Arc, Mutex};

use chrono::{TimeZone, Utc};

use crate::api::{NotificationClient, ResourceClient};
use crate::confirm::Confirmation;
use crate::error::{ApiError, ApiResult};
use crate::models::{
    LearningPlan, Notification, OwnedResource, ProgressUpdate, Sentiment, UpdateType, UserSummary,
};
use crate::notify::Notifier;

pub(crate) fn sample_user(id: &str) -> UserSummary {
    UserSummary {
        id: id.to_string(),
        username: format!("user-{id}"),
        first_name: None,
        last_name: None,
        profile_image_url: None,
    }
}

pub(crate) fn sample_plan(id: &str, owner: &str) -> LearningPlan {
    LearningPlan {
        id: id.to_string(),
        title: format!("Plan {id}"),
        description: "A plan".to_string(),
        category: "programming".to_string(),
        skill_level: "BEGINNER".to_string(),
        estimated_hours: 12.0,
        completion_percentage: 0.0,
        tags: vec!["rust".to_string()],
        learning_units: Vec::new(),
        resources: Vec::new(),
        view_count: 0,
        fork_count: 0,
        public: true,
        owner: sample_user(owner),
        created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
    }
}

pub(crate) fn sample_progress(id: &str, author: &str) -> ProgressUpdate {
    ProgressUpdate {
        id: id.to_string(),
        title: format!("Update {id}"),
        content: "Made some headway".to_string(),
        update_type: UpdateType::DailyUpdate,
        hours_spent: 2.0,
        rating: Some(4),
        sentiment: Sentiment::Motivated,
        challenges: Vec::new(),
        achievements: Vec::new(),
        user: sample_user(author),
        created_at: Utc.with_ymd_and_hms(2024, 5, 2, 8, 30, 0).unwrap(),
    }
}

pub(crate) fn sample_notification(id: &str, user_id: &str, read: bool) -> Notification {
    Notification {
        id: id.to_string(),
        user_id: user_id.to_string(),
        message: format!("Notification {id}"),
        read,
        created_at: Utc.with_ymd_and_hms(2024, 5, 2, 9, 0, 0).unwrap(),
    }
}

/// Scripted in-memory stand-in for one REST collection. Clones share the
/// same state, so a test keeps one handle while the controller owns the
/// other.
pub(crate) struct FakeCollection<R> {
    label: &'static str,
    state: Arc<CollectionState<R>>,
}

struct CollectionState<R> {
    items: Mutex<Vec<R>>,
    fail_next: Mutex<Option<ApiError>>,
    calls: Mutex<Vec<String>>,
}

impl<R> Clone for FakeCollection<R> {
    fn clone(&self) -> Self {
        Self {
            label: self.label,
            state: self.state.clone(),
        }
    }
}

impl<R> FakeCollection<R> {
    pub(crate) fn new(label: &'static str, items: Vec<R>) -> Self {
        Self {
            label,
            state: Arc::new(CollectionState {
                items: Mutex::new(items),
                fail_next: Mutex::new(None),
                calls: Mutex::new(Vec::new()),
            }),
        }
    }

    pub(crate) fn set_items(&self, items: Vec<R>) {
        *self.state.items.lock().unwrap() = items;
    }

    /// The next call, whatever it is, fails with `err`.
    pub(crate) fn fail_next(&self, err: ApiError) {
        *self.state.fail_next.lock().unwrap() = Some(err);
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.state.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.state.calls.lock().unwrap().push(call);
    }

    fn take_failure(&self) -> Option<ApiError> {
        self.state.fail_next.lock().unwrap().take()
    }
}

impl<R: OwnedResource + Clone> ResourceClient for FakeCollection<R> {
    type Resource = R;
    type Draft = serde_json::Value;

    fn label(&self) -> &'static str {
        self.label
    }

    async fn list(&self, filter: Option<&str>) -> ApiResult<Vec<R>> {
        match filter {
            Some(filter) => self.record(format!("list {filter}")),
            None => self.record("list".to_string()),
        }
        if let Some(err) = self.take_failure() {
            return Err(err);
        }
        Ok(self.state.items.lock().unwrap().clone())
    }

    async fn get(&self, id: &str) -> ApiResult<R> {
        self.record(format!("get {id}"));
        if let Some(err) = self.take_failure() {
            return Err(err);
        }
        self.state
            .items
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id() == id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("no {} {id}", self.label)))
    }

    async fn create(&self, _draft: &serde_json::Value) -> ApiResult<R> {
        Err(ApiError::Network("create not scripted".to_string()))
    }

    async fn update(&self, _id: &str, _draft: &serde_json::Value) -> ApiResult<R> {
        Err(ApiError::Network("update not scripted".to_string()))
    }

    async fn delete(&self, id: &str) -> ApiResult<()> {
        self.record(format!("delete {id}"));
        if let Some(err) = self.take_failure() {
            return Err(err);
        }
        self.state.items.lock().unwrap().retain(|r| r.id() != id);
        Ok(())
    }
}

/// Scripted notification backend, shared between test and controller the
/// same way as [`FakeCollection`].
#[derive(Clone)]
pub(crate) struct FakeInbox {
    state: Arc<InboxState>,
}

struct InboxState {
    items: Mutex<Vec<Notification>>,
    fail_next: Mutex<Option<ApiError>>,
    calls: Mutex<Vec<String>>,
}

impl FakeInbox {
    pub(crate) fn new(items: Vec<Notification>) -> Self {
        Self {
            state: Arc::new(InboxState {
                items: Mutex::new(items),
                fail_next: Mutex::new(None),
                calls: Mutex::new(Vec::new()),
            }),
        }
    }

    pub(crate) fn fail_next(&self, err: ApiError) {
        *self.state.fail_next.lock().unwrap() = Some(err);
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.state.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.state.calls.lock().unwrap().push(call);
    }

    fn take_failure(&self) -> Option<ApiError> {
        self.state.fail_next.lock().unwrap().take()
    }
}

impl NotificationClient for FakeInbox {
    async fn list_for_user(&self, user_id: &str) -> ApiResult<Vec<Notification>> {
        self.record(format!("list {user_id}"));
        if let Some(err) = self.take_failure() {
            return Err(err);
        }
        Ok(self
            .state
            .items
            .lock()
            .unwrap()
            .iter()
            .filter(|n| n.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn unread_for_user(&self, user_id: &str) -> ApiResult<Vec<Notification>> {
        self.record(format!("unread {user_id}"));
        if let Some(err) = self.take_failure() {
            return Err(err);
        }
        Ok(self
            .state
            .items
            .lock()
            .unwrap()
            .iter()
            .filter(|n| n.user_id == user_id && !n.read)
            .cloned()
            .collect())
    }

    async fn mark_read(&self, id: &str, user_id: &str) -> ApiResult<()> {
        self.record(format!("mark_read {id} {user_id}"));
        if let Some(err) = self.take_failure() {
            return Err(err);
        }
        if let Some(item) = self
            .state
            .items
            .lock()
            .unwrap()
            .iter_mut()
            .find(|n| n.id == id && n.user_id == user_id)
        {
            item.read = true;
        }
        Ok(())
    }

    async fn mark_all_read(&self, user_id: &str) -> ApiResult<()> {
        self.record(format!("mark_all {user_id}"));
        if let Some(err) = self.take_failure() {
            return Err(err);
        }
        for item in self
            .state
            .items
            .lock()
            .unwrap()
            .iter_mut()
            .filter(|n| n.user_id == user_id)
        {
            item.read = true;
        }
        Ok(())
    }

    async fn delete(&self, id: &str, user_id: &str) -> ApiResult<()> {
        self.record(format!("delete {id} {user_id}"));
        if let Some(err) = self.take_failure() {
            return Err(err);
        }
        self.state
            .items
            .lock()
            .unwrap()
            .retain(|n| !(n.id == id && n.user_id == user_id));
        Ok(())
    }
}

/// Captures notifications instead of printing them.
#[derive(Clone, Default)]
pub(crate) struct RecordingNotifier {
    events: Arc<Mutex<Vec<(bool, String)>>>,
}

impl RecordingNotifier {
    pub(crate) fn successes(&self) -> Vec<String> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|(ok, _)| *ok)
            .map(|(_, message)| message.clone())
            .collect()
    }

    pub(crate) fn errors(&self) -> Vec<String> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|(ok, _)| !ok)
            .map(|(_, message)| message.clone())
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.events.lock().unwrap().push((true, message.to_string()));
    }

    fn error(&self, message: &str) {
        self.events.lock().unwrap().push((false, message.to_string()));
    }
}

/// Scripted confirmation with a fixed answer; counts how often it was
/// asked.
pub(crate) struct StubConfirm {
    answer: bool,
    prompts: Mutex<Vec<String>>,
}

impl StubConfirm {
    pub(crate) fn new(answer: bool) -> Self {
        Self {
            answer,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn prompt_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

impl Confirmation for StubConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.answer
    }
}

//! Wire models for the LearnLoop REST API.
//!
//! The backend speaks camelCase JSON; every struct mirrors exactly the
//! fields the API serves. Draft types carry only the fields a client may
//! set — server-owned fields (ids, owners, counters, timestamps) have no
//! draft representation.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Identity and ownership of a mutable resource.
pub trait OwnedResource {
    fn id(&self) -> &str;
    /// The user who may edit or delete this resource.
    fn owner_id(&self) -> &str;
}

/// Embedded author/owner snapshot served inside other resources.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub profile_image_url: Option<String>,
}

impl UserSummary {
    /// "First Last" when both are present, otherwise the username.
    pub fn display_name(&self) -> String {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => format!("{first} {last}"),
            _ => self.username.clone(),
        }
    }
}

/// A structured learning plan with ordered units.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningPlan {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub skill_level: String,
    pub estimated_hours: f64,
    #[serde(default)]
    pub completion_percentage: f64,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub learning_units: Vec<LearningUnit>,
    #[serde(default)]
    pub resources: Vec<String>,
    #[serde(default)]
    pub view_count: u64,
    #[serde(default)]
    pub fork_count: u64,
    #[serde(default)]
    pub public: bool,
    pub owner: UserSummary,
    pub created_at: DateTime<Utc>,
}

impl OwnedResource for LearningPlan {
    fn id(&self) -> &str {
        &self.id
    }

    fn owner_id(&self) -> &str {
        &self.owner.id
    }
}

/// One unit of work inside a plan.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningUnit {
    pub unit_id: String,
    pub title: String,
    pub description: String,
    pub estimated_hours: f64,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub objectives: Vec<String>,
}

/// What kind of progress an update reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UpdateType {
    Milestone,
    DailyUpdate,
    Challenge,
    Other,
}

impl UpdateType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UpdateType::Milestone => "milestone",
            UpdateType::DailyUpdate => "daily update",
            UpdateType::Challenge => "challenge",
            UpdateType::Other => "update",
        }
    }
}

impl std::fmt::Display for UpdateType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Author mood attached to an update.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Sentiment {
    Excited,
    Motivated,
    Neutral,
    Tired,
    Frustrated,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Excited => "excited",
            Sentiment::Motivated => "motivated",
            Sentiment::Neutral => "neutral",
            Sentiment::Tired => "tired",
            Sentiment::Frustrated => "frustrated",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A shared progress update in the community feed.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressUpdate {
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(rename = "type")]
    pub update_type: UpdateType,
    pub hours_spent: f64,
    #[serde(default)]
    pub rating: Option<u8>,
    pub sentiment: Sentiment,
    #[serde(default)]
    pub challenges: Vec<String>,
    #[serde(default)]
    pub achievements: Vec<String>,
    pub user: UserSummary,
    pub created_at: DateTime<Utc>,
}

impl OwnedResource for ProgressUpdate {
    fn id(&self) -> &str {
        &self.id
    }

    fn owner_id(&self) -> &str {
        &self.user.id
    }
}

/// A per-recipient notification with a monotonic read flag.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub user_id: String,
    pub message: String,
    #[serde(default)]
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

/// Page envelope the plans listing arrives in.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Page<T> {
    pub content: Vec<T>,
}

/// Client-settable fields for creating or replacing a learning plan.
#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlanDraft {
    pub title: String,
    pub description: String,
    pub category: String,
    pub skill_level: String,
    pub estimated_hours: f64,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub learning_units: Vec<LearningUnitDraft>,
    #[serde(default)]
    pub resources: Vec<String>,
    #[serde(default)]
    pub public: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LearningUnitDraft {
    pub title: String,
    pub description: String,
    pub estimated_hours: f64,
    #[serde(default)]
    pub objectives: Vec<String>,
}

/// Client-settable fields for creating or replacing a progress update.
#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProgressDraft {
    pub title: String,
    pub content: String,
    #[serde(rename = "type")]
    pub update_type: UpdateType,
    pub hours_spent: f64,
    #[serde(default)]
    pub rating: Option<u8>,
    pub sentiment: Sentiment,
    #[serde(default)]
    pub challenges: Vec<String>,
    #[serde(default)]
    pub achievements: Vec<String>,
}

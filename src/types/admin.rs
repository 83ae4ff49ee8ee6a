use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Per-user rollup for the admin dashboard. Recomputed from scratch on
/// every load, never persisted. `email` and `created_at` are None when the
/// profile was synthesized from startup rows alone.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UserSummary {
    pub id: Uuid,
    pub email: Option<String>,
    pub username: String,
    pub avatar_url: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub is_admin: bool,
    pub startup_count: usize,
    pub public_startups: usize,
    pub private_startups: usize,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct AdminStartup {
    #[serde(flatten)]
    pub startup: entity::startup::Model,
    pub user_email: Option<String>,
    pub username: Option<String>,
    pub avatar_url: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct AdminOverview {
    pub users: Vec<UserSummary>,
    pub startups: Vec<AdminStartup>,
}

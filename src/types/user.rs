use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::error::AppError;

pub const MIN_PASSWORD_CHARS: usize = 6;

#[derive(Serialize, Deserialize, Debug)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub username: Option<String>,
}

impl SignupRequest {
    /// Checked before anything touches the store.
    pub fn validate(&self) -> Result<(), AppError> {
        let email = self.email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(AppError::Validation(
                "A valid email address is required".into(),
            ));
        }
        if self.password.chars().count() < MIN_PASSWORD_CHARS {
            return Err(AppError::Validation(
                "Password must be at least 6 characters long".into(),
            ));
        }
        Ok(())
    }

    /// Display name defaults to the email local-part.
    pub fn resolved_username(&self) -> String {
        match self.username.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => self
                .email
                .trim()
                .split('@')
                .next()
                .unwrap_or_default()
                .to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct UserMetadata {
    pub username: String,
    pub avatar_url: Option<String>,
}

/// Session-visible user object: id, email, user_metadata.username,
/// user_metadata.avatar_url, created_at.
#[derive(Serialize, Deserialize, Debug)]
pub struct SessionUser {
    pub id: Uuid,
    pub email: String,
    pub user_metadata: UserMetadata,
    pub created_at: DateTime<Utc>,
}

impl From<entity::user::Model> for SessionUser {
    fn from(user: entity::user::Model) -> Self {
        SessionUser {
            id: user.id,
            email: user.email,
            user_metadata: UserMetadata {
                username: user.username,
                avatar_url: user.avatar_url,
            },
            created_at: user.created_at,
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct SessionState {
    pub user: Option<SessionUser>,
    pub is_authenticated: bool,
    pub is_admin: bool,
}

impl SessionState {
    /// No session, no admin access. Provider hiccups resolve to this too.
    pub fn anonymous() -> Self {
        SessionState {
            user: None,
            is_authenticated: false,
            is_admin: false,
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct AuthRes {
    pub token: String,
    pub user: SessionUser,
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct ProfileUpdate {
    pub username: Option<String>,
    pub avatar_url: Option<String>,
}

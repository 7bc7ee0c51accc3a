// src/domain/user/entity.rs
use crate::domain::user::settings::NotificationSettings;
use crate::domain::user::value_objects::{EmailAddress, UserId, Username};
use chrono::{DateTime, Utc};

/// A user as consumed by the comment and notification core. Account
/// lifecycle (registration, credentials, verification) lives elsewhere.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub username: Username,
    pub email: EmailAddress,
    pub bio: Option<String>,
    pub image_url: Option<String>,
    pub settings: NotificationSettings,
    pub created_at: DateTime<Utc>,
}

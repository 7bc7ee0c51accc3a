use serde::{Deserialize, Serialize};

/// Per-user flags gating whether an event type produces an in-app
/// notification and/or an email. Stored as JSONB on the users table;
/// absent keys deserialize to the defaults (everything on).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NotificationSettings {
    pub new_follower: bool,
    pub new_article_from_user_following: bool,
    pub article_comment: bool,
    pub article_like: bool,
    pub email_subscribe: bool,
    pub new_follower_on_series: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            new_follower: true,
            new_article_from_user_following: true,
            article_comment: true,
            article_like: true,
            email_subscribe: true,
            new_follower_on_series: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_enable_everything() {
        let settings = NotificationSettings::default();
        assert!(settings.new_follower);
        assert!(settings.article_comment);
        assert!(settings.email_subscribe);
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let settings: NotificationSettings =
            serde_json::from_str(r#"{"emailSubscribe": false}"#).unwrap();
        assert!(!settings.email_subscribe);
        assert!(settings.article_like);
    }
}

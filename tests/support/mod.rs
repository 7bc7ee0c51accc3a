pub mod mocks;

use chrono::{TimeZone, Utc};
use haven_core::domain::{
    article::{Article, ArticleId, ArticleSlug, ArticleTitle},
    user::{EmailAddress, NotificationSettings, User, UserId, Username},
};

pub fn fixed_instant() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
}

pub fn user(id: i64, username: &str, settings: NotificationSettings) -> User {
    User {
        id: UserId::new(id).unwrap(),
        username: Username::new(username).unwrap(),
        email: EmailAddress::new(format!("{username}@example.com")).unwrap(),
        bio: None,
        image_url: None,
        settings,
        created_at: fixed_instant(),
    }
}

pub fn article(id: i64, slug: &str, author_id: i64) -> Article {
    Article {
        id: ArticleId::new(id).unwrap(),
        title: ArticleTitle::new(format!("Article {id}")).unwrap(),
        slug: ArticleSlug::new(slug).unwrap(),
        author_id: UserId::new(author_id).unwrap(),
    }
}

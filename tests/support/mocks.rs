//! In-memory doubles for the persistence and outbound ports, mirroring the
//! repository contracts closely enough for service-level tests.

use std::{
    collections::HashMap,
    sync::{
        Mutex,
        atomic::{AtomicBool, AtomicI64, Ordering},
    },
};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use haven_core::application::{
    error::ApplicationResult,
    ports::{
        events::EventPublisher,
        mail::{FollowMail, InteractionMail, Mailer, NewPostMail},
        time::Clock,
    },
};
use haven_core::domain::{
    article::{Article, ArticleId, ArticleReadRepository, ArticleSlug},
    comment::{Comment, CommentId, CommentRepository, CommentWithAuthor, NewComment},
    errors::{DomainError, DomainResult},
    events::DomainEvent,
    notification::{NewNotification, Notification, NotificationRepository},
    user::{User, UserId, UserRepository},
};

#[derive(Default)]
pub struct InMemoryUsers {
    users: Mutex<HashMap<i64, User>>,
    followers: Mutex<HashMap<i64, Vec<User>>>,
}

impl InMemoryUsers {
    pub fn with_users(users: Vec<User>) -> Self {
        let map = users.into_iter().map(|u| (u.id.into(), u)).collect();
        Self {
            users: Mutex::new(map),
            followers: Mutex::new(HashMap::new()),
        }
    }

    pub fn set_followers(&self, user_id: i64, followers: Vec<User>) {
        self.followers.lock().unwrap().insert(user_id, followers);
    }

    pub fn get(&self, id: i64) -> User {
        self.users.lock().unwrap().get(&id).cloned().unwrap()
    }
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        Ok(self.users.lock().unwrap().get(&id.into()).cloned())
    }

    async fn list_followers(&self, user_id: UserId) -> DomainResult<Vec<User>> {
        Ok(self
            .followers
            .lock()
            .unwrap()
            .get(&user_id.into())
            .cloned()
            .unwrap_or_default())
    }
}

#[derive(Default)]
pub struct InMemoryArticles {
    articles: Mutex<Vec<Article>>,
}

impl InMemoryArticles {
    pub fn with_articles(articles: Vec<Article>) -> Self {
        Self {
            articles: Mutex::new(articles),
        }
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticles {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(self
            .articles
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.id == id)
            .cloned())
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        Ok(self
            .articles
            .lock()
            .unwrap()
            .iter()
            .find(|a| &a.slug == slug)
            .cloned())
    }
}

/// Comment store over a plain vec. Author lookups go through the shared
/// user store so joined reads behave like the SQL implementation.
pub struct InMemoryComments {
    comments: Mutex<Vec<Comment>>,
    users: std::sync::Arc<InMemoryUsers>,
    next_id: AtomicI64,
}

impl InMemoryComments {
    pub fn new(users: std::sync::Arc<InMemoryUsers>) -> Self {
        Self {
            comments: Mutex::new(Vec::new()),
            users,
            next_id: AtomicI64::new(1),
        }
    }

    pub fn seed(&self, body: &str, user_id: i64, article_id: i64, parent_id: Option<i64>) -> i64 {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let now = crate::support::fixed_instant();
        self.comments.lock().unwrap().push(Comment {
            id: CommentId::new(id).unwrap(),
            body: haven_core::domain::comment::CommentBody::new(body).unwrap(),
            user_id: UserId::new(user_id).unwrap(),
            article_id: ArticleId::new(article_id).unwrap(),
            parent_id: parent_id.map(|p| CommentId::new(p).unwrap()),
            created_at: now,
            updated_at: now,
        });
        id
    }

    pub fn contains(&self, id: i64) -> bool {
        let id = CommentId::new(id).unwrap();
        self.comments.lock().unwrap().iter().any(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.comments.lock().unwrap().len()
    }

    fn with_author(&self, comment: Comment) -> CommentWithAuthor {
        let author = self.users.get(comment.user_id.into());
        CommentWithAuthor { comment, author }
    }
}

#[async_trait]
impl CommentRepository for InMemoryComments {
    async fn count_top_level(&self, article_id: ArticleId) -> DomainResult<u64> {
        Ok(self
            .comments
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.article_id == article_id && c.parent_id.is_none())
            .count() as u64)
    }

    async fn list_top_level(
        &self,
        article_id: ArticleId,
        limit: u32,
        offset: u64,
    ) -> DomainResult<Vec<CommentWithAuthor>> {
        let page: Vec<Comment> = self
            .comments
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.article_id == article_id && c.parent_id.is_none())
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect();
        Ok(page.into_iter().map(|c| self.with_author(c)).collect())
    }

    async fn count_replies(&self, parent_id: CommentId) -> DomainResult<u64> {
        Ok(self
            .comments
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.parent_id == Some(parent_id))
            .count() as u64)
    }

    async fn list_replies(
        &self,
        parent_id: CommentId,
        limit: u32,
        offset: u64,
    ) -> DomainResult<Vec<CommentWithAuthor>> {
        let page: Vec<Comment> = self
            .comments
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.parent_id == Some(parent_id))
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect();
        Ok(page.into_iter().map(|c| self.with_author(c)).collect())
    }

    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        Ok(self
            .comments
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }

    async fn find_with_author(&self, id: CommentId) -> DomainResult<Option<CommentWithAuthor>> {
        let found = self
            .comments
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == id)
            .cloned();
        Ok(found.map(|c| self.with_author(c)))
    }

    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let stored = Comment {
            id: CommentId::new(id).unwrap(),
            body: comment.body,
            user_id: comment.user_id,
            article_id: comment.article_id,
            parent_id: comment.parent_id,
            created_at: comment.created_at,
            updated_at: comment.updated_at,
        };
        self.comments.lock().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn delete(&self, id: CommentId) -> DomainResult<()> {
        let mut comments = self.comments.lock().unwrap();
        if !comments.iter().any(|c| c.id == id) {
            return Err(DomainError::NotFound("comment not found".into()));
        }
        // Same effect as the ON DELETE CASCADE on parent_id.
        comments.retain(|c| c.id != id && c.parent_id != Some(id));
        Ok(())
    }
}

#[derive(Default)]
pub struct CapturingNotifications {
    inserted: Mutex<Vec<NewNotification>>,
    fail_inserts: AtomicBool,
    next_id: AtomicI64,
}

impl CapturingNotifications {
    pub fn fail_inserts(&self) {
        self.fail_inserts.store(true, Ordering::SeqCst);
    }

    pub fn inserted(&self) -> Vec<NewNotification> {
        self.inserted.lock().unwrap().clone()
    }
}

#[async_trait]
impl NotificationRepository for CapturingNotifications {
    async fn insert(&self, notification: NewNotification) -> DomainResult<Notification> {
        if self.fail_inserts.load(Ordering::SeqCst) {
            return Err(DomainError::Persistence("insert refused".into()));
        }
        self.inserted.lock().unwrap().push(notification.clone());
        Ok(Notification {
            id: self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
            user_id: notification.user_id,
            message: notification.message,
            kind: notification.kind,
            is_read: notification.is_read,
            created_at: notification.created_at,
        })
    }
}

#[derive(Default)]
pub struct RecordingMailer {
    pub interaction: Mutex<Vec<InteractionMail>>,
    pub follow: Mutex<Vec<FollowMail>>,
    pub new_post: Mutex<Vec<NewPostMail>>,
}

impl RecordingMailer {
    pub fn total_sent(&self) -> usize {
        self.interaction.lock().unwrap().len()
            + self.follow.lock().unwrap().len()
            + self.new_post.lock().unwrap().len()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send_comment_notification(&self, info: InteractionMail) -> ApplicationResult<()> {
        self.interaction.lock().unwrap().push(info);
        Ok(())
    }

    async fn send_follow_notification(&self, info: FollowMail) -> ApplicationResult<()> {
        self.follow.lock().unwrap().push(info);
        Ok(())
    }

    async fn send_new_post_notification(&self, info: NewPostMail) -> ApplicationResult<()> {
        self.new_post.lock().unwrap().push(info);
        Ok(())
    }
}

pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[derive(Default)]
pub struct CapturingEvents {
    events: Mutex<Vec<DomainEvent>>,
}

impl CapturingEvents {
    pub fn published(&self) -> Vec<DomainEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl EventPublisher for CapturingEvents {
    fn publish(&self, event: DomainEvent) {
        self.events.lock().unwrap().push(event);
    }
}

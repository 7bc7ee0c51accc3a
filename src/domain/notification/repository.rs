use crate::domain::errors::DomainResult;
use crate::domain::notification::entity::{NewNotification, Notification};
use async_trait::async_trait;

#[async_trait]
pub trait NotificationRepository: Send + Sync {
    async fn insert(&self, notification: NewNotification) -> DomainResult<Notification>;
}

pub mod entity;
pub mod repository;

pub use entity::{NewNotification, Notification, NotificationKind};
pub use repository::NotificationRepository;

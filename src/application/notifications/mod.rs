mod article_interaction;
mod follow;
mod new_post;
mod service;

pub use service::NotificationDispatcher;

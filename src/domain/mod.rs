pub mod article;
pub mod comment;
pub mod errors;
pub mod events;
pub mod notification;
pub mod user;

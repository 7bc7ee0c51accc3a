pub mod auth;
pub mod comments;
pub mod pagination;

pub use auth::AuthenticatedUser;
pub use comments::{CommentAuthorDto, CommentDto, CommentPageDto, CommentThreadDto, ReplyPageDto};
pub use pagination::PageInfo;

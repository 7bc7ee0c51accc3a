mod list;
mod service;
mod thread;

pub use list::ListCommentsQuery;
pub use service::CommentQueryService;
pub use thread::GetCommentThreadQuery;

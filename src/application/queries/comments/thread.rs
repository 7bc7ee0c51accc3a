use super::CommentQueryService;
use crate::{
    application::{
        dto::{CommentDto, CommentThreadDto, PageInfo, ReplyPageDto, comments::project_comments},
        error::{ApplicationError, ApplicationResult},
    },
    domain::comment::CommentId,
};

pub struct GetCommentThreadQuery {
    pub slug: String,
    pub comment_id: i64,
    pub page: Option<u32>,
    pub size: Option<u32>,
}

impl CommentQueryService {
    /// A parent comment with one paginated page of its direct replies.
    pub async fn get_comment_thread(
        &self,
        query: GetCommentThreadQuery,
    ) -> ApplicationResult<CommentThreadDto> {
        self.resolve_article(query.slug).await?;

        let id = CommentId::new(query.comment_id)?;
        let parent = self
            .comments
            .find_with_author(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("comment not found"))?;

        let total = self.comments.count_replies(id).await?;
        let info = PageInfo::compute(query.page, query.size, total);

        let records = self.comments.list_replies(id, info.limit, info.offset).await?;
        let replies = project_comments(records);

        Ok(CommentThreadDto::new(
            CommentDto::from(parent),
            ReplyPageDto {
                size: replies.len(),
                data: replies,
                page: info.page,
                total_pages: info.total_pages,
                total,
            },
        ))
    }
}

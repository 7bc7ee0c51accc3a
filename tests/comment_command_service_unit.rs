mod support;

use std::sync::Arc;

use haven_core::application::{
    commands::comments::{CommentCommandService, CreateCommentCommand, DeleteCommentCommand},
    dto::AuthenticatedUser,
    error::ApplicationError,
};
use haven_core::domain::{
    events::{DomainEvent, InteractionKind},
    user::{NotificationSettings, UserId},
};

use support::mocks::{CapturingEvents, FixedClock, InMemoryArticles, InMemoryComments, InMemoryUsers};
use support::{article, fixed_instant, user};

struct Harness {
    service: CommentCommandService,
    comments: Arc<InMemoryComments>,
    events: Arc<CapturingEvents>,
}

/// Alice (user 1) authored article `how-to-brew`; Bob (user 2) comments.
fn harness() -> Harness {
    let users = Arc::new(InMemoryUsers::with_users(vec![
        user(1, "alice", NotificationSettings::default()),
        user(2, "bob", NotificationSettings::default()),
    ]));
    let articles = Arc::new(InMemoryArticles::with_articles(vec![article(
        1,
        "how-to-brew",
        1,
    )]));
    let comments = Arc::new(InMemoryComments::new(Arc::clone(&users)));
    let events = Arc::new(CapturingEvents::default());

    let service = CommentCommandService::new(
        Arc::clone(&comments) as _,
        articles,
        users,
        Arc::clone(&events) as _,
        Arc::new(FixedClock(fixed_instant())),
    );

    Harness {
        service,
        comments,
        events,
    }
}

fn bob() -> AuthenticatedUser {
    AuthenticatedUser {
        id: UserId::new(2).unwrap(),
        username: "bob".into(),
    }
}

fn alice() -> AuthenticatedUser {
    AuthenticatedUser {
        id: UserId::new(1).unwrap(),
        username: "alice".into(),
    }
}

#[tokio::test]
async fn creating_a_comment_persists_it_and_publishes_an_interaction_event() {
    let h = harness();

    let dto = h
        .service
        .create_comment(
            &bob(),
            CreateCommentCommand {
                slug: "how-to-brew".into(),
                parent_id: None,
                body: "great write-up".into(),
            },
        )
        .await
        .unwrap();

    assert_eq!(dto.body, "great write-up");
    assert_eq!(dto.author.username, "bob");
    assert!(h.comments.contains(dto.id));

    assert_eq!(
        h.events.published(),
        vec![DomainEvent::ArticleInteraction {
            to_user: UserId::new(1).unwrap(),
            from_user: UserId::new(2).unwrap(),
            article_id: haven_core::domain::article::ArticleId::new(1).unwrap(),
            kind: InteractionKind::Comment,
        }]
    );
}

#[tokio::test]
async fn replying_to_a_reply_is_rejected_and_nothing_is_persisted() {
    let h = harness();
    let parent = h.comments.seed("top level", 1, 1, None);
    let reply = h.comments.seed("first reply", 2, 1, Some(parent));
    let before = h.comments.len();

    let err = h
        .service
        .create_comment(
            &bob(),
            CreateCommentCommand {
                slug: "how-to-brew".into(),
                parent_id: Some(reply),
                body: "reply to a reply".into(),
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::Forbidden(_)));
    assert!(err.to_string().contains("comment cannot go pass levels"));
    assert_eq!(h.comments.len(), before);
    assert!(h.events.published().is_empty());
}

#[tokio::test]
async fn replying_to_a_missing_parent_is_not_found() {
    let h = harness();

    let err = h
        .service
        .create_comment(
            &bob(),
            CreateCommentCommand {
                slug: "how-to-brew".into(),
                parent_id: Some(99),
                body: "orphan reply".into(),
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::NotFound(_)));
    assert!(err.to_string().contains("comment not found"));
}

#[tokio::test]
async fn commenting_on_an_unknown_slug_is_not_found() {
    let h = harness();

    let err = h
        .service
        .create_comment(
            &bob(),
            CreateCommentCommand {
                slug: "no-such-article".into(),
                parent_id: None,
                body: "hello".into(),
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::NotFound(_)));
    assert!(err.to_string().contains("Article not found"));
}

#[tokio::test]
async fn only_the_owner_may_delete_a_comment() {
    let h = harness();
    let id = h.comments.seed("alice's comment", 1, 1, None);

    let err = h
        .service
        .delete_comment(
            &bob(),
            DeleteCommentCommand {
                slug: "how-to-brew".into(),
                comment_id: id,
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::Forbidden(_)));
    assert!(err.to_string().contains("You cannot perform this operation"));
    assert!(h.comments.contains(id));
}

#[tokio::test]
async fn deleting_a_parent_removes_its_replies() {
    let h = harness();
    let parent = h.comments.seed("parent", 2, 1, None);
    let reply = h.comments.seed("reply", 1, 1, Some(parent));

    h.service
        .delete_comment(
            &bob(),
            DeleteCommentCommand {
                slug: "how-to-brew".into(),
                comment_id: parent,
            },
        )
        .await
        .unwrap();

    assert!(!h.comments.contains(parent));
    assert!(!h.comments.contains(reply));
}

#[tokio::test]
async fn deleting_a_missing_comment_is_not_found() {
    let h = harness();

    let err = h
        .service
        .delete_comment(
            &alice(),
            DeleteCommentCommand {
                slug: "how-to-brew".into(),
                comment_id: 42,
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::NotFound(_)));
}

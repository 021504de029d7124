//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::extract::FromRef;
use chrono::{DateTime, TimeZone, Utc};
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;
use url::Url;
use uuid::Uuid;

use openbook_api::RenderContext;
use openbook_core::result::AppResult;
use openbook_core::traits::ReferenceLookup;
use openbook_core::types::*;
use openbook_entity::common::{Emoji, Hashtag, Language};
use openbook_entity::community::{Community, CommunityInvite};
use openbook_entity::notification::{Notification, NotificationContent};
use openbook_entity::post::{Post, PostComment, PostImage};
use openbook_entity::user::{Badge, User, UserProfile};

pub const MEDIA_BASE: &str = "https://media.openbook.test/";

/// In-memory stand-in for the persistence layer's existence checks.
#[derive(Debug, Default)]
pub struct InMemoryLookup {
    pub communities: HashSet<String>,
    pub usernames: HashSet<String>,
    pub notifications: HashSet<NotificationId>,
}

impl InMemoryLookup {
    /// A lookup knowing one community, two users and notifications 1..=3.
    pub fn seeded() -> Self {
        Self {
            communities: ["rust_lang".to_string()].into_iter().collect(),
            usernames: ["joel".to_string(), "martha.k".to_string()]
                .into_iter()
                .collect(),
            notifications: (1..=3).map(NotificationId::new).collect(),
        }
    }
}

#[async_trait]
impl ReferenceLookup for InMemoryLookup {
    async fn community_name_exists(&self, name: &str) -> AppResult<bool> {
        Ok(self.communities.contains(name))
    }

    async fn username_exists(&self, username: &str) -> AppResult<bool> {
        Ok(self.usernames.contains(username))
    }

    async fn notification_exists(&self, id: NotificationId) -> AppResult<bool> {
        Ok(self.notifications.contains(&id))
    }
}

/// Router state exposing the lookup to the validating extractors.
#[derive(Clone)]
pub struct TestState {
    pub lookup: Arc<dyn ReferenceLookup>,
}

impl TestState {
    pub fn seeded() -> Self {
        Self {
            lookup: Arc::new(InMemoryLookup::seeded()),
        }
    }
}

impl FromRef<TestState> for Arc<dyn ReferenceLookup> {
    fn from_ref(state: &TestState) -> Self {
        state.lookup.clone()
    }
}

/// Send a request through the router and decode the JSON response.
pub async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router
        .oneshot(request)
        .await
        .expect("request should complete");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("body should be JSON")
    };
    (status, body)
}

pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("valid request")
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("valid request")
}

pub fn ctx(viewer: Option<i64>) -> RenderContext {
    RenderContext::new(
        viewer.map(UserId::new),
        Url::parse(MEDIA_BASE).expect("valid media base"),
    )
}

pub fn created() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2019, 3, 14, 9, 30, 0).unwrap()
}

pub fn user(id: i64, username: &str) -> User {
    User {
        id: UserId::new(id),
        username: username.to_string(),
        profile: UserProfile {
            id: ProfileId::new(id + 100),
            name: format!("{username} name"),
            avatar: Some(format!("avatars/{username}.png")),
            badges: vec![Badge {
                id: BadgeId::new(1),
                keyword: "VERIFIED".to_string(),
                keyword_description: Some("Verified".to_string()),
            }],
        },
    }
}

pub fn community() -> Community {
    Community {
        id: CommunityId::new(7),
        name: "rust_lang".to_string(),
        title: "Rust".to_string(),
        avatar: Some("communities/rust/avatar.png".to_string()),
        cover: None,
        color: "#dea584".to_string(),
    }
}

pub fn post(id: i64) -> Post {
    Post {
        id: PostId::new(id),
        uuid: Uuid::from_u128(0x6d1c_0000_0000_0000_0000_0000_0000_0000 + id as u128),
        text: Some("Hello #rust".to_string()),
        creator: user(1, "joel"),
        created: created(),
        community: Some(community()),
        is_closed: false,
        circle_ids: Vec::new(),
        media_height: Some(600),
        media_width: Some(800),
        media_thumbnail: Some("posts/thumb.jpg".to_string()),
        image: Some(PostImage {
            id: PostImageId::new(5),
            image: "posts/full.jpg".to_string(),
            width: 800,
            height: 600,
        }),
    }
}

pub fn language() -> Language {
    Language {
        id: LanguageId::new(1),
        code: "en".to_string(),
        name: "English".to_string(),
    }
}

pub fn comment(id: i64, commenter: User) -> PostComment {
    PostComment {
        id: PostCommentId::new(id),
        commenter,
        language: Some(language()),
        text: "Nice post #rust".to_string(),
        post: post(20),
        created: created(),
        parent_comment: None,
        is_edited: false,
        muted_by_user_ids: Vec::new(),
        hashtags: vec![Hashtag {
            id: HashtagId::new(4),
            name: "rust".to_string(),
            color: Some("#dea584".to_string()),
            image: None,
        }],
    }
}

pub fn reply(id: i64, parent: PostComment, commenter: User) -> PostComment {
    PostComment {
        parent_comment: Some(Box::new(parent)),
        ..comment(id, commenter)
    }
}

pub fn emoji() -> Emoji {
    Emoji {
        id: EmojiId::new(9),
        keyword: "heart_eyes".to_string(),
        image: "emojis/heart_eyes.png".to_string(),
    }
}

pub fn invite() -> CommunityInvite {
    CommunityInvite {
        id: CommunityInviteId::new(12),
        creator: user(2, "martha.k"),
        invited_user_id: UserId::new(1),
        community: community(),
    }
}

pub fn notification(id: i64, content: NotificationContent) -> Notification {
    Notification {
        id: NotificationId::new(id),
        owner_id: UserId::new(1),
        notification_type: content.kind(),
        content: Some(content),
        read: false,
        created: created(),
    }
}

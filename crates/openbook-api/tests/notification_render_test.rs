//! Integration tests for the polymorphic notification renderer.

mod helpers;

use serde_json::json;

use openbook_api::dto::request::UnreadNotificationsCountRequest;
use openbook_api::dto::response::{
    NotificationResponse, UnreadNotificationsCountResponse, render_notifications,
};
use openbook_core::error::ErrorKind;
use openbook_core::types::*;
use openbook_entity::notification::*;
use openbook_entity::post::{
    PostCommentReaction, PostCommentUserMention, PostReaction, PostUserMention,
};

use helpers::*;

fn render(notification: &Notification, viewer: Option<i64>) -> serde_json::Value {
    let response = NotificationResponse::render(notification, &ctx(viewer))
        .expect("notification should render");
    serde_json::to_value(response).expect("serialize")
}

#[test]
fn test_follow_notification_shape() {
    let notification = notification(
        1,
        NotificationContent::Follow(FollowNotification {
            id: NotificationContentId::new(40),
            follower: user(2, "martha.k"),
        }),
    );

    let json = render(&notification, Some(1));
    assert_eq!(
        json,
        json!({
            "id": 1,
            "notification_type": "F",
            "content_object": {
                "id": 40,
                "follower": {
                    "id": 2,
                    "username": "martha.k",
                    "profile": {
                        "id": 102,
                        "avatar": "https://media.openbook.test/avatars/martha.k.png",
                        "name": "martha.k name",
                        "badges": [
                            { "keyword": "VERIFIED", "keyword_description": "Verified" }
                        ],
                    },
                },
            },
            "read": false,
            "created": "2019-03-14T09:30:00Z",
        })
    );
}

#[test]
fn test_post_comment_notification_nests_post_and_creator() {
    let notification = notification(
        2,
        NotificationContent::PostComment(PostCommentNotification {
            id: NotificationContentId::new(41),
            post_comment: comment(30, user(2, "martha.k")),
        }),
    );

    let json = render(&notification, Some(1));
    let content = &json["content_object"];
    assert_eq!(json["notification_type"], "PC");
    assert_eq!(content["id"], 41);

    let post_comment = &content["post_comment"];
    assert_eq!(post_comment["id"], 30);
    assert_eq!(post_comment["commenter"]["username"], "martha.k");
    assert_eq!(
        post_comment["language"],
        json!({ "id": 1, "code": "en", "name": "English" })
    );
    assert_eq!(post_comment["parent_comment"], serde_json::Value::Null);
    assert_eq!(post_comment["is_muted"], false);
    assert_eq!(
        post_comment["hashtags"],
        json!([{ "id": 4, "name": "rust", "color": "#dea584", "image": null }])
    );

    let post = &post_comment["post"];
    assert_eq!(post["id"], 20);
    assert_eq!(post["creator"]["profile"]["badges"][0]["keyword"], "VERIFIED");
    assert_eq!(
        post["community"],
        json!({
            "id": 7,
            "name": "rust_lang",
            "avatar": "https://media.openbook.test/communities/rust/avatar.png",
            "cover": null,
            "color": "#dea584",
        })
    );
    assert_eq!(post["is_encircled"], false);
    assert_eq!(post["media_thumbnail"], "https://media.openbook.test/posts/thumb.jpg");
    assert_eq!(
        post["image"],
        json!({
            "id": 5,
            "image": "https://media.openbook.test/posts/full.jpg",
            "width": 800,
            "height": 600,
        })
    );

    let mut post_keys: Vec<_> = post.as_object().unwrap().keys().cloned().collect();
    post_keys.sort_unstable();
    let mut expected = vec![
        "id",
        "uuid",
        "text",
        "creator",
        "created",
        "community",
        "is_closed",
        "is_encircled",
        "media_height",
        "media_width",
        "media_thumbnail",
        "image",
    ];
    expected.sort_unstable();
    assert_eq!(post_keys, expected);
}

#[test]
fn test_reply_notification_exposes_parent_twice() {
    let parent = comment(30, user(1, "joel"));
    let notification = notification(
        3,
        NotificationContent::PostCommentReply(PostCommentReplyNotification {
            id: NotificationContentId::new(42),
            post_comment: reply(31, parent, user(2, "martha.k")),
        }),
    );

    let json = render(&notification, Some(1));
    let content = &json["content_object"];
    assert_eq!(json["notification_type"], "PCR");
    assert_eq!(content["parent_comment"]["id"], 30);
    assert_eq!(content["post_comment"]["parent_comment"], content["parent_comment"]);

    let mut parent_keys: Vec<_> = content["parent_comment"]
        .as_object()
        .unwrap()
        .keys()
        .cloned()
        .collect();
    parent_keys.sort_unstable();
    assert_eq!(
        parent_keys,
        vec!["commenter", "created", "id", "is_edited", "is_muted", "language", "text"]
    );
}

#[test]
fn test_is_muted_depends_on_viewer() {
    let mut muted = comment(30, user(2, "martha.k"));
    muted.muted_by_user_ids = vec![UserId::new(1)];
    let notification = notification(
        4,
        NotificationContent::PostComment(PostCommentNotification {
            id: NotificationContentId::new(43),
            post_comment: muted,
        }),
    );

    assert_eq!(
        render(&notification, Some(1))["content_object"]["post_comment"]["is_muted"],
        true
    );
    assert_eq!(
        render(&notification, Some(2))["content_object"]["post_comment"]["is_muted"],
        false
    );
    assert_eq!(
        render(&notification, None)["content_object"]["post_comment"]["is_muted"],
        false
    );
}

#[test]
fn test_reaction_notifications() {
    let post_reaction = notification(
        5,
        NotificationContent::PostReaction(PostReactionNotification {
            id: NotificationContentId::new(44),
            post_reaction: PostReaction {
                id: PostReactionId::new(70),
                reactor: user(2, "martha.k"),
                emoji: emoji(),
                post: post(20),
                created: created(),
            },
        }),
    );
    let json = render(&post_reaction, Some(1));
    let reaction = &json["content_object"]["post_reaction"];
    assert_eq!(json["notification_type"], "PR");
    assert_eq!(
        reaction["emoji"],
        json!({
            "id": 9,
            "keyword": "heart_eyes",
            "image": "https://media.openbook.test/emojis/heart_eyes.png",
        })
    );
    assert_eq!(reaction["post"]["id"], 20);
    assert!(reaction.get("created").is_none());

    let comment_reaction = notification(
        6,
        NotificationContent::PostCommentReaction(PostCommentReactionNotification {
            id: NotificationContentId::new(45),
            post_comment_reaction: PostCommentReaction {
                id: PostCommentReactionId::new(71),
                reactor: user(2, "martha.k"),
                emoji: emoji(),
                post_comment: comment(30, user(1, "joel")),
                created: created(),
            },
        }),
    );
    let json = render(&comment_reaction, Some(1));
    let reaction = &json["content_object"]["post_comment_reaction"];
    assert_eq!(json["notification_type"], "PCRA");
    assert_eq!(reaction["post_comment"]["id"], 30);
    assert_eq!(reaction["created"], "2019-03-14T09:30:00Z");
}

#[test]
fn test_connection_notifications() {
    let request = notification(
        7,
        NotificationContent::ConnectionRequest(ConnectionRequestNotification {
            id: NotificationContentId::new(46),
            connection_requester: user(2, "martha.k"),
        }),
    );
    let json = render(&request, Some(1));
    assert_eq!(json["notification_type"], "CR");
    assert_eq!(json["content_object"]["connection_requester"]["id"], 2);

    let confirmed = notification(
        8,
        NotificationContent::ConnectionConfirmed(ConnectionConfirmedNotification {
            id: NotificationContentId::new(47),
            connection_confirmator: user(2, "martha.k"),
        }),
    );
    let json = render(&confirmed, Some(1));
    assert_eq!(json["notification_type"], "CC");
    assert_eq!(json["content_object"]["connection_confirmator"]["username"], "martha.k");
}

#[test]
fn test_community_invite_notification() {
    let notification = notification(
        9,
        NotificationContent::CommunityInvite(CommunityInviteNotification {
            id: NotificationContentId::new(48),
            community_invite: invite(),
        }),
    );
    let json = render(&notification, Some(1));
    let invite = &json["content_object"]["community_invite"];
    assert_eq!(json["notification_type"], "CI");
    assert_eq!(invite["id"], 12);
    assert_eq!(invite["invited_user_id"], 1);
    assert_eq!(invite["creator"]["username"], "martha.k");
    assert_eq!(invite["community"]["name"], "rust_lang");
}

#[test]
fn test_new_post_notifications() {
    let mut encircled = post(21);
    encircled.circle_ids = vec![CircleId::new(3)];
    encircled.community = None;

    let community_post = notification(
        10,
        NotificationContent::CommunityNewPost(CommunityNewPostNotification {
            id: NotificationContentId::new(49),
            post: post(20),
        }),
    );
    let user_post = notification(
        11,
        NotificationContent::UserNewPost(UserNewPostNotification {
            id: NotificationContentId::new(50),
            post: encircled,
        }),
    );

    let json = render(&community_post, Some(1));
    assert_eq!(json["notification_type"], "CNP");
    assert_eq!(json["content_object"]["post"]["community"]["id"], 7);

    let json = render(&user_post, Some(1));
    assert_eq!(json["notification_type"], "UNP");
    assert_eq!(json["content_object"]["post"]["is_encircled"], true);
    assert_eq!(json["content_object"]["post"]["community"], serde_json::Value::Null);
}

#[test]
fn test_mention_notifications() {
    let post_mention = notification(
        12,
        NotificationContent::PostUserMention(PostUserMentionNotification {
            id: NotificationContentId::new(51),
            post_user_mention: PostUserMention {
                id: PostUserMentionId::new(80),
                post: post(20),
                user: user(1, "joel"),
            },
        }),
    );
    let json = render(&post_mention, Some(1));
    let mention = &json["content_object"]["post_user_mention"];
    assert_eq!(json["notification_type"], "PUM");
    assert_eq!(mention["id"], 80);
    assert_eq!(mention["post"]["id"], 20);
    assert_eq!(mention["user"]["username"], "joel");

    let comment_mention = notification(
        13,
        NotificationContent::PostCommentUserMention(PostCommentUserMentionNotification {
            id: NotificationContentId::new(52),
            post_comment_user_mention: PostCommentUserMention {
                id: PostCommentUserMentionId::new(81),
                post_comment: comment(30, user(2, "martha.k")),
                user: user(1, "joel"),
            },
        }),
    );
    let json = render(&comment_mention, Some(1));
    let mention = &json["content_object"]["post_comment_user_mention"];
    assert_eq!(json["notification_type"], "PCUM");
    assert_eq!(mention["post_comment"]["commenter"]["username"], "martha.k");
    assert_eq!(mention["user"]["id"], 1);
}

#[test]
fn test_missing_content_renders_null() {
    let mut dangling = notification(
        14,
        NotificationContent::Follow(FollowNotification {
            id: NotificationContentId::new(53),
            follower: user(2, "martha.k"),
        }),
    );
    dangling.content = None;

    let json = render(&dangling, Some(1));
    assert_eq!(
        json,
        json!({
            "id": 14,
            "notification_type": "F",
            "content_object": null,
            "read": false,
            "created": "2019-03-14T09:30:00Z",
        })
    );
}

#[test]
fn test_mismatched_type_fails() {
    let mut mismatched = notification(
        15,
        NotificationContent::Follow(FollowNotification {
            id: NotificationContentId::new(54),
            follower: user(2, "martha.k"),
        }),
    );
    mismatched.notification_type = NotificationType::PostReaction;

    let err = NotificationResponse::render(&mismatched, &ctx(Some(1))).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Internal);
    assert!(err.message.contains("typed PR"));
}

#[test]
fn test_render_notifications_keeps_dangling_rows() {
    let follow = |id: i64| {
        notification(
            id,
            NotificationContent::Follow(FollowNotification {
                id: NotificationContentId::new(id + 100),
                follower: user(2, "martha.k"),
            }),
        )
    };
    let mut dangling = follow(2);
    dangling.content = None;
    let mut mismatched = follow(4);
    mismatched.notification_type = NotificationType::CommunityInvite;
    let page = vec![follow(1), dangling, follow(3), mismatched];

    let rendered = render_notifications(&page, &ctx(Some(1)));
    let ids: Vec<_> = rendered.iter().map(|n| n.id).collect();
    assert_eq!(
        ids,
        vec![NotificationId::new(1), NotificationId::new(2), NotificationId::new(3)]
    );
    assert!(rendered[1].content_object.is_none());
}

#[test]
fn test_unread_count() {
    let follow = |id: i64, read: bool| {
        let mut n = notification(
            id,
            NotificationContent::Follow(FollowNotification {
                id: NotificationContentId::new(id + 100),
                follower: user(2, "martha.k"),
            }),
        );
        n.read = read;
        n
    };
    let invite = notification(
        5,
        NotificationContent::CommunityInvite(CommunityInviteNotification {
            id: NotificationContentId::new(105),
            community_invite: invite(),
        }),
    );
    let page = vec![follow(1, false), follow(2, true), follow(3, false), invite];

    let all = UnreadNotificationsCountResponse::count(
        &page,
        &UnreadNotificationsCountRequest::default(),
    );
    assert_eq!(serde_json::to_value(all).unwrap(), json!({ "count": 3 }));

    let follows_only = UnreadNotificationsCountRequest {
        max_id: None,
        types: Some(vec![NotificationType::Follow]),
    };
    assert_eq!(UnreadNotificationsCountResponse::count(&page, &follows_only).count, 2);

    let up_to_two = UnreadNotificationsCountRequest {
        max_id: Some(NotificationId::new(2)),
        types: None,
    };
    assert_eq!(UnreadNotificationsCountResponse::count(&page, &up_to_two).count, 1);
}

//! Posts API integration tests
//!
//! Ownership rules end to end: any authenticated user may read and create,
//! only the author may edit or delete, and a refusal looks exactly like a
//! missing post.

use axum::http::{Method, StatusCode};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::assert_message;
use crate::common::{
    delete, get, post_json, put_json, send_raw, signup_unique_user, TestDatabase, TestUser,
};

async fn create_post(app: &axum::Router, user: &TestUser, title: &str, is_public: bool) -> Value {
    let response = post_json(
        app,
        "/api/posts",
        Some(&user.token),
        json!({ "title": title, "content": "Some content", "is_public": is_public }),
    )
    .await;
    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    response.body
}

fn titles(body: &Value) -> Vec<&str> {
    body.as_array()
        .expect("expected a JSON array")
        .iter()
        .filter_map(|post| post["title"].as_str())
        .collect()
}

#[tokio::test]
async fn test_posts_require_a_token() {
    let db = TestDatabase::new().await;
    let app = db.app();

    assert_eq!(get(&app, "/api/posts", None).await.status, StatusCode::UNAUTHORIZED);
    assert_eq!(get(&app, "/api/posts/all", None).await.status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        post_json(&app, "/api/posts", None, json!({ "title": "t", "content": "c" }))
            .await
            .status,
        StatusCode::UNAUTHORIZED
    );
    assert_eq!(
        delete(&app, &format!("/api/posts/{}", Uuid::new_v4()), None).await.status,
        StatusCode::UNAUTHORIZED
    );
}

#[tokio::test]
async fn test_create_sets_owner_to_caller() {
    let db = TestDatabase::new().await;
    let app = db.app();
    let alice = signup_unique_user(&app).await;

    let post = create_post(&app, &alice, "Hello", false).await;
    assert_eq!(post["author"]["id"], alice.id.to_string());
    assert_eq!(post["author"]["email"], alice.email);
    assert_eq!(post["is_public"], false);
    assert!(post["created_at"].is_string());
}

#[tokio::test]
async fn test_create_requires_title_and_content() {
    let db = TestDatabase::new().await;
    let app = db.app();
    let alice = signup_unique_user(&app).await;

    let response = post_json(&app, "/api/posts", Some(&alice.token), json!({ "title": "Only title" })).await;
    assert_message!(response, StatusCode::BAD_REQUEST, "Title and content are required");
}

#[tokio::test]
async fn test_unreadable_post_bodies_are_rejected() {
    let db = TestDatabase::new().await;
    let app = db.app();
    let alice = signup_unique_user(&app).await;

    let mistyped = send_raw(
        &app,
        Method::POST,
        "/api/posts",
        Some(&alice.token),
        "application/json",
        r#"{"title":"t","content":"c","is_public":"yes"}"#,
    )
    .await;
    assert_message!(mistyped, StatusCode::BAD_REQUEST, "Invalid request body");

    let post = create_post(&app, &alice, "Hello", false).await;
    let id = post["id"].as_str().unwrap();
    let broken = send_raw(
        &app,
        Method::PUT,
        &format!("/api/posts/{}", id),
        Some(&alice.token),
        "application/json",
        "{\"title\":",
    )
    .await;
    assert_message!(broken, StatusCode::BAD_REQUEST, "Invalid request body");

    let own = get(&app, "/api/posts", Some(&alice.token)).await;
    assert_eq!(titles(&own.body), vec!["Hello"]);
}

#[tokio::test]
async fn test_feed_and_own_listing() {
    let db = TestDatabase::new().await;
    let app = db.app();
    let alice = signup_unique_user(&app).await;
    let bob = signup_unique_user(&app).await;

    create_post(&app, &alice, "alice public", true).await;
    create_post(&app, &alice, "alice private", false).await;
    create_post(&app, &bob, "bob public", true).await;

    let feed = get(&app, "/api/posts/all", Some(&alice.token)).await;
    assert_eq!(feed.status, StatusCode::OK);
    assert_eq!(titles(&feed.body), vec!["bob public", "alice public"]);

    let own = get(&app, "/api/posts", Some(&alice.token)).await;
    assert_eq!(titles(&own.body), vec!["alice private", "alice public"]);

    let bobs = get(&app, "/api/posts", Some(&bob.token)).await;
    assert_eq!(titles(&bobs.body), vec!["bob public"]);
}

#[tokio::test]
async fn test_get_one() {
    let db = TestDatabase::new().await;
    let app = db.app();
    let alice = signup_unique_user(&app).await;
    let post = create_post(&app, &alice, "Readable", true).await;

    let uri = format!("/api/posts/{}", post["id"].as_str().unwrap());
    let response = get(&app, &uri, Some(&alice.token)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, post);

    let missing = get(&app, &format!("/api/posts/{}", Uuid::new_v4()), Some(&alice.token)).await;
    assert_message!(missing, StatusCode::NOT_FOUND, "Post not found");

    let malformed = get(&app, "/api/posts/not-a-uuid", Some(&alice.token)).await;
    assert_message!(malformed, StatusCode::NOT_FOUND, "Post not found");
}

#[tokio::test]
async fn test_owner_can_update() {
    let db = TestDatabase::new().await;
    let app = db.app();
    let alice = signup_unique_user(&app).await;
    let post = create_post(&app, &alice, "Draft", false).await;
    let uri = format!("/api/posts/{}", post["id"].as_str().unwrap());

    let response = put_json(
        &app,
        &uri,
        Some(&alice.token),
        json!({ "title": "Final", "is_public": true }),
    )
    .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["title"], "Final");
    assert_eq!(response.body["content"], "Some content");
    assert_eq!(response.body["is_public"], true);
}

#[tokio::test]
async fn test_non_owner_delete_looks_like_missing_post() {
    let db = TestDatabase::new().await;
    let app = db.app();
    let alice = signup_unique_user(&app).await;
    let bob = signup_unique_user(&app).await;
    let post = create_post(&app, &alice, "Mine", true).await;
    let uri = format!("/api/posts/{}", post["id"].as_str().unwrap());

    let refused = delete(&app, &uri, Some(&bob.token)).await;
    let missing = delete(&app, &format!("/api/posts/{}", Uuid::new_v4()), Some(&bob.token)).await;
    assert_eq!(refused.status, StatusCode::NOT_FOUND);
    assert_eq!(refused.status, missing.status);
    assert_eq!(refused.body, missing.body);

    // Still there for its owner
    assert_eq!(get(&app, &uri, Some(&alice.token)).await.status, StatusCode::OK);
}

#[tokio::test]
async fn test_non_owner_update_looks_like_missing_post() {
    let db = TestDatabase::new().await;
    let app = db.app();
    let alice = signup_unique_user(&app).await;
    let bob = signup_unique_user(&app).await;
    let post = create_post(&app, &alice, "Mine", true).await;
    let uri = format!("/api/posts/{}", post["id"].as_str().unwrap());

    let refused = put_json(&app, &uri, Some(&bob.token), json!({ "title": "Bob's now" })).await;
    assert_message!(refused, StatusCode::NOT_FOUND, "Post not found");

    let unchanged = get(&app, &uri, Some(&alice.token)).await;
    assert_eq!(unchanged.body["title"], "Mine");
}

#[tokio::test]
async fn test_owner_can_delete() {
    let db = TestDatabase::new().await;
    let app = db.app();
    let alice = signup_unique_user(&app).await;
    let post = create_post(&app, &alice, "Short-lived", false).await;
    let uri = format!("/api/posts/{}", post["id"].as_str().unwrap());

    let response = delete(&app, &uri, Some(&alice.token)).await;
    assert_message!(response, StatusCode::OK, "Post deleted successfully");

    let gone = get(&app, &uri, Some(&alice.token)).await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
}

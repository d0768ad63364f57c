//! Authentication test helpers
//!
//! Provides utilities for creating test users through the API and building
//! credentials for requests.

use axum::http::StatusCode;
use axum::Router;
use serde_json::json;
use uuid::Uuid;

use super::http::post_json;

/// Password every helper-created user gets
pub const TEST_PASSWORD: &str = "secret1";

/// Test user credentials
#[derive(Debug, Clone)]
pub struct TestUser {
    pub id: Uuid,
    pub email: String,
    pub password: String,
    pub token: String,
}

/// Sign a user up through `POST /api/auth/signup`
pub async fn signup_user(app: &Router, email: &str, password: &str) -> TestUser {
    let response = post_json(
        app,
        "/api/auth/signup",
        None,
        json!({ "email": email, "password": password }),
    )
    .await;
    assert_eq!(
        response.status,
        StatusCode::CREATED,
        "signup failed: {:?}",
        response.body
    );

    TestUser {
        id: response.body["user"]["id"]
            .as_str()
            .and_then(|id| Uuid::parse_str(id).ok())
            .expect("signup response without user id"),
        email: email.to_string(),
        password: password.to_string(),
        token: response.body["token"]
            .as_str()
            .expect("signup response without token")
            .to_string(),
    }
}

/// Sign up a user with a unique gmail address
pub async fn signup_unique_user(app: &Router) -> TestUser {
    let email = format!("test_{}@gmail.com", Uuid::new_v4().simple());
    signup_user(app, &email, TEST_PASSWORD).await
}

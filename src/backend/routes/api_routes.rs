/**
 * API Routes
 *
 * This module defines the `/api` routes.
 *
 * # Routes
 *
 * ## Authentication (public)
 * - `POST /api/auth/signup` - User registration
 * - `POST /api/auth/login` - User login
 *
 * ## Profile and posts (bearer token required)
 * - `GET /api/profile` - Current user profile
 * - `GET /api/posts/all` - Public feed
 * - `GET /api/posts`, `POST /api/posts` - Own posts, create post
 * - `GET /api/posts/{id}`, `PUT /api/posts/{id}`, `DELETE /api/posts/{id}` - One post
 */

use std::sync::Arc;

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};

use crate::backend::auth::{get_profile, login, signup};
use crate::backend::middleware::auth::auth_middleware;
use crate::backend::posts::handlers as posts;
use crate::backend::server::state::AppState;

/// Configure API routes
///
/// Protected routes share one `route_layer` running the auth middleware,
/// so an unauthenticated request never reaches their handlers. Unknown
/// paths are left to the router's fallback.
pub fn configure_api_routes(router: Router<AppState>, app_state: &AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/api/profile", get(get_profile))
        .route("/api/posts/all", get(posts::list_public))
        .route("/api/posts", get(posts::list_own).post(posts::create))
        .route(
            "/api/posts/{id}",
            get(posts::get_one).put(posts::update).delete(posts::delete),
        )
        .route_layer(from_fn_with_state(
            Arc::clone(&app_state.tokens),
            auth_middleware,
        ));

    router
        .route("/api/auth/signup", post(signup))
        .route("/api/auth/login", post(login))
        .merge(protected)
}

use super::handlers::post_daily_content::{__path_post_daily_content, post_daily_content};
use super::handlers::respond_to_comments::{__path_respond_to_comments, respond_to_comments};
use crate::application::{auth::admin_auth, http::server::app_state::AppState};

use axum::{Router, middleware, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(post_daily_content, respond_to_comments))]
pub struct SocialApiDoc;

pub fn social_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/api/social/daily-post", state.args.server.root_path),
            post(post_daily_content),
        )
        .route(
            &format!("{}/api/social/comment-replies", state.args.server.root_path),
            post(respond_to_comments),
        )
        .layer(middleware::from_fn_with_state(state.clone(), admin_auth))
}

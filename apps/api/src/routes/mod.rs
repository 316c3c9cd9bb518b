pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::comments::handlers as comments;
use crate::intake::handlers as intake;
use crate::resume::handlers as resume;
use crate::share::handlers as share;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = DefaultBodyLimit::max(state.config.max_body_bytes);

    Router::new()
        .route("/health", get(health::health_handler))
        // Resume CRUD
        .route(
            "/api/resume",
            get(resume::handle_list_resumes).post(resume::handle_create_resume),
        )
        .route(
            "/api/resume/:id",
            get(resume::handle_get_resume)
                .put(resume::handle_update_resume)
                .delete(resume::handle_delete_resume),
        )
        .route("/api/resume/:id/versions", get(resume::handle_list_versions))
        // Comments
        .route(
            "/api/resume/:id/comments",
            get(comments::handle_list_comments)
                .post(comments::handle_create_comment)
                .delete(comments::handle_delete_comment),
        )
        // Sharing
        .route("/api/resume/:id/share", get(share::handle_share))
        .route("/resume/:id", get(share::handle_public_resume))
        // Upload mode
        .route("/api/uploads", post(intake::handle_upload))
        .layer(body_limit)
        .with_state(state)
}

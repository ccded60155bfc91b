pub mod health;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;

use crate::profiles::handlers as profile_handlers;
use crate::screening::handlers as screening_handlers;
use crate::state::AppState;

/// Resumes arrive as multipart uploads; axum's 2 MB default is too small
/// for document batches.
const MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Screening API
        .route(
            "/api/v1/filter-resumes",
            post(screening_handlers::handle_filter_resumes),
        )
        .route(
            "/api/v1/analyze-single",
            post(screening_handlers::handle_analyze_single),
        )
        .route(
            "/api/v1/download-csv",
            post(screening_handlers::handle_download_csv),
        )
        .route(
            "/api/v1/resumes/:filename",
            get(screening_handlers::handle_view_resume),
        )
        // Job profile API
        .route(
            "/api/v1/profiles",
            get(profile_handlers::handle_list_profiles)
                .post(profile_handlers::handle_create_profile),
        )
        .route(
            "/api/v1/profiles/:id",
            get(profile_handlers::handle_get_profile)
                .put(profile_handlers::handle_update_profile)
                .delete(profile_handlers::handle_delete_profile),
        )
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}

use crate::doc::ApiDoc;
use crate::routes;
use crate::state::AppState;
use axum::{Json, Router, routing::get};
use tower::ServiceBuilder;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};
use utoipa::OpenApi;

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Builds the application router over the given state
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::root::index))
        .route("/health", get(routes::health::health))
        .route("/catalog", get(routes::catalog::course_catalog))
        .route("/course/{code}", get(routes::course::course_details))
        .route(
            "/add_course",
            get(routes::add_course::add_course_form).post(routes::add_course::add_course_submit),
        )
        .route("/openapi.json", get(openapi))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new()),
        )
        .with_state(state)
}

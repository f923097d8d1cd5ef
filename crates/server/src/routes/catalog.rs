use crate::notice::NoticeParams;
use crate::state::AppState;
use crate::views;
use axum::{
    extract::{ConnectInfo, Query, State},
    http::StatusCode,
    response::Html,
};
use std::net::SocketAddr;
use std::time::Instant;
use tracing::{error, info, info_span};

/// List all courses
#[utoipa::path(
    get,
    path = "/catalog",
    params(
        ("notice" = Option<String>, Query, description = "Transient notice text carried over a redirect"),
        ("category" = Option<String>, Query, description = "Notice severity: success or danger")
    ),
    responses(
        (status = 200, description = "Course catalog page", content_type = "text/html", body = String),
        (status = 500, description = "Catalog file is unreadable or malformed")
    ),
    tag = "Catalog"
)]
pub async fn course_catalog(
    State(state): State<AppState>,
    Query(params): Query<NoticeParams>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> Result<Html<String>, StatusCode> {
    let started = Instant::now();

    let total = state.metrics.catalog_requests.increment();
    info!(route = "catalog", total, "request counted");

    let span = info_span!(
        "render_course_catalog",
        course.count = tracing::field::Empty,
        user.ip = %addr.ip(),
    );

    let page = span.in_scope(|| -> Result<String, StatusCode> {
        let courses = state.store.load().map_err(|err| {
            error!(error = %err, "failed to load course catalog");
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

        tracing::Span::current().record("course.count", courses.len());
        info!(count = courses.len(), "rendered course catalog");

        Ok(views::catalog_page(&courses, params.notice().as_ref()))
    })?;

    info!(
        duration_ms = started.elapsed().as_millis() as u64,
        "processing time for /catalog"
    );

    Ok(Html(page))
}

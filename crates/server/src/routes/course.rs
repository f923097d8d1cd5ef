use crate::notice::Notice;
use crate::state::AppState;
use crate::views;
use axum::{
    extract::{ConnectInfo, Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use std::net::SocketAddr;
use tracing::{error, info, info_span};

/// Course detail page, looked up by course code
///
/// The code is an untyped path string; duplicates resolve to the first
/// record in catalog order. A miss is an expected outcome and redirects
/// back to the catalog with a notice.
#[utoipa::path(
    get,
    path = "/course/{code}",
    params(
        ("code" = String, Path, description = "Course code to look up")
    ),
    responses(
        (status = 200, description = "Course detail page", content_type = "text/html", body = String),
        (status = 303, description = "Unknown course code; redirect to the catalog with a not-found notice"),
        (status = 500, description = "Catalog file is unreadable or malformed")
    ),
    tag = "Catalog"
)]
pub async fn course_details(
    State(state): State<AppState>,
    Path(code): Path<String>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> Result<Response, StatusCode> {
    let total = state.metrics.course_detail_requests.increment();
    info!(route = "course_details", total, "request counted");

    let span = info_span!(
        "browse_course_details",
        course.code = %code,
        user.ip = %addr.ip(),
    );

    span.in_scope(|| {
        let course = state.store.find(&code).map_err(|err| {
            error!(error = %err, "failed to load course catalog");
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

        match course {
            Some(course) => {
                info!(code = %course.code, coursename = %course.coursename, "displayed course details");
                Ok(Html(views::course_page(&course)).into_response())
            }
            None => {
                error!(code = %code, "no course found");
                let notice = Notice::danger(format!("No course found with code '{code}'."));
                Ok(notice.redirect_to_catalog().into_response())
            }
        }
    })
}

use crate::dtos::course::CourseForm;
use crate::notice::Notice;
use crate::state::AppState;
use crate::views;
use axum::{
    Form,
    extract::State,
    response::{Html, Redirect},
};
use models::course::Course;
use tracing::{error, info, info_span};

/// Blank course creation form
#[utoipa::path(
    get,
    path = "/add_course",
    responses(
        (status = 200, description = "Course creation form", content_type = "text/html", body = String)
    ),
    tag = "Catalog"
)]
pub async fn add_course_form(State(state): State<AppState>) -> Html<String> {
    let total = state.metrics.add_course_requests.increment();
    info!(route = "add_course", total, "request counted");

    Html(views::add_course_page())
}

/// Submit a new course
///
/// Only `coursename` and `instructor` are validated (non-empty after
/// trimming); every other field, `code` included, is stored as submitted.
/// All outcomes redirect to the catalog with a transient notice.
#[utoipa::path(
    post,
    path = "/add_course",
    responses(
        (status = 303, description = "Redirect to the catalog with a success or failure notice")
    ),
    tag = "Catalog"
)]
pub async fn add_course_submit(
    State(state): State<AppState>,
    Form(form): Form<CourseForm>,
) -> Redirect {
    let total = state.metrics.add_course_requests.increment();
    info!(route = "add_course", total, "request counted");

    let course = Course::from(form);
    let span = info_span!(
        "add_new_course",
        course.code = %course.code,
        course.name = %course.coursename,
    );

    let missing = span.in_scope(|| {
        let missing = course.missing_required_fields();
        if !missing.is_empty() {
            let errors = state.metrics.add_course_errors.increment();
            error!(missing_fields = ?missing, errors, "missing required fields");
        }
        missing
    });
    if !missing.is_empty() {
        return Notice::danger("Some fields were missing. Unsuccessful addition.")
            .redirect_to_catalog();
    }

    // one append at a time; the store itself does not lock the file
    let _write = state.lock_writes().await;

    let notice = span.in_scope(|| {
        let saved = info_span!("save_course_data", course.code = %course.code)
            .in_scope(|| state.store.append(course.clone()));

        match saved {
            Ok(()) => {
                info!(code = %course.code, coursename = %course.coursename, "course added");
                Notice::success(format!(
                    "Course '{}' added successfully!",
                    course.coursename
                ))
            }
            Err(err) => {
                let errors = state.metrics.storage_errors.increment();
                error!(error = %err, errors, "database error");
                Notice::danger("Database error occurred.")
            }
        }
    });

    notice.redirect_to_catalog()
}

use crate::routes::{add_course, catalog, course, health, root};
use utoipa::OpenApi;

/// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        root::index,
        health::health,
        catalog::course_catalog,
        course::course_details,
        add_course::add_course_form,
        add_course::add_course_submit
    ),
    tags(
        (name = "Pages", description = "Static pages"),
        (name = "Catalog", description = "Course catalog browsing and creation"),
        (name = "Health", description = "Liveness probe"),
    ),
    info(
        title = "Course Catalog",
        version = "1.0.0",
        description = "Minimal course catalog over a flat JSON file",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ApiDoc;

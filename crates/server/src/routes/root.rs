use crate::views;
use axum::response::Html;
use tracing::{info, info_span};

/// Landing page
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Landing page", content_type = "text/html", body = String)
    ),
    tag = "Pages"
)]
pub async fn index() -> Html<String> {
    info_span!("render_index").in_scope(|| {
        info!("rendered index page");
        Html(views::index_page())
    })
}

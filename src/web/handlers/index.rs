use axum::response::Html;

use crate::constants::responses::INDEX_HTML;

/// Landing page: GET /
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

use axum::http::header;
use axum::response::IntoResponse;

const LIVE_BOARDS_JS: &str = include_str!("../../static/live-boards.js");

/// GET /static/live-boards.js
pub async fn live_boards_js() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/javascript; charset=utf-8")],
        LIVE_BOARDS_JS,
    )
}

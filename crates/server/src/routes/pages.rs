use axum::response::Html;

use crate::error::AppError;
use crate::views::pages;

/// GET /
pub async fn index() -> Html<String> {
    Html(pages::index_page().into_string())
}

/// GET /partidas
pub async fn live_games() -> Html<String> {
    Html(pages::live_games_page().into_string())
}

/// GET /contacto
pub async fn contact() -> Html<String> {
    Html(pages::contact_page().into_string())
}

pub async fn not_found() -> AppError {
    AppError::NotFound("Not found".to_string())
}

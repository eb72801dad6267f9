use axum::response::Html;

const DASHBOARD_HTML: &str = include_str!("dashboard.html");

/// Single-page dashboard over the JSON endpoints.
pub async fn dashboard() -> Html<&'static str> {
    Html(DASHBOARD_HTML)
}

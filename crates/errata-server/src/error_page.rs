use axum::extract::Query;
use axum::response::{Html, IntoResponse, Response};
use http::StatusCode;
use serde::Deserialize;

/// Query parameters accepted on the redirect fallback
#[derive(Debug, Deserialize)]
pub struct ErrorPageQuery {
    #[serde(rename = "statusCode")]
    status_code: Option<String>,
}

/// Error page route handler
///
/// Reached by clients following the redirect fallback; the status travels
/// as the `statusCode` query parameter and defaults to 500 when absent or
/// unparseable.
pub async fn error_page_handler(Query(query): Query<ErrorPageQuery>) -> Response {
    let status = query
        .status_code
        .as_deref()
        .and_then(|code| code.parse().ok())
        .and_then(|code| StatusCode::from_u16(code).ok())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    render(status)
}

/// Render the error page for a status code
///
/// Shared by the route handler and the internal forward, which passes the
/// status as data instead of encoding it in the URL.
pub fn render(status: StatusCode) -> Response {
    let code = status.as_u16();
    let label = status.canonical_reason().unwrap_or("Error");
    let body = format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head><title>{code} {label}</title></head>\n\
         <body>\n\
         <h1>{code} {label}</h1>\n\
         <p>The request could not be completed. If the problem persists, contact the site operator.</p>\n\
         </body>\n\
         </html>\n"
    );

    (status, Html(body)).into_response()
}

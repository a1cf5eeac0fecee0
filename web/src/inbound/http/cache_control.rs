//! Shared response helpers for page handlers.

use actix_web::HttpResponse;
use actix_web::http::header::{self, ContentType};

/// Pages depend on the session cookie and must never be cached.
pub const NO_STORE: &str = "no-store";

/// Build the standard cache-control header tuple for pages.
pub const fn no_store_header() -> (header::HeaderName, &'static str) {
    (header::CACHE_CONTROL, NO_STORE)
}

/// `200 OK` HTML page.
pub fn html_page(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .insert_header(no_store_header())
        .content_type(ContentType::html())
        .body(body)
}

/// `303 See Other` to `location`.
pub fn see_other(location: &'static str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header(no_store_header())
        .insert_header((header::LOCATION, location))
        .finish()
}

use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Response};

use crate::render::Renderer;
use crate::workflows::Outcome;

/// Map a workflow outcome onto the HTTP response contract.
///
/// - `Render` → 200 with the page (validation failures included)
/// - `Redirect` → 302 with `Location`
/// - `NotFound` → 404
/// - `Failure` → 500 with a generic page
pub fn outcome_to_response(outcome: Outcome, renderer: &dyn Renderer) -> Response {
    match outcome {
        Outcome::Render(page) => (StatusCode::OK, Html(renderer.render(&page))).into_response(),
        Outcome::Redirect(location) => (StatusCode::FOUND, [(header::LOCATION, location)]).into_response(),
        Outcome::NotFound => not_found(renderer),
        Outcome::Failure(_) => (StatusCode::INTERNAL_SERVER_ERROR, Html(renderer.server_error())).into_response(),
    }
}

pub fn not_found(renderer: &dyn Renderer) -> Response {
    (StatusCode::NOT_FOUND, Html(renderer.not_found())).into_response()
}

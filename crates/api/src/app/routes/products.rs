use std::sync::Arc;

use axum::{
    Form, Router,
    extract::{Extension, Path},
    response::Response,
    routing::get,
};

use stockroom_products::{FormData, ProductId};

use crate::app::errors;
use crate::app::services::AppServices;
use crate::workflows;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_products))
        .route("/new", get(new_product).post(create_product))
        .route("/:id/edit", get(edit_product).post(update_product))
        .route("/:id/delete", get(confirm_delete_product).post(delete_product))
}

pub async fn list_products(Extension(services): Extension<Arc<AppServices>>) -> Response {
    let outcome = workflows::list(services.store());
    errors::outcome_to_response(outcome, services.renderer())
}

pub async fn new_product(Extension(services): Extension<Arc<AppServices>>) -> Response {
    errors::outcome_to_response(workflows::new_form(), services.renderer())
}

pub async fn create_product(
    Extension(services): Extension<Arc<AppServices>>,
    Form(data): Form<FormData>,
) -> Response {
    let outcome = workflows::create(services.store(), data);
    errors::outcome_to_response(outcome, services.renderer())
}

pub async fn edit_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> Response {
    let Some(id) = parse_id(&id) else {
        return errors::not_found(services.renderer());
    };
    let outcome = workflows::edit_form(services.store(), id);
    errors::outcome_to_response(outcome, services.renderer())
}

pub async fn update_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Form(data): Form<FormData>,
) -> Response {
    let Some(id) = parse_id(&id) else {
        return errors::not_found(services.renderer());
    };
    let outcome = workflows::update(services.store(), id, data);
    errors::outcome_to_response(outcome, services.renderer())
}

pub async fn confirm_delete_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> Response {
    let Some(id) = parse_id(&id) else {
        return errors::not_found(services.renderer());
    };
    let outcome = workflows::confirm_delete(services.store(), id);
    errors::outcome_to_response(outcome, services.renderer())
}

pub async fn delete_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> Response {
    let Some(id) = parse_id(&id) else {
        return errors::not_found(services.renderer());
    };
    let outcome = workflows::delete(services.store(), id);
    errors::outcome_to_response(outcome, services.renderer())
}

/// Ids that don't parse can't exist, so they are simply not found.
fn parse_id(raw: &str) -> Option<ProductId> {
    match raw.parse() {
        Ok(id) => Some(id),
        Err(e) => {
            tracing::info!(id = raw, error = %e, "unparseable product id");
            None
        }
    }
}

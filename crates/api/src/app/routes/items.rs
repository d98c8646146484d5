use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use catalog_core::{DomainError, ItemId};
use catalog_items::{Submission, SubmissionRecord};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_items))
        .route("/:id", get(get_item))
        .route("/:id/submit", post(submit_feedback))
}

pub async fn list_items(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let items = services
        .catalog()
        .list()
        .iter()
        .map(dto::ItemResponse::from)
        .collect::<Vec<_>>();
    (StatusCode::OK, Json(items)).into_response()
}

pub async fn get_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let item_id: ItemId = match id.parse() {
        Ok(v) => v,
        Err(err) => return errors::domain_error_to_response(err),
    };

    match services.catalog().get(item_id) {
        Some(item) => (StatusCode::OK, Json(dto::ItemResponse::from(item))).into_response(),
        None => errors::domain_error_to_response(DomainError::not_found()),
    }
}

pub async fn submit_feedback(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::SubmissionRequest>,
) -> axum::response::Response {
    let item_id: ItemId = match id.parse() {
        Ok(v) => v,
        Err(err) => return errors::domain_error_to_response(err),
    };

    let submission = Submission {
        name: body.name,
        email: body.email,
        message: body.message,
    };

    // Field validation runs before the lookup: a bad payload is rejected with
    // the full violation list even when the item id would also miss.
    if let Err(violations) = submission.validate() {
        return errors::domain_error_to_response(DomainError::validation(violations));
    }

    let Some(item) = services.catalog().get(item_id) else {
        return errors::domain_error_to_response(DomainError::not_found());
    };

    // The submission's only trace: a structured log line. Nothing is stored.
    let record = SubmissionRecord::new(item, &submission);
    tracing::info!(
        item_id = record.item_id.as_i64(),
        item = %record.item_name,
        sender = %record.sender,
        email = %record.email,
        message_chars = record.message_chars,
        received_at = %record.received_at,
        "feedback submission received"
    );

    let response = dto::SubmissionResponse {
        success: true,
        message: submission.acknowledgment(item),
    };
    (StatusCode::OK, Json(response)).into_response()
}

use axum::{http::StatusCode, response::IntoResponse, Json};

/// Root status endpoint; part of the compatibility contract.
pub async fn root() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "message": "Digital Item Catalog API",
    }))
}

pub async fn health() -> StatusCode {
    StatusCode::OK
}

//! Advertisement endpoints

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::{
    error::AppResult,
    models::advertisement::{AdSubmissionReceipt, CreateAdvertisement},
};

/// Serve one random active advertisement
///
/// An empty ad slot is a normal state: the response is still 200, with a
/// `message` body instead of an ad.
#[utoipa::path(
    get,
    path = "/ads",
    tag = "advertisements",
    responses(
        (status = 200, description = "A random eligible advertisement, or {\"message\": \"No active ads\"} when the slot is empty", body = crate::models::advertisement::ActiveAd)
    )
)]
pub async fn active_ad(State(state): State<crate::AppState>) -> AppResult<Response> {
    match state.services.advertisements.active_ad().await? {
        Some(ad) => Ok(Json(ad).into_response()),
        None => Ok(Json(json!({ "message": "No active ads" })).into_response()),
    }
}

/// Submit a new advertisement
#[utoipa::path(
    post,
    path = "/ads",
    tag = "advertisements",
    request_body = CreateAdvertisement,
    responses(
        (status = 200, description = "Submission accepted, payment pending", body = AdSubmissionReceipt),
        (status = 400, description = "Invalid submission", body = crate::error::ErrorResponse)
    )
)]
pub async fn submit_ad(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateAdvertisement>,
) -> AppResult<Json<AdSubmissionReceipt>> {
    let receipt = state.services.advertisements.submit(&data).await?;
    Ok(Json(receipt))
}

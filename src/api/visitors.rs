//! Visitor counter endpoints

use axum::{extract::State, Json};

use crate::{
    error::AppResult,
    models::visitor::{VisitSnapshot, VisitorTotals},
};

/// Record one visit for today
#[utoipa::path(
    post,
    path = "/visits",
    tag = "visitors",
    responses(
        (status = 200, description = "Updated counter for today", body = VisitSnapshot)
    )
)]
pub async fn record_visit(
    State(state): State<crate::AppState>,
) -> AppResult<Json<VisitSnapshot>> {
    let snapshot = state.services.visitors.record_visit().await?;
    Ok(Json(snapshot))
}

/// All-time and today's visit counts
#[utoipa::path(
    get,
    path = "/visits",
    tag = "visitors",
    responses(
        (status = 200, description = "Aggregate visit counts", body = VisitorTotals)
    )
)]
pub async fn visitor_totals(
    State(state): State<crate::AppState>,
) -> AppResult<Json<VisitorTotals>> {
    let totals = state.services.visitors.totals().await?;
    Ok(Json(totals))
}

//! Visitor counter models

use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

/// Result of recording one visit
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct VisitSnapshot {
    /// Visit count for the day after the increment
    pub count: i32,
    /// Day the visit was recorded on (YYYY-MM-DD)
    pub date: NaiveDate,
}

/// Aggregate visit counts
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct VisitorTotals {
    /// Sum of visit counts across all days
    pub total: i64,
    /// Visit count for today
    pub today: i32,
}

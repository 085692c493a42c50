//! Visitor counters repository

use chrono::NaiveDate;
use sqlx::{Pool, Postgres};

use crate::error::AppResult;

#[derive(Clone)]
pub struct VisitorsRepository {
    pool: Pool<Postgres>,
}

impl VisitorsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Record one visit for the given day and return the new count
    ///
    /// A single conditional insert/update statement, so concurrent calls
    /// never lose an increment.
    pub async fn record_visit(&self, day: NaiveDate) -> AppResult<i32> {
        let count: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO visitors (visit_date, visit_count)
            VALUES ($1, 1)
            ON CONFLICT (visit_date)
            DO UPDATE SET visit_count = visitors.visit_count + 1
            RETURNING visit_count
            "#,
        )
        .bind(day)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    /// Total visit count across all days, 0 when the table is empty
    pub async fn total(&self) -> AppResult<i64> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COALESCE(SUM(visit_count), 0)::bigint FROM visitors",
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(total)
    }

    /// Visit count for the given day, 0 when no row exists
    pub async fn count_on(&self, day: NaiveDate) -> AppResult<i32> {
        let count: Option<i32> = sqlx::query_scalar(
            "SELECT visit_count FROM visitors WHERE visit_date = $1",
        )
        .bind(day)
        .fetch_optional(&self.pool)
        .await?;

        Ok(count.unwrap_or(0))
    }
}

//! Visitor counter service

use chrono::Utc;

use crate::{
    error::AppResult,
    models::visitor::{VisitSnapshot, VisitorTotals},
    repository::Repository,
};

#[derive(Clone)]
pub struct VisitorsService {
    repository: Repository,
}

impl VisitorsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Record one visit for today and return the updated day counter
    pub async fn record_visit(&self) -> AppResult<VisitSnapshot> {
        let today = Utc::now().date_naive();
        let count = self.repository.visitors.record_visit(today).await?;

        Ok(VisitSnapshot { count, date: today })
    }

    /// All-time and today's visit counts
    pub async fn totals(&self) -> AppResult<VisitorTotals> {
        let today = Utc::now().date_naive();
        let total = self.repository.visitors.total().await?;
        let today_count = self.repository.visitors.count_on(today).await?;

        Ok(VisitorTotals {
            total,
            today: today_count,
        })
    }
}

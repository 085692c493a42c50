//! Advertisements service

use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use validator::Validate;

use crate::{
    config::PaymentConfig,
    error::{AppError, AppResult},
    models::advertisement::{ActiveAd, AdSubmissionReceipt, CreateAdvertisement},
    repository::Repository,
};

#[derive(Clone)]
pub struct AdvertisementsService {
    repository: Repository,
    payment: PaymentConfig,
}

impl AdvertisementsService {
    pub fn new(repository: Repository, payment: PaymentConfig) -> Self {
        Self {
            repository,
            payment,
        }
    }

    /// One random advertisement currently eligible for serving, if any
    pub async fn active_ad(&self) -> AppResult<Option<ActiveAd>> {
        self.repository.advertisements.pick_active().await
    }

    /// Accept a submission and return a receipt with the quoted total
    ///
    /// The row is stored with status 'pending' and an unconfirmed payment;
    /// activation happens out of band once the payment arrives.
    pub async fn submit(&self, data: &CreateAdvertisement) -> AppResult<AdSubmissionReceipt> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let start_date = parse_date(&data.start_date, "start_date")?;
        let end_date = parse_date(&data.end_date, "end_date")?;
        if end_date < start_date {
            return Err(AppError::Validation(
                "end_date must not be before start_date".to_string(),
            ));
        }

        let days = campaign_days(start_date, end_date);
        let total_cost = campaign_cost(data.price_per_day, days)
            .to_f64()
            .ok_or_else(|| AppError::Internal("Quote out of range".to_string()))?;

        let id = self
            .repository
            .advertisements
            .create_pending(data, start_date, end_date)
            .await?;

        tracing::info!(id, days, total_cost, "advertisement submitted");

        Ok(AdSubmissionReceipt {
            id,
            message: "Ad request submitted".to_string(),
            payment_phone: self.payment.phone.clone(),
            total_cost,
            days,
        })
    }
}

fn parse_date(value: &str, field: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| AppError::Validation(format!("Invalid {} format", field)))
}

/// Number of billed days, both boundary dates included
fn campaign_days(start_date: NaiveDate, end_date: NaiveDate) -> i64 {
    (end_date - start_date).num_days() + 1
}

fn campaign_cost(price_per_day: Decimal, days: i64) -> Decimal {
    price_per_day * Decimal::from(days)
}

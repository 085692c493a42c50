//! Advertisement models

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Advertisement as served to visitors
///
/// Only rows with status 'active', a confirmed payment and a campaign
/// period covering the current date are ever selected for serving.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct ActiveAd {
    pub id: i32,
    pub company_name: String,
    pub ad_title: String,
    pub ad_description: String,
    pub ad_url: String,
    pub image_url: String,
    /// First day of the campaign
    pub start_date: NaiveDate,
    /// Last day of the campaign (inclusive)
    pub end_date: NaiveDate,
}

/// Advertisement submission request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateAdvertisement {
    #[validate(length(min = 1, message = "company_name must not be empty"))]
    pub company_name: String,
    #[validate(email(message = "Invalid email format"))]
    pub contact_email: String,
    #[serde(default)]
    pub contact_phone: String,
    #[validate(length(min = 1, message = "ad_title must not be empty"))]
    pub ad_title: String,
    #[validate(length(min = 1, message = "ad_description must not be empty"))]
    pub ad_description: String,
    #[serde(default)]
    pub ad_url: String,
    #[serde(default)]
    pub image_url: String,
    /// Price in rubles per campaign day
    pub price_per_day: Decimal,
    /// First day of the campaign (YYYY-MM-DD)
    pub start_date: String,
    /// Last day of the campaign, inclusive (YYYY-MM-DD)
    pub end_date: String,
}

/// Receipt returned for an accepted submission
///
/// The submission is stored with status 'pending'; it goes live once the
/// quoted amount is transferred to `payment_phone` and an administrator
/// confirms the payment.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AdSubmissionReceipt {
    /// ID of the created advertisement
    pub id: i32,
    pub message: String,
    /// Phone number to transfer the payment to
    pub payment_phone: String,
    /// Quoted total for the whole campaign
    pub total_cost: f64,
    /// Number of campaign days, both boundary dates included
    pub days: i64,
}

//! Advertisements repository

use chrono::NaiveDate;
use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::advertisement::{ActiveAd, CreateAdvertisement},
};

#[derive(Clone)]
pub struct AdvertisementsRepository {
    pool: Pool<Postgres>,
}

impl AdvertisementsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Pick one eligible advertisement uniformly at random
    ///
    /// Eligible means status 'active', payment confirmed and the current
    /// date inside the campaign period. Returns `None` when no row
    /// qualifies, which is a normal state, not an error.
    pub async fn pick_active(&self) -> AppResult<Option<ActiveAd>> {
        let ad = sqlx::query_as::<_, ActiveAd>(
            r#"
            SELECT id, company_name, ad_title, ad_description, ad_url,
                   image_url, start_date, end_date
            FROM advertisements
            WHERE status = 'active'
              AND payment_confirmed = true
              AND start_date <= CURRENT_DATE
              AND end_date >= CURRENT_DATE
            ORDER BY RANDOM()
            LIMIT 1
            "#,
        )
        .fetch_optional(&self.pool)
        .await?;

        Ok(ad)
    }

    /// Insert a new submission with status 'pending', returning its ID
    ///
    /// Campaign dates are passed separately, already parsed by the caller.
    pub async fn create_pending(
        &self,
        data: &CreateAdvertisement,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> AppResult<i32> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO advertisements
            (company_name, contact_email, contact_phone, ad_title, ad_description,
             ad_url, image_url, price_per_day, start_date, end_date, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, 'pending')
            RETURNING id
            "#,
        )
        .bind(&data.company_name)
        .bind(&data.contact_email)
        .bind(&data.contact_phone)
        .bind(&data.ad_title)
        .bind(&data.ad_description)
        .bind(&data.ad_url)
        .bind(&data.image_url)
        .bind(data.price_per_day)
        .bind(start_date)
        .bind(end_date)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }
}

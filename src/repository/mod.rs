//! Repository layer for database operations

pub mod advertisements;
pub mod visitors;

use sqlx::{Pool, Postgres};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub advertisements: advertisements::AdvertisementsRepository,
    pub visitors: visitors::VisitorsRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            advertisements: advertisements::AdvertisementsRepository::new(pool.clone()),
            visitors: visitors::VisitorsRepository::new(pool.clone()),
            pool,
        }
    }
}

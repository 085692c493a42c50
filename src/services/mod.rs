//! Business logic services

pub mod advertisements;
pub mod visitors;

use crate::{config::PaymentConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub advertisements: advertisements::AdvertisementsService,
    pub visitors: visitors::VisitorsService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, payment: PaymentConfig) -> Self {
        Self {
            advertisements: advertisements::AdvertisementsService::new(
                repository.clone(),
                payment,
            ),
            visitors: visitors::VisitorsService::new(repository),
        }
    }
}

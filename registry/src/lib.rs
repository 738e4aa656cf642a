use std::sync::Arc;

use adapter::database::ConnectionPool;
use adapter::repository::booking::BookingRepositoryImpl;
use adapter::repository::catalog::CatalogRepositoryImpl;
use adapter::repository::health::HealthCheckRepositoryImpl;
use kernel::repository::booking::BookingRepository;
use kernel::repository::catalog::CatalogRepository;
use kernel::repository::health::HealthCheckRepository;
use shared::config::{AppConfig, BookingPolicy};

#[derive(Clone)]
pub struct AppRegistry {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    catalog_repository: Arc<dyn CatalogRepository>,
    booking_repository: Arc<dyn BookingRepository>,
    booking_policy: BookingPolicy,
}

impl AppRegistry {
    pub fn new(pool: ConnectionPool, app_config: AppConfig) -> Self {
        let health_check_repository = Arc::new(HealthCheckRepositoryImpl::new(pool.clone()));
        let catalog_repository = Arc::new(CatalogRepositoryImpl::new(pool.clone()));
        let booking_repository = Arc::new(BookingRepositoryImpl::new(pool.clone()));
        Self {
            health_check_repository,
            catalog_repository,
            booking_repository,
            booking_policy: app_config.booking,
        }
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn catalog_repository(&self) -> Arc<dyn CatalogRepository> {
        self.catalog_repository.clone()
    }

    pub fn booking_repository(&self) -> Arc<dyn BookingRepository> {
        self.booking_repository.clone()
    }

    pub fn booking_policy(&self) -> BookingPolicy {
        self.booking_policy
    }
}

//! City business rules.

use std::sync::Arc;

use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::model::{City, NewCity};
use crate::domain::repo::CitiesRepository;
use crate::domain::service::validate_name;

pub struct CitiesService<C> {
    db: DatabaseConnection,
    cities: Arc<C>,
}

impl<C: CitiesRepository> CitiesService<C> {
    pub fn new(db: DatabaseConnection, cities: Arc<C>) -> Self {
        Self { db, cities }
    }

    #[instrument(skip(self, new_city), fields(city_name = %new_city.name))]
    pub async fn add_city(&self, new_city: NewCity) -> Result<City, DomainError> {
        validate_name("name", &new_city.name)?;

        let txn = self.db.begin().await?;

        if self.cities.find_by_name(&txn, &new_city.name).await?.is_some() {
            return Err(DomainError::already_exists("city", new_city.name));
        }

        let city = City {
            id: Uuid::new_v4(),
            name: new_city.name,
        };
        let city = self.cities.insert(&txn, city).await?;

        txn.commit().await?;
        info!(city_id = %city.id, "city added");
        Ok(city)
    }

    pub async fn list_cities(&self) -> Result<Vec<City>, DomainError> {
        self.cities.list(&self.db).await
    }

    /// Lookup used by the hotel flow; `NotFound` when the city is absent.
    pub async fn city_by_name(&self, name: &str) -> Result<City, DomainError> {
        self.cities
            .find_by_name(&self.db, name)
            .await?
            .ok_or_else(|| DomainError::not_found("city", name))
    }
}

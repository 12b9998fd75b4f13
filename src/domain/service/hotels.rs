//! Hotel business rules.

use std::sync::Arc;

use chrono::Utc;
use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::model::{Hotel, HotelUpdate, NewHotel};
use crate::domain::repo::{CitiesRepository, DirectorsRepository, HotelsRepository};
use crate::domain::service::validate_name;

pub struct HotelsService<H, C, D> {
    db: DatabaseConnection,
    hotels: Arc<H>,
    cities: Arc<C>,
    directors: Arc<D>,
}

impl<H, C, D> HotelsService<H, C, D>
where
    H: HotelsRepository,
    C: CitiesRepository,
    D: DirectorsRepository,
{
    pub fn new(db: DatabaseConnection, hotels: Arc<H>, cities: Arc<C>, directors: Arc<D>) -> Self {
        Self {
            db,
            hotels,
            cities,
            directors,
        }
    }

    /// Creates a hotel in the named city, run by the given director.
    ///
    /// The hotel name is a global natural key: when a hotel of that name
    /// already exists it is linked to the city (and handed to the director)
    /// instead of being duplicated. Creating it twice in the same city fails
    /// with `AlreadyExists`.
    #[instrument(skip(self, new_hotel), fields(hotel_name = %new_hotel.name, city = %city_name))]
    pub async fn create_hotel(
        &self,
        new_hotel: NewHotel,
        city_name: &str,
        director_id: Uuid,
    ) -> Result<Hotel, DomainError> {
        validate_name("name", &new_hotel.name)?;

        let txn = self.db.begin().await?;

        let city = self
            .cities
            .find_by_name(&txn, city_name)
            .await?
            .ok_or_else(|| DomainError::not_found("city", city_name))?;
        let director = self
            .directors
            .find_by_id(&txn, director_id)
            .await?
            .ok_or_else(|| DomainError::not_found("director", director_id.to_string()))?;

        let hotel = match self.hotels.find_by_name(&txn, &new_hotel.name).await? {
            Some(existing) => {
                if self.hotels.is_in_city(&txn, existing.id, city.id).await? {
                    // Dropping the open transaction rolls it back.
                    return Err(DomainError::already_exists(
                        "hotel",
                        format!("{} in city {}", existing.name, city.name),
                    ));
                }
                debug!(hotel_id = %existing.id, "linking existing hotel to city");
                self.hotels.link_to_city(&txn, existing.id, city.id).await?;

                let mut hotel = existing;
                hotel.director_id = director.id;
                hotel.updated_at = Utc::now();
                self.hotels.update(&txn, hotel).await?
            }
            None => {
                let now = Utc::now();
                let hotel = Hotel {
                    id: Uuid::new_v4(),
                    name: new_hotel.name,
                    director_id: director.id,
                    created_at: now,
                    updated_at: now,
                };
                let hotel = self.hotels.insert(&txn, hotel).await?;
                self.hotels.link_to_city(&txn, hotel.id, city.id).await?;
                hotel
            }
        };

        txn.commit().await?;
        info!(hotel_id = %hotel.id, "hotel created");
        Ok(hotel)
    }

    pub async fn list_hotels(&self) -> Result<Vec<Hotel>, DomainError> {
        self.hotels.list(&self.db).await
    }

    #[instrument(skip(self), fields(hotel_id = %id))]
    pub async fn get_hotel(&self, id: Uuid) -> Result<Hotel, DomainError> {
        self.hotels
            .find_by_id(&self.db, id)
            .await?
            .ok_or_else(|| DomainError::not_found("hotel", id.to_string()))
    }

    /// Overwrites the name field only; idempotent.
    #[instrument(skip(self, update), fields(hotel_id = %id))]
    pub async fn update_hotel(&self, id: Uuid, update: HotelUpdate) -> Result<Hotel, DomainError> {
        validate_name("name", &update.name)?;

        let txn = self.db.begin().await?;

        let mut hotel = self
            .hotels
            .find_by_id(&txn, id)
            .await?
            .ok_or_else(|| DomainError::not_found("hotel", id.to_string()))?;
        hotel.name = update.name;
        hotel.updated_at = Utc::now();
        let hotel = self.hotels.update(&txn, hotel).await?;

        txn.commit().await?;
        Ok(hotel)
    }

    #[instrument(skip(self), fields(city = %city_name))]
    pub async fn hotels_in_city(&self, city_name: &str) -> Result<Vec<Hotel>, DomainError> {
        let city = self
            .cities
            .find_by_name(&self.db, city_name)
            .await?
            .ok_or_else(|| DomainError::not_found("city", city_name))?;
        self.hotels.list_in_city(&self.db, city.id).await
    }

    pub async fn hotel_exists(&self, id: Uuid) -> Result<bool, DomainError> {
        self.hotels.exists(&self.db, id).await
    }
}

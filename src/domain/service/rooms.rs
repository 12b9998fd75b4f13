//! Room business rules, including the characteristic filter.

use std::sync::Arc;

use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::model::{NewRoom, Room, RoomFilter};
use crate::domain::repo::{HotelsRepository, RoomsRepository};

pub struct RoomsService<R, H> {
    db: DatabaseConnection,
    rooms: Arc<R>,
    hotels: Arc<H>,
}

impl<R, H> RoomsService<R, H>
where
    R: RoomsRepository,
    H: HotelsRepository,
{
    pub fn new(db: DatabaseConnection, rooms: Arc<R>, hotels: Arc<H>) -> Self {
        Self { db, rooms, hotels }
    }

    #[instrument(skip(self, new_room), fields(hotel_id = %hotel_id))]
    pub async fn add_room(&self, hotel_id: Uuid, new_room: NewRoom) -> Result<Room, DomainError> {
        if new_room.capacity <= 0 {
            return Err(DomainError::validation("capacity", "must be positive"));
        }
        if new_room.price_per_night < 0 {
            return Err(DomainError::validation(
                "pricePerNight",
                "must not be negative",
            ));
        }

        let txn = self.db.begin().await?;

        let hotel = self
            .hotels
            .find_by_id(&txn, hotel_id)
            .await?
            .ok_or_else(|| DomainError::not_found("hotel", hotel_id.to_string()))?;

        let room = Room {
            id: Uuid::new_v4(),
            hotel_id: hotel.id,
            capacity: new_room.capacity,
            price_per_night: new_room.price_per_night,
            wifi: new_room.wifi,
            air_conditioning: new_room.air_conditioning,
        };
        let room = self.rooms.insert(&txn, room).await?;

        txn.commit().await?;
        info!(room_id = %room.id, "room added");
        Ok(room)
    }

    /// All rooms of the hotel. Fails `NotFound` when the hotel is absent.
    #[instrument(skip(self), fields(hotel_id = %hotel_id))]
    pub async fn rooms_by_hotel(&self, hotel_id: Uuid) -> Result<Vec<Room>, DomainError> {
        if !self.hotels.exists(&self.db, hotel_id).await? {
            return Err(DomainError::not_found("hotel", hotel_id.to_string()));
        }
        self.rooms.list_by_hotel(&self.db, hotel_id).await
    }

    /// Rooms of the hotel matching every set filter field (logical AND);
    /// unset fields do not constrain the result set.
    #[instrument(skip(self, filter), fields(hotel_id = %hotel_id))]
    pub async fn rooms_by_filter(
        &self,
        hotel_id: Uuid,
        filter: RoomFilter,
    ) -> Result<Vec<Room>, DomainError> {
        let hotel = self
            .hotels
            .find_by_id(&self.db, hotel_id)
            .await?
            .ok_or_else(|| DomainError::not_found("hotel", hotel_id.to_string()))?;
        self.rooms.list_matching(&self.db, hotel.id, &filter).await
    }
}

//! Repository traits over the persistence gateway.
//!
//! Every method takes a generic `ConnectionTrait` runner so that a service
//! can pass either the pooled connection or an open transaction.

use async_trait::async_trait;
use sea_orm::ConnectionTrait;
use uuid::Uuid;

use super::error::DomainError;
use super::model::{City, Director, Hotel, Room, RoomFilter};

#[async_trait]
pub trait HotelsRepository: Send + Sync {
    async fn find_by_id<C: ConnectionTrait>(
        &self,
        conn: &C,
        id: Uuid,
    ) -> Result<Option<Hotel>, DomainError>;

    /// Look up a hotel by its name. The name is a global natural key
    /// (unique index); a hotel listed in several cities is one row.
    async fn find_by_name<C: ConnectionTrait>(
        &self,
        conn: &C,
        name: &str,
    ) -> Result<Option<Hotel>, DomainError>;

    async fn exists<C: ConnectionTrait>(&self, conn: &C, id: Uuid) -> Result<bool, DomainError>;

    async fn list<C: ConnectionTrait>(&self, conn: &C) -> Result<Vec<Hotel>, DomainError>;

    async fn insert<C: ConnectionTrait>(
        &self,
        conn: &C,
        hotel: Hotel,
    ) -> Result<Hotel, DomainError>;

    async fn update<C: ConnectionTrait>(
        &self,
        conn: &C,
        hotel: Hotel,
    ) -> Result<Hotel, DomainError>;

    async fn list_in_city<C: ConnectionTrait>(
        &self,
        conn: &C,
        city_id: Uuid,
    ) -> Result<Vec<Hotel>, DomainError>;

    async fn is_in_city<C: ConnectionTrait>(
        &self,
        conn: &C,
        hotel_id: Uuid,
        city_id: Uuid,
    ) -> Result<bool, DomainError>;

    async fn link_to_city<C: ConnectionTrait>(
        &self,
        conn: &C,
        hotel_id: Uuid,
        city_id: Uuid,
    ) -> Result<(), DomainError>;
}

#[async_trait]
pub trait RoomsRepository: Send + Sync {
    async fn insert<C: ConnectionTrait>(&self, conn: &C, room: Room) -> Result<Room, DomainError>;

    async fn list_by_hotel<C: ConnectionTrait>(
        &self,
        conn: &C,
        hotel_id: Uuid,
    ) -> Result<Vec<Room>, DomainError>;

    /// Rooms of the hotel matching every set filter field.
    async fn list_matching<C: ConnectionTrait>(
        &self,
        conn: &C,
        hotel_id: Uuid,
        filter: &RoomFilter,
    ) -> Result<Vec<Room>, DomainError>;
}

#[async_trait]
pub trait DirectorsRepository: Send + Sync {
    async fn find_by_id<C: ConnectionTrait>(
        &self,
        conn: &C,
        id: Uuid,
    ) -> Result<Option<Director>, DomainError>;

    async fn find_by_name<C: ConnectionTrait>(
        &self,
        conn: &C,
        name: &str,
    ) -> Result<Option<Director>, DomainError>;

    async fn insert<C: ConnectionTrait>(
        &self,
        conn: &C,
        director: Director,
    ) -> Result<Director, DomainError>;

    async fn list<C: ConnectionTrait>(&self, conn: &C) -> Result<Vec<Director>, DomainError>;
}

#[async_trait]
pub trait CitiesRepository: Send + Sync {
    async fn find_by_name<C: ConnectionTrait>(
        &self,
        conn: &C,
        name: &str,
    ) -> Result<Option<City>, DomainError>;

    async fn insert<C: ConnectionTrait>(&self, conn: &C, city: City) -> Result<City, DomainError>;

    async fn list<C: ConnectionTrait>(&self, conn: &C) -> Result<Vec<City>, DomainError>;
}

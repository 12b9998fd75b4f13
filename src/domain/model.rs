//! Domain models for hotels, rooms, directors and cities.
//!
//! These are plain data structures, distinct from both the persisted
//! entities (`infra::storage::entity`) and the REST DTOs (`api::rest::dto`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A hotel. May be listed in several cities; the association lives in the
/// `city_hotels` join table and is resolved through the repository, never by
/// object-graph traversal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hotel {
    pub id: Uuid,
    pub name: String,
    pub director_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a hotel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewHotel {
    pub name: String,
}

/// Name-only update, matching the update surface of the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotelUpdate {
    pub name: String,
}

/// A room, owned by exactly one hotel.
///
/// Prices are in minor currency units to keep the stored value exact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: Uuid,
    pub hotel_id: Uuid,
    pub capacity: i32,
    pub price_per_night: i64,
    pub wifi: bool,
    pub air_conditioning: bool,
}

/// Input for adding a room to a hotel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewRoom {
    pub capacity: i32,
    pub price_per_night: i64,
    pub wifi: bool,
    pub air_conditioning: bool,
}

/// Optional room criteria. A field left unset does not constrain the result
/// set; all set fields combine with logical AND.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomFilter {
    pub capacity: Option<i32>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    pub wifi: Option<bool>,
    pub air_conditioning: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Director {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewDirector {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCity {
    pub name: String,
}

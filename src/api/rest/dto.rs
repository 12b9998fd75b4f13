//! REST DTOs.
//!
//! These have serde and utoipa derives for REST serialization; the domain
//! only ever sees them converted into its own input types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::domain::model::{
    City, Director, Hotel, HotelUpdate, NewCity, NewDirector, NewHotel, NewRoom, Room, RoomFilter,
};

// === Hotel DTOs ===

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HotelDto {
    pub id: Uuid,
    pub name: String,
    pub director_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Hotel> for HotelDto {
    fn from(hotel: Hotel) -> Self {
        Self {
            id: hotel.id,
            name: hotel.name,
            director_id: hotel.director_id,
            created_at: hotel.created_at,
            updated_at: hotel.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateHotelRequest {
    pub name: String,
}

impl From<CreateHotelRequest> for NewHotel {
    fn from(req: CreateHotelRequest) -> Self {
        Self { name: req.name }
    }
}

/// Query parameters accompanying hotel creation.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct CreateHotelParams {
    pub city_name: String,
    pub director_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateHotelRequest {
    pub name: String,
}

impl From<UpdateHotelRequest> for HotelUpdate {
    fn from(req: UpdateHotelRequest) -> Self {
        Self { name: req.name }
    }
}

// === Room DTOs ===

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoomDto {
    pub id: Uuid,
    pub hotel_id: Uuid,
    pub capacity: i32,
    pub price_per_night: i64,
    pub wifi: bool,
    pub air_conditioning: bool,
}

impl From<Room> for RoomDto {
    fn from(room: Room) -> Self {
        Self {
            id: room.id,
            hotel_id: room.hotel_id,
            capacity: room.capacity,
            price_per_night: room.price_per_night,
            wifi: room.wifi,
            air_conditioning: room.air_conditioning,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoomRequest {
    pub capacity: i32,
    pub price_per_night: i64,
    #[serde(default)]
    pub wifi: bool,
    #[serde(default)]
    pub air_conditioning: bool,
}

impl From<CreateRoomRequest> for NewRoom {
    fn from(req: CreateRoomRequest) -> Self {
        Self {
            capacity: req.capacity,
            price_per_night: req.price_per_night,
            wifi: req.wifi,
            air_conditioning: req.air_conditioning,
        }
    }
}

/// Optional room search criteria; an omitted parameter does not filter.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct RoomSearchQuery {
    pub capacity: Option<i32>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    pub wifi: Option<bool>,
    pub air_conditioning: Option<bool>,
}

impl From<RoomSearchQuery> for RoomFilter {
    fn from(query: RoomSearchQuery) -> Self {
        Self {
            capacity: query.capacity,
            min_price: query.min_price,
            max_price: query.max_price,
            wifi: query.wifi,
            air_conditioning: query.air_conditioning,
        }
    }
}

// === Director DTOs ===

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DirectorDto {
    pub id: Uuid,
    pub name: String,
}

impl From<Director> for DirectorDto {
    fn from(director: Director) -> Self {
        Self {
            id: director.id,
            name: director.name,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateDirectorRequest {
    pub name: String,
}

impl From<CreateDirectorRequest> for NewDirector {
    fn from(req: CreateDirectorRequest) -> Self {
        Self { name: req.name }
    }
}

// === City DTOs ===

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CityDto {
    pub id: Uuid,
    pub name: String,
}

impl From<City> for CityDto {
    fn from(city: City) -> Self {
        Self {
            id: city.id,
            name: city.name,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateCityRequest {
    pub name: String,
}

impl From<CreateCityRequest> for NewCity {
    fn from(req: CreateCityRequest) -> Self {
        Self { name: req.name }
    }
}

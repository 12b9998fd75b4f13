//! Entity to domain model mappers.

use sea_orm::ActiveValue::Set;

use crate::domain::model::{City, Director, Hotel, Room};

use super::entity::{city, director, hotel, room};

impl From<hotel::Model> for Hotel {
    fn from(model: hotel::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            director_id: model.director_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

pub fn hotel_to_active_model(hotel: &Hotel) -> hotel::ActiveModel {
    hotel::ActiveModel {
        id: Set(hotel.id),
        name: Set(hotel.name.clone()),
        director_id: Set(hotel.director_id),
        created_at: Set(hotel.created_at),
        updated_at: Set(hotel.updated_at),
    }
}

impl From<room::Model> for Room {
    fn from(model: room::Model) -> Self {
        Self {
            id: model.id,
            hotel_id: model.hotel_id,
            capacity: model.capacity,
            price_per_night: model.price_per_night,
            wifi: model.wifi,
            air_conditioning: model.air_conditioning,
        }
    }
}

pub fn room_to_active_model(room: &Room) -> room::ActiveModel {
    room::ActiveModel {
        id: Set(room.id),
        hotel_id: Set(room.hotel_id),
        capacity: Set(room.capacity),
        price_per_night: Set(room.price_per_night),
        wifi: Set(room.wifi),
        air_conditioning: Set(room.air_conditioning),
    }
}

impl From<director::Model> for Director {
    fn from(model: director::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
        }
    }
}

pub fn director_to_active_model(director: &Director) -> director::ActiveModel {
    director::ActiveModel {
        id: Set(director.id),
        name: Set(director.name.clone()),
    }
}

impl From<city::Model> for City {
    fn from(model: city::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
        }
    }
}

pub fn city_to_active_model(city: &City) -> city::ActiveModel {
    city::ActiveModel {
        id: Set(city.id),
        name: Set(city.name.clone()),
    }
}

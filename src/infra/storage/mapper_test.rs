#[cfg(test)]
mod tests {
    use super::super::*;
    use chrono::Utc;
    use sea_orm::ActiveValue::Set;
    use uuid::Uuid;

    use crate::domain::model::{Hotel, Room};

    #[test]
    fn test_hotel_entity_to_domain_conversion() {
        let id = Uuid::new_v4();
        let director_id = Uuid::new_v4();
        let now = Utc::now();

        let model = entity::hotel::Model {
            id,
            name: "Grand".to_owned(),
            director_id,
            created_at: now,
            updated_at: now,
        };

        let hotel: Hotel = model.into();

        assert_eq!(hotel.id, id);
        assert_eq!(hotel.name, "Grand");
        assert_eq!(hotel.director_id, director_id);
        assert_eq!(hotel.created_at, now);
    }

    #[test]
    fn test_hotel_to_active_model_sets_every_column() {
        let now = Utc::now();
        let hotel = Hotel {
            id: Uuid::new_v4(),
            name: "Grand".to_owned(),
            director_id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
        };

        let am = mapper::hotel_to_active_model(&hotel);

        assert_eq!(am.id, Set(hotel.id));
        assert_eq!(am.name, Set(hotel.name.clone()));
        assert_eq!(am.director_id, Set(hotel.director_id));
    }

    #[test]
    fn test_room_round_trip_through_active_model() {
        let room = Room {
            id: Uuid::new_v4(),
            hotel_id: Uuid::new_v4(),
            capacity: 3,
            price_per_night: 7500,
            wifi: true,
            air_conditioning: false,
        };

        let am = mapper::room_to_active_model(&room);
        let model = entity::room::Model {
            id: room.id,
            hotel_id: room.hotel_id,
            capacity: room.capacity,
            price_per_night: room.price_per_night,
            wifi: room.wifi,
            air_conditioning: room.air_conditioning,
        };

        assert_eq!(am.capacity, Set(3));
        assert_eq!(Room::from(model), room);
    }
}

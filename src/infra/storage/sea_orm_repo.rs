//! `SeaORM` implementations of the repository traits.

use async_trait::async_trait;
use sea_orm::ActiveValue::{Set, Unchanged};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, EntityTrait, QueryFilter, SqlErr,
};
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::model::{City, Director, Hotel, Room, RoomFilter};
use crate::domain::repo::{
    CitiesRepository, DirectorsRepository, HotelsRepository, RoomsRepository,
};

use super::entity::{city, city_hotel, director, hotel, room};
use super::mapper;

/// Folds the optional filter fields into one conjunctive condition scoped to
/// the hotel. A field left unset does not constrain the result set.
pub(crate) fn room_filter_condition(hotel_id: Uuid, filter: &RoomFilter) -> Condition {
    let mut cond = Condition::all().add(room::Column::HotelId.eq(hotel_id));
    if let Some(capacity) = filter.capacity {
        cond = cond.add(room::Column::Capacity.eq(capacity));
    }
    if let Some(min) = filter.min_price {
        cond = cond.add(room::Column::PricePerNight.gte(min));
    }
    if let Some(max) = filter.max_price {
        cond = cond.add(room::Column::PricePerNight.lte(max));
    }
    if let Some(wifi) = filter.wifi {
        cond = cond.add(room::Column::Wifi.eq(wifi));
    }
    if let Some(ac) = filter.air_conditioning {
        cond = cond.add(room::Column::AirConditioning.eq(ac));
    }
    cond
}

fn on_unique_violation(
    e: sea_orm::DbErr,
    entity: &'static str,
    key: impl Into<String>,
) -> DomainError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => DomainError::already_exists(entity, key),
        _ => e.into(),
    }
}

#[derive(Default)]
pub struct SeaOrmHotelsRepository;

impl SeaOrmHotelsRepository {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl HotelsRepository for SeaOrmHotelsRepository {
    async fn find_by_id<C: ConnectionTrait>(
        &self,
        conn: &C,
        id: Uuid,
    ) -> Result<Option<Hotel>, DomainError> {
        Ok(hotel::Entity::find_by_id(id)
            .one(conn)
            .await?
            .map(Into::into))
    }

    async fn find_by_name<C: ConnectionTrait>(
        &self,
        conn: &C,
        name: &str,
    ) -> Result<Option<Hotel>, DomainError> {
        Ok(hotel::Entity::find()
            .filter(hotel::Column::Name.eq(name))
            .one(conn)
            .await?
            .map(Into::into))
    }

    async fn exists<C: ConnectionTrait>(&self, conn: &C, id: Uuid) -> Result<bool, DomainError> {
        Ok(hotel::Entity::find_by_id(id).one(conn).await?.is_some())
    }

    async fn list<C: ConnectionTrait>(&self, conn: &C) -> Result<Vec<Hotel>, DomainError> {
        Ok(hotel::Entity::find()
            .all(conn)
            .await?
            .into_iter()
            .map(Into::into)
            .collect())
    }

    async fn insert<C: ConnectionTrait>(
        &self,
        conn: &C,
        hotel: Hotel,
    ) -> Result<Hotel, DomainError> {
        // The unique index on the name is what closes the concurrent-create
        // race; the loser surfaces as AlreadyExists.
        let model = mapper::hotel_to_active_model(&hotel)
            .insert(conn)
            .await
            .map_err(|e| on_unique_violation(e, "hotel", hotel.name.clone()))?;
        Ok(model.into())
    }

    async fn update<C: ConnectionTrait>(
        &self,
        conn: &C,
        hotel: Hotel,
    ) -> Result<Hotel, DomainError> {
        let mut am = mapper::hotel_to_active_model(&hotel);
        am.id = Unchanged(hotel.id);
        let model = am
            .update(conn)
            .await
            .map_err(|e| on_unique_violation(e, "hotel", hotel.name.clone()))?;
        Ok(model.into())
    }

    async fn list_in_city<C: ConnectionTrait>(
        &self,
        conn: &C,
        city_id: Uuid,
    ) -> Result<Vec<Hotel>, DomainError> {
        let hotel_ids: Vec<Uuid> = city_hotel::Entity::find()
            .filter(city_hotel::Column::CityId.eq(city_id))
            .all(conn)
            .await?
            .into_iter()
            .map(|link| link.hotel_id)
            .collect();

        if hotel_ids.is_empty() {
            return Ok(Vec::new());
        }

        Ok(hotel::Entity::find()
            .filter(hotel::Column::Id.is_in(hotel_ids))
            .all(conn)
            .await?
            .into_iter()
            .map(Into::into)
            .collect())
    }

    async fn is_in_city<C: ConnectionTrait>(
        &self,
        conn: &C,
        hotel_id: Uuid,
        city_id: Uuid,
    ) -> Result<bool, DomainError> {
        Ok(city_hotel::Entity::find_by_id((city_id, hotel_id))
            .one(conn)
            .await?
            .is_some())
    }

    async fn link_to_city<C: ConnectionTrait>(
        &self,
        conn: &C,
        hotel_id: Uuid,
        city_id: Uuid,
    ) -> Result<(), DomainError> {
        let link = city_hotel::ActiveModel {
            city_id: Set(city_id),
            hotel_id: Set(hotel_id),
        };
        city_hotel::Entity::insert(link)
            .exec(conn)
            .await
            .map_err(|e| {
                on_unique_violation(e, "hotel", format!("{hotel_id} in city {city_id}"))
            })?;
        Ok(())
    }
}

#[derive(Default)]
pub struct SeaOrmRoomsRepository;

impl SeaOrmRoomsRepository {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl RoomsRepository for SeaOrmRoomsRepository {
    async fn insert<C: ConnectionTrait>(&self, conn: &C, room: Room) -> Result<Room, DomainError> {
        let model = mapper::room_to_active_model(&room).insert(conn).await?;
        Ok(model.into())
    }

    async fn list_by_hotel<C: ConnectionTrait>(
        &self,
        conn: &C,
        hotel_id: Uuid,
    ) -> Result<Vec<Room>, DomainError> {
        Ok(room::Entity::find()
            .filter(room::Column::HotelId.eq(hotel_id))
            .all(conn)
            .await?
            .into_iter()
            .map(Into::into)
            .collect())
    }

    async fn list_matching<C: ConnectionTrait>(
        &self,
        conn: &C,
        hotel_id: Uuid,
        filter: &RoomFilter,
    ) -> Result<Vec<Room>, DomainError> {
        Ok(room::Entity::find()
            .filter(room_filter_condition(hotel_id, filter))
            .all(conn)
            .await?
            .into_iter()
            .map(Into::into)
            .collect())
    }
}

#[derive(Default)]
pub struct SeaOrmDirectorsRepository;

impl SeaOrmDirectorsRepository {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DirectorsRepository for SeaOrmDirectorsRepository {
    async fn find_by_id<C: ConnectionTrait>(
        &self,
        conn: &C,
        id: Uuid,
    ) -> Result<Option<Director>, DomainError> {
        Ok(director::Entity::find_by_id(id)
            .one(conn)
            .await?
            .map(Into::into))
    }

    async fn find_by_name<C: ConnectionTrait>(
        &self,
        conn: &C,
        name: &str,
    ) -> Result<Option<Director>, DomainError> {
        Ok(director::Entity::find()
            .filter(director::Column::Name.eq(name))
            .one(conn)
            .await?
            .map(Into::into))
    }

    async fn insert<C: ConnectionTrait>(
        &self,
        conn: &C,
        director: Director,
    ) -> Result<Director, DomainError> {
        let model = mapper::director_to_active_model(&director)
            .insert(conn)
            .await
            .map_err(|e| on_unique_violation(e, "director", director.name.clone()))?;
        Ok(model.into())
    }

    async fn list<C: ConnectionTrait>(&self, conn: &C) -> Result<Vec<Director>, DomainError> {
        Ok(director::Entity::find()
            .all(conn)
            .await?
            .into_iter()
            .map(Into::into)
            .collect())
    }
}

#[derive(Default)]
pub struct SeaOrmCitiesRepository;

impl SeaOrmCitiesRepository {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CitiesRepository for SeaOrmCitiesRepository {
    async fn find_by_name<C: ConnectionTrait>(
        &self,
        conn: &C,
        name: &str,
    ) -> Result<Option<City>, DomainError> {
        Ok(city::Entity::find()
            .filter(city::Column::Name.eq(name))
            .one(conn)
            .await?
            .map(Into::into))
    }

    async fn insert<C: ConnectionTrait>(&self, conn: &C, city: City) -> Result<City, DomainError> {
        let model = mapper::city_to_active_model(&city)
            .insert(conn)
            .await
            .map_err(|e| on_unique_violation(e, "city", city.name.clone()))?;
        Ok(model.into())
    }

    async fn list<C: ConnectionTrait>(&self, conn: &C) -> Result<Vec<City>, DomainError> {
        Ok(city::Entity::find()
            .all(conn)
            .await?
            .into_iter()
            .map(Into::into)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DbBackend, QueryTrait};

    fn filter_sql(filter: &RoomFilter) -> String {
        let query = room::Entity::find()
            .filter(room_filter_condition(Uuid::nil(), filter))
            .build(DbBackend::Sqlite)
            .to_string();
        // Keep only the WHERE clause; the SELECT column list would otherwise
        // mention every column regardless of the filter.
        query
            .split_once(" WHERE ")
            .map(|(_, cond)| cond.to_string())
            .unwrap_or(query)
    }

    #[test]
    fn empty_filter_constrains_only_the_hotel() {
        let sql = filter_sql(&RoomFilter::default());
        assert!(sql.contains("hotel_id"));
        assert!(!sql.contains("capacity"));
        assert!(!sql.contains("price_per_night"));
        assert!(!sql.contains("wifi"));
    }

    #[test]
    fn set_fields_combine_with_and() {
        let filter = RoomFilter {
            capacity: Some(2),
            min_price: Some(1000),
            max_price: Some(9000),
            wifi: Some(true),
            air_conditioning: None,
        };
        let sql = filter_sql(&filter);
        assert!(sql.contains("\"capacity\" = 2"));
        assert!(sql.contains("\"price_per_night\" >= 1000"));
        assert!(sql.contains("\"price_per_night\" <= 9000"));
        assert!(sql.contains("wifi"));
        assert!(!sql.contains("air_conditioning"));
        assert!(sql.contains(" AND "));
    }
}

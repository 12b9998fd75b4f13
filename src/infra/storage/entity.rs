//! `SeaORM` entities for the hotels schema.

pub use city::Entity as CityEntity;
pub use city_hotel::Entity as CityHotelEntity;
pub use director::Entity as DirectorEntity;
pub use hotel::Entity as HotelEntity;
pub use room::Entity as RoomEntity;

/// Hotel entity for the `hotels` table.
pub mod hotel {
    use chrono::{DateTime, Utc};
    use sea_orm::entity::prelude::*;
    use uuid::Uuid;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "hotels")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: Uuid,
        #[sea_orm(unique)]
        pub name: String,
        pub director_id: Uuid,
        pub created_at: DateTime<Utc>,
        pub updated_at: DateTime<Utc>,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::director::Entity",
            from = "Column::DirectorId",
            to = "super::director::Column::Id"
        )]
        Director,
        #[sea_orm(has_many = "super::room::Entity")]
        Rooms,
        #[sea_orm(has_many = "super::city_hotel::Entity")]
        CityLinks,
    }

    impl Related<super::director::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Director.def()
        }
    }

    impl Related<super::room::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Rooms.def()
        }
    }

    impl Related<super::city_hotel::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::CityLinks.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Room entity for the `rooms` table.
pub mod room {
    use sea_orm::entity::prelude::*;
    use uuid::Uuid;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "rooms")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: Uuid,
        pub hotel_id: Uuid,
        pub capacity: i32,
        pub price_per_night: i64,
        pub wifi: bool,
        pub air_conditioning: bool,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::hotel::Entity",
            from = "Column::HotelId",
            to = "super::hotel::Column::Id"
        )]
        Hotel,
    }

    impl Related<super::hotel::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Hotel.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Director entity for the `directors` table.
pub mod director {
    use sea_orm::entity::prelude::*;
    use uuid::Uuid;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "directors")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: Uuid,
        #[sea_orm(unique)]
        pub name: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(has_many = "super::hotel::Entity")]
        Hotels,
    }

    impl Related<super::hotel::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Hotels.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// City entity for the `cities` table.
pub mod city {
    use sea_orm::entity::prelude::*;
    use uuid::Uuid;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "cities")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: Uuid,
        #[sea_orm(unique)]
        pub name: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(has_many = "super::city_hotel::Entity")]
        HotelLinks,
    }

    impl Related<super::city_hotel::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::HotelLinks.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// City-hotel association for the `city_hotels` join table.
pub mod city_hotel {
    use sea_orm::entity::prelude::*;
    use uuid::Uuid;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "city_hotels")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub city_id: Uuid,
        #[sea_orm(primary_key, auto_increment = false)]
        pub hotel_id: Uuid,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::city::Entity",
            from = "Column::CityId",
            to = "super::city::Column::Id"
        )]
        City,
        #[sea_orm(
            belongs_to = "super::hotel::Entity",
            from = "Column::HotelId",
            to = "super::hotel::Column::Id"
        )]
        Hotel,
    }

    impl Related<super::city::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::City.def()
        }
    }

    impl Related<super::hotel::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Hotel.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

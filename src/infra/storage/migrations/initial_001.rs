use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Cities::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Cities::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(Cities::Name)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Directors::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Directors::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Directors::Name)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .to_owned(),
            )
            .await?;

        // Unique hotel name: the name is a global natural key, which also
        // closes the concurrent-create race at the store level.
        manager
            .create_table(
                Table::create()
                    .table(Hotels::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Hotels::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(Hotels::Name)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Hotels::DirectorId).uuid().not_null())
                    .col(
                        ColumnDef::new(Hotels::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Hotels::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-hotels-director_id")
                            .from(Hotels::Table, Hotels::DirectorId)
                            .to(Directors::Table, Directors::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CityHotels::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(CityHotels::CityId).uuid().not_null())
                    .col(ColumnDef::new(CityHotels::HotelId).uuid().not_null())
                    .primary_key(
                        Index::create()
                            .col(CityHotels::CityId)
                            .col(CityHotels::HotelId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-city_hotels-city_id")
                            .from(CityHotels::Table, CityHotels::CityId)
                            .to(Cities::Table, Cities::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-city_hotels-hotel_id")
                            .from(CityHotels::Table, CityHotels::HotelId)
                            .to(Hotels::Table, Hotels::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Rooms::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Rooms::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Rooms::HotelId).uuid().not_null())
                    .col(ColumnDef::new(Rooms::Capacity).integer().not_null())
                    .col(
                        ColumnDef::new(Rooms::PricePerNight)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Rooms::Wifi).boolean().not_null())
                    .col(
                        ColumnDef::new(Rooms::AirConditioning)
                            .boolean()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-rooms-hotel_id")
                            .from(Rooms::Table, Rooms::HotelId)
                            .to(Hotels::Table, Hotels::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-rooms-hotel_id")
                    .table(Rooms::Table)
                    .col(Rooms::HotelId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Rooms::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CityHotels::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Hotels::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Directors::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Cities::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Hotels {
    Table,
    Id,
    Name,
    DirectorId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Rooms {
    Table,
    Id,
    HotelId,
    Capacity,
    PricePerNight,
    Wifi,
    AirConditioning,
}

#[derive(DeriveIden)]
enum Directors {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum Cities {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum CityHotels {
    Table,
    CityId,
    HotelId,
}

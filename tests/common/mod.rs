#![allow(clippy::unwrap_used, clippy::expect_used)]
#![allow(dead_code)]

//! Common test utilities: an in-memory database with the full schema and
//! the services wired over it.

use hotels_service::api::rest::routes::AppState;
use hotels_service::domain::model::{City, Director, Hotel, NewCity, NewDirector, NewHotel};
use hotels_service::infra::storage::migrations::Migrator;
use sea_orm::Database;
use sea_orm_migration::MigratorTrait;

pub async fn setup_state() -> AppState {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("connect to in-memory sqlite");
    Migrator::up(&db, None).await.expect("run migrations");
    AppState::new(db)
}

pub async fn seed_city(state: &AppState, name: &str) -> City {
    state
        .cities
        .add_city(NewCity {
            name: name.to_owned(),
        })
        .await
        .expect("seed city")
}

pub async fn seed_director(state: &AppState, name: &str) -> Director {
    state
        .directors
        .add_director(NewDirector {
            name: name.to_owned(),
        })
        .await
        .expect("seed director")
}

pub async fn seed_hotel(state: &AppState, name: &str, city: &str, director: &str) -> Hotel {
    let city = seed_city(state, city).await;
    let director = seed_director(state, director).await;
    state
        .hotels
        .create_hotel(
            NewHotel {
                name: name.to_owned(),
            },
            &city.name,
            director.id,
        )
        .await
        .expect("seed hotel")
}

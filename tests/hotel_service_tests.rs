#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Integration tests for hotel operations against the real store.

mod common;

use common::{seed_city, seed_director, setup_state};
use hotels_service::domain::error::DomainError;
use hotels_service::domain::model::{HotelUpdate, NewHotel};
use uuid::Uuid;

#[tokio::test]
async fn created_hotel_gets_generated_id_and_echoes_name() {
    let state = setup_state().await;
    seed_city(&state, "Белгород").await;
    let director = seed_director(&state, "Александров").await;

    let hotel = state
        .hotels
        .create_hotel(
            NewHotel {
                name: "У Саши".into(),
            },
            "Белгород",
            director.id,
        )
        .await
        .unwrap();

    assert!(!hotel.id.is_nil());
    assert_eq!(hotel.name, "У Саши");
    assert_eq!(hotel.director_id, director.id);
}

#[tokio::test]
async fn get_hotel_round_trips_after_create() {
    let state = setup_state().await;
    seed_city(&state, "Москва").await;
    let director = seed_director(&state, "Ivanov").await;

    let created = state
        .hotels
        .create_hotel(
            NewHotel {
                name: "Grand".into(),
            },
            "Москва",
            director.id,
        )
        .await
        .unwrap();

    let fetched = state.hotels.get_hotel(created.id).await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn duplicate_name_in_same_city_is_rejected_without_side_effect() {
    let state = setup_state().await;
    seed_city(&state, "Москва").await;
    let director = seed_director(&state, "Ivanov").await;

    let new = NewHotel {
        name: "Grand".into(),
    };
    state
        .hotels
        .create_hotel(new.clone(), "Москва", director.id)
        .await
        .unwrap();
    let err = state
        .hotels
        .create_hotel(new, "Москва", director.id)
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::AlreadyExists { entity: "hotel", .. }));
    assert_eq!(state.hotels.list_hotels().await.unwrap().len(), 1);
}

#[tokio::test]
async fn unknown_city_fails_not_found_without_side_effect() {
    let state = setup_state().await;
    let director = seed_director(&state, "Ivanov").await;

    let err = state
        .hotels
        .create_hotel(
            NewHotel {
                name: "Grand".into(),
            },
            "Atlantis",
            director.id,
        )
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::NotFound { entity: "city", .. }));
    assert!(state.hotels.list_hotels().await.unwrap().is_empty());
}

#[tokio::test]
async fn unknown_director_fails_not_found() {
    let state = setup_state().await;
    seed_city(&state, "Москва").await;

    let err = state
        .hotels
        .create_hotel(
            NewHotel {
                name: "Grand".into(),
            },
            "Москва",
            Uuid::new_v4(),
        )
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::NotFound { entity: "director", .. }));
}

#[tokio::test]
async fn list_hotels_returns_every_hotel() {
    let state = setup_state().await;
    seed_city(&state, "Москва").await;
    let director = seed_director(&state, "Ivanov").await;

    for name in ["Grand", "Imperial"] {
        state
            .hotels
            .create_hotel(
                NewHotel {
                    name: name.to_owned(),
                },
                "Москва",
                director.id,
            )
            .await
            .unwrap();
    }

    assert_eq!(state.hotels.list_hotels().await.unwrap().len(), 2);
}

#[tokio::test]
async fn update_hotel_is_idempotent_on_the_name_field() {
    let state = setup_state().await;
    seed_city(&state, "Москва").await;
    let director = seed_director(&state, "Ivanov").await;

    let created = state
        .hotels
        .create_hotel(
            NewHotel {
                name: "Grand".into(),
            },
            "Москва",
            director.id,
        )
        .await
        .unwrap();

    let update = HotelUpdate {
        name: "Imperial".into(),
    };
    state.hotels.update_hotel(created.id, update.clone()).await.unwrap();
    let twice = state.hotels.update_hotel(created.id, update).await.unwrap();

    assert_eq!(twice.name, "Imperial");
    assert_eq!(twice.director_id, created.director_id);

    let persisted = state.hotels.get_hotel(created.id).await.unwrap();
    assert_eq!(persisted.name, "Imperial");
}

#[tokio::test]
async fn update_unknown_hotel_fails_not_found() {
    let state = setup_state().await;

    let err = state
        .hotels
        .update_hotel(
            Uuid::new_v4(),
            HotelUpdate {
                name: "Imperial".into(),
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::NotFound { entity: "hotel", .. }));
}

#[tokio::test]
async fn same_name_in_second_city_relinks_instead_of_duplicating() {
    let state = setup_state().await;
    seed_city(&state, "Москва").await;
    seed_city(&state, "Белгород").await;
    let first = seed_director(&state, "Ivanov").await;
    let second = seed_director(&state, "Petrov").await;

    let created = state
        .hotels
        .create_hotel(
            NewHotel {
                name: "Grand".into(),
            },
            "Москва",
            first.id,
        )
        .await
        .unwrap();
    let relinked = state
        .hotels
        .create_hotel(
            NewHotel {
                name: "Grand".into(),
            },
            "Белгород",
            second.id,
        )
        .await
        .unwrap();

    assert_eq!(relinked.id, created.id);
    assert_eq!(relinked.director_id, second.id);
    assert_eq!(state.hotels.list_hotels().await.unwrap().len(), 1);

    let in_moscow = state.hotels.hotels_in_city("Москва").await.unwrap();
    let in_belgorod = state.hotels.hotels_in_city("Белгород").await.unwrap();
    assert_eq!(in_moscow.len(), 1);
    assert_eq!(in_belgorod.len(), 1);
}

#[tokio::test]
async fn hotels_in_city_scopes_to_the_city() {
    let state = setup_state().await;
    seed_city(&state, "Москва").await;
    seed_city(&state, "Белгород").await;
    let director = seed_director(&state, "Ivanov").await;

    state
        .hotels
        .create_hotel(
            NewHotel {
                name: "Grand".into(),
            },
            "Москва",
            director.id,
        )
        .await
        .unwrap();

    assert_eq!(state.hotels.hotels_in_city("Москва").await.unwrap().len(), 1);
    assert!(state.hotels.hotels_in_city("Белгород").await.unwrap().is_empty());

    let err = state.hotels.hotels_in_city("Atlantis").await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { entity: "city", .. }));
}

#[tokio::test]
async fn hotel_exists_reflects_the_store() {
    let state = setup_state().await;
    seed_city(&state, "Москва").await;
    let director = seed_director(&state, "Ivanov").await;

    let hotel = state
        .hotels
        .create_hotel(
            NewHotel {
                name: "Grand".into(),
            },
            "Москва",
            director.id,
        )
        .await
        .unwrap();

    assert!(state.hotels.hotel_exists(hotel.id).await.unwrap());
    assert!(!state.hotels.hotel_exists(Uuid::new_v4()).await.unwrap());
}

#[tokio::test]
async fn duplicate_director_and_city_are_rejected() {
    let state = setup_state().await;
    seed_city(&state, "Москва").await;
    seed_director(&state, "Ivanov").await;

    let err = state
        .cities
        .add_city(hotels_service::domain::model::NewCity {
            name: "Москва".into(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::AlreadyExists { entity: "city", .. }));

    let err = state
        .directors
        .add_director(hotels_service::domain::model::NewDirector {
            name: "Ivanov".into(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::AlreadyExists { entity: "director", .. }));
}

//! Route table and concrete service wiring.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::{Json, Router};
use sea_orm::DatabaseConnection;
use utoipa::OpenApi as _;

use crate::api::rest::ApiDoc;
use crate::api::rest::handlers;
use crate::domain::service::{CitiesService, DirectorsService, HotelsService, RoomsService};
use crate::infra::storage::sea_orm_repo::{
    SeaOrmCitiesRepository, SeaOrmDirectorsRepository, SeaOrmHotelsRepository,
    SeaOrmRoomsRepository,
};

/// Concrete service types behind the REST surface.
pub type Hotels =
    HotelsService<SeaOrmHotelsRepository, SeaOrmCitiesRepository, SeaOrmDirectorsRepository>;
pub type Rooms = RoomsService<SeaOrmRoomsRepository, SeaOrmHotelsRepository>;
pub type Directors = DirectorsService<SeaOrmDirectorsRepository>;
pub type Cities = CitiesService<SeaOrmCitiesRepository>;

#[derive(Clone)]
pub struct AppState {
    pub hotels: Arc<Hotels>,
    pub rooms: Arc<Rooms>,
    pub directors: Arc<Directors>,
    pub cities: Arc<Cities>,
}

impl AppState {
    /// Wires the sea-orm repositories and services over one connection pool.
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        let hotels_repo = Arc::new(SeaOrmHotelsRepository::new());
        let rooms_repo = Arc::new(SeaOrmRoomsRepository::new());
        let directors_repo = Arc::new(SeaOrmDirectorsRepository::new());
        let cities_repo = Arc::new(SeaOrmCitiesRepository::new());

        Self {
            hotels: Arc::new(HotelsService::new(
                db.clone(),
                hotels_repo.clone(),
                cities_repo.clone(),
                directors_repo.clone(),
            )),
            rooms: Arc::new(RoomsService::new(db.clone(), rooms_repo, hotels_repo)),
            directors: Arc::new(DirectorsService::new(db.clone(), directors_repo)),
            cities: Arc::new(CitiesService::new(db, cities_repo)),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/hotels",
            post(handlers::create_hotel).get(handlers::list_hotels),
        )
        .route(
            "/hotels/{id}",
            get(handlers::get_hotel).put(handlers::update_hotel),
        )
        .route(
            "/hotels/{id}/rooms",
            post(handlers::add_room).get(handlers::list_rooms),
        )
        .route("/hotels/{id}/rooms/search", get(handlers::search_rooms))
        .route(
            "/cities",
            post(handlers::create_city).get(handlers::list_cities),
        )
        .route("/cities/{name}/hotels", get(handlers::hotels_in_city))
        .route(
            "/directors",
            post(handlers::create_director).get(handlers::list_directors),
        )
        .route("/api-docs/openapi.json", get(openapi_json))
        .with_state(state)
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

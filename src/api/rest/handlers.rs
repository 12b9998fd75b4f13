//! Thin HTTP handlers translating requests into service calls.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use uuid::Uuid;

use super::dto::{
    CityDto, CreateCityRequest, CreateDirectorRequest, CreateHotelParams, CreateHotelRequest,
    CreateRoomRequest, DirectorDto, HotelDto, RoomDto, RoomSearchQuery, UpdateHotelRequest,
};
use super::error::{ApiResult, Problem};
use super::routes::AppState;

#[utoipa::path(
    post,
    path = "/hotels",
    tag = "hotels",
    params(CreateHotelParams),
    request_body = CreateHotelRequest,
    responses(
        (status = 201, description = "Hotel created", body = HotelDto),
        (status = 404, description = "City or director not found", body = Problem),
        (status = 409, description = "Hotel already exists in this city", body = Problem),
        (status = 422, description = "Validation failed", body = Problem),
    )
)]
pub async fn create_hotel(
    State(state): State<AppState>,
    Query(params): Query<CreateHotelParams>,
    Json(req): Json<CreateHotelRequest>,
) -> ApiResult<impl IntoResponse> {
    let hotel = state
        .hotels
        .create_hotel(req.into(), &params.city_name, params.director_id)
        .await?;
    Ok((StatusCode::CREATED, Json(HotelDto::from(hotel))))
}

#[utoipa::path(
    get,
    path = "/hotels",
    tag = "hotels",
    responses((status = 200, description = "All hotels", body = [HotelDto]))
)]
pub async fn list_hotels(State(state): State<AppState>) -> ApiResult<Json<Vec<HotelDto>>> {
    let hotels = state.hotels.list_hotels().await?;
    Ok(Json(hotels.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/hotels/{id}",
    tag = "hotels",
    params(("id" = Uuid, Path, description = "Hotel id")),
    responses(
        (status = 200, description = "The hotel", body = HotelDto),
        (status = 404, description = "Hotel not found", body = Problem),
    )
)]
pub async fn get_hotel(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<HotelDto>> {
    let hotel = state.hotels.get_hotel(id).await?;
    Ok(Json(hotel.into()))
}

#[utoipa::path(
    put,
    path = "/hotels/{id}",
    tag = "hotels",
    params(("id" = Uuid, Path, description = "Hotel id")),
    request_body = UpdateHotelRequest,
    responses(
        (status = 200, description = "Hotel updated", body = HotelDto),
        (status = 404, description = "Hotel not found", body = Problem),
    )
)]
pub async fn update_hotel(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateHotelRequest>,
) -> ApiResult<Json<HotelDto>> {
    let hotel = state.hotels.update_hotel(id, req.into()).await?;
    Ok(Json(hotel.into()))
}

#[utoipa::path(
    get,
    path = "/cities/{name}/hotels",
    tag = "cities",
    params(("name" = String, Path, description = "City name")),
    responses(
        (status = 200, description = "Hotels in the city", body = [HotelDto]),
        (status = 404, description = "City not found", body = Problem),
    )
)]
pub async fn hotels_in_city(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<Json<Vec<HotelDto>>> {
    let hotels = state.hotels.hotels_in_city(&name).await?;
    Ok(Json(hotels.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    post,
    path = "/hotels/{id}/rooms",
    tag = "rooms",
    params(("id" = Uuid, Path, description = "Hotel id")),
    request_body = CreateRoomRequest,
    responses(
        (status = 201, description = "Room added", body = RoomDto),
        (status = 404, description = "Hotel not found", body = Problem),
        (status = 422, description = "Validation failed", body = Problem),
    )
)]
pub async fn add_room(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<CreateRoomRequest>,
) -> ApiResult<impl IntoResponse> {
    let room = state.rooms.add_room(id, req.into()).await?;
    Ok((StatusCode::CREATED, Json(RoomDto::from(room))))
}

#[utoipa::path(
    get,
    path = "/hotels/{id}/rooms",
    tag = "rooms",
    params(("id" = Uuid, Path, description = "Hotel id")),
    responses(
        (status = 200, description = "Rooms of the hotel", body = [RoomDto]),
        (status = 404, description = "Hotel not found", body = Problem),
    )
)]
pub async fn list_rooms(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Vec<RoomDto>>> {
    let rooms = state.rooms.rooms_by_hotel(id).await?;
    Ok(Json(rooms.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/hotels/{id}/rooms/search",
    tag = "rooms",
    params(("id" = Uuid, Path, description = "Hotel id"), RoomSearchQuery),
    responses(
        (status = 200, description = "Rooms matching every supplied criterion", body = [RoomDto]),
        (status = 404, description = "Hotel not found", body = Problem),
    )
)]
pub async fn search_rooms(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<RoomSearchQuery>,
) -> ApiResult<Json<Vec<RoomDto>>> {
    let rooms = state.rooms.rooms_by_filter(id, query.into()).await?;
    Ok(Json(rooms.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    post,
    path = "/directors",
    tag = "directors",
    request_body = CreateDirectorRequest,
    responses(
        (status = 201, description = "Director added", body = DirectorDto),
        (status = 409, description = "Director already exists", body = Problem),
    )
)]
pub async fn create_director(
    State(state): State<AppState>,
    Json(req): Json<CreateDirectorRequest>,
) -> ApiResult<impl IntoResponse> {
    let director = state.directors.add_director(req.into()).await?;
    Ok((StatusCode::CREATED, Json(DirectorDto::from(director))))
}

#[utoipa::path(
    get,
    path = "/directors",
    tag = "directors",
    responses((status = 200, description = "All directors", body = [DirectorDto]))
)]
pub async fn list_directors(State(state): State<AppState>) -> ApiResult<Json<Vec<DirectorDto>>> {
    let directors = state.directors.list_directors().await?;
    Ok(Json(directors.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    post,
    path = "/cities",
    tag = "cities",
    request_body = CreateCityRequest,
    responses(
        (status = 201, description = "City added", body = CityDto),
        (status = 409, description = "City already exists", body = Problem),
    )
)]
pub async fn create_city(
    State(state): State<AppState>,
    Json(req): Json<CreateCityRequest>,
) -> ApiResult<impl IntoResponse> {
    let city = state.cities.add_city(req.into()).await?;
    Ok((StatusCode::CREATED, Json(CityDto::from(city))))
}

#[utoipa::path(
    get,
    path = "/cities",
    tag = "cities",
    responses((status = 200, description = "All cities", body = [CityDto]))
)]
pub async fn list_cities(State(state): State<AppState>) -> ApiResult<Json<Vec<CityDto>>> {
    let cities = state.cities.list_cities().await?;
    Ok(Json(cities.into_iter().map(Into::into).collect()))
}

pub mod dto;
pub mod error;
pub mod handlers;
pub mod routes;

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::create_hotel,
        handlers::list_hotels,
        handlers::get_hotel,
        handlers::update_hotel,
        handlers::hotels_in_city,
        handlers::add_room,
        handlers::list_rooms,
        handlers::search_rooms,
        handlers::create_director,
        handlers::list_directors,
        handlers::create_city,
        handlers::list_cities,
    ),
    components(schemas(
        dto::HotelDto,
        dto::CreateHotelRequest,
        dto::UpdateHotelRequest,
        dto::RoomDto,
        dto::CreateRoomRequest,
        dto::DirectorDto,
        dto::CreateDirectorRequest,
        dto::CityDto,
        dto::CreateCityRequest,
        error::Problem,
    )),
    tags(
        (name = "hotels", description = "Hotel management"),
        (name = "rooms", description = "Rooms of a hotel"),
        (name = "directors", description = "Hotel directors"),
        (name = "cities", description = "Cities"),
    )
)]
pub struct ApiDoc;

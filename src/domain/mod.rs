// TODO: repo traits leak sea_orm::ConnectionTrait into the domain layer;
// extract a storage-agnostic runner abstraction if a second backend shows up.

pub mod error;
pub mod model;
pub mod repo;
pub mod service;

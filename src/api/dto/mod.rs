//! Data Transfer Objects for REST request/response serialization.

pub mod health_dto;
pub mod pagination_dto;

pub use health_dto::*;
pub use pagination_dto::*;

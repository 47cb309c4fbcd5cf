//! HTTP layer: Axum handlers, request/response DTOs, middleware, and route
//! composition. Translates transport concerns into service calls and maps
//! outcomes back to status codes.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

//! Request and response shapes, serialized with serde and checked with
//! `validator` before a request reaches the service.

pub mod health;
pub mod links;

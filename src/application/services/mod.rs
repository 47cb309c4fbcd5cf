//! Services coordinating validation, code generation, and repository calls.

pub mod link_service;

pub use link_service::LinkService;

use std::sync::Arc;

use sqlx::PgPool;

use crate::application::services::LinkService;
use crate::infrastructure::persistence::PgLinkRepository;

/// Shared application state injected into all handlers.
///
/// Constructed once at startup; the store is an injected dependency with
/// shared, reference-counted lifetime rather than ambient global state.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<PgLinkRepository>>,
    pub db: Arc<PgPool>,
}

use std::sync::Arc;

use axum::Router;

use crate::{routes::router, state::AppState, store::ListStore};

/// Router over a freshly seeded in-memory store, for exercising routes
/// without binding a socket.
pub fn test_router() -> Router {
    let state = AppState::new(ListStore::seeded());
    router(Arc::clone(&state))
}

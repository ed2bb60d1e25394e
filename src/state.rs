//! Shared state injected into every handler.

use std::sync::Arc;

use crate::application::services::UserService;
use crate::domain::repositories::UserRepository;

/// Application state cloned into each request.
///
/// Holds the services behind trait objects so the HTTP layer can be exercised
/// against any [`UserRepository`], including in-memory test doubles.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService<dyn UserRepository>>,
}

impl AppState {
    /// Builds the state around a repository implementation.
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self {
            user_service: Arc::new(UserService::new(repository)),
        }
    }
}

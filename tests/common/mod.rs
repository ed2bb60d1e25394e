#![allow(dead_code)]

use async_trait::async_trait;
use axum::extract::Request;
use axum::{Router, ServiceExt};
use axum_test::TestServer;
use std::sync::{Arc, Mutex};
use user_api::domain::entities::{NewUser, User};
use user_api::domain::repositories::{RepositoryError, UserRepository};
use user_api::routes::{app_router, router};
use user_api::state::AppState;

/// In-memory stand-in for the `users` table.
///
/// Enforces the unique `user_name` constraint the way the store does, and
/// hands out increasing ids that are never reused.
#[derive(Default)]
pub struct InMemoryUserRepository {
    inner: Mutex<Table>,
}

#[derive(Default)]
struct Table {
    rows: Vec<User>,
    last_id: i64,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> Vec<User> {
        self.inner.lock().unwrap().rows.clone()
    }

    fn duplicate() -> RepositoryError {
        RepositoryError::Duplicate {
            constraint: Some("users_user_name_key".to_string()),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn exists(&self, user_name: &str) -> Result<bool, RepositoryError> {
        let table = self.inner.lock().unwrap();
        Ok(table.rows.iter().any(|u| u.user_name == user_name))
    }

    async fn list(&self) -> Result<Vec<User>, RepositoryError> {
        Ok(self.snapshot())
    }

    async fn create(&self, new_user: NewUser) -> Result<User, RepositoryError> {
        if !new_user.has_required_fields() {
            return Err(RepositoryError::Validation(
                "user name and email are required".to_string(),
            ));
        }

        let mut table = self.inner.lock().unwrap();
        if table.rows.iter().any(|u| u.user_name == new_user.user_name) {
            return Err(Self::duplicate());
        }

        table.last_id += 1;
        let user = new_user.with_id(table.last_id);
        table.rows.push(user.clone());
        Ok(user)
    }

    async fn update(&self, user: &User) -> Result<(), RepositoryError> {
        let mut table = self.inner.lock().unwrap();
        if table
            .rows
            .iter()
            .any(|u| u.id != user.id && u.user_name == user.user_name)
        {
            return Err(Self::duplicate());
        }

        if let Some(row) = table.rows.iter_mut().find(|u| u.id == user.id) {
            *row = user.clone();
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        self.inner.lock().unwrap().rows.retain(|u| u.id != id);
        Ok(())
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        Ok(())
    }
}

/// Repository whose every call fails as if the database were down.
pub struct UnavailableUserRepository;

fn unavailable() -> RepositoryError {
    RepositoryError::Database(sqlx::Error::PoolTimedOut)
}

#[async_trait]
impl UserRepository for UnavailableUserRepository {
    async fn exists(&self, _user_name: &str) -> Result<bool, RepositoryError> {
        Err(unavailable())
    }

    async fn list(&self) -> Result<Vec<User>, RepositoryError> {
        Err(unavailable())
    }

    async fn create(&self, _new_user: NewUser) -> Result<User, RepositoryError> {
        Err(unavailable())
    }

    async fn update(&self, _user: &User) -> Result<(), RepositoryError> {
        Err(unavailable())
    }

    async fn delete(&self, _id: i64) -> Result<(), RepositoryError> {
        Err(unavailable())
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        Err(unavailable())
    }
}

pub fn create_test_app(repository: Arc<dyn UserRepository>) -> Router {
    router(AppState::new(repository))
}

/// Test server over an empty in-memory table; the table is returned so tests
/// can inspect what was stored.
pub fn make_server() -> (TestServer, Arc<InMemoryUserRepository>) {
    let repo = Arc::new(InMemoryUserRepository::new());
    let server = TestServer::new(create_test_app(repo.clone())).unwrap();
    (server, repo)
}

pub fn make_unavailable_server() -> TestServer {
    TestServer::new(create_test_app(Arc::new(UnavailableUserRepository))).unwrap()
}

/// Test server over the router `server::run` serves, trailing-slash
/// normalization included.
pub fn make_app_server() -> (TestServer, Arc<InMemoryUserRepository>) {
    let repo = Arc::new(InMemoryUserRepository::new());
    let app = app_router(AppState::new(repo.clone()));
    let server = TestServer::new(ServiceExt::<Request>::into_make_service(app)).unwrap();
    (server, repo)
}

//! Common test utilities and fixtures for integration tests.
//!
//! Tests run the router in-process through `axum_test::TestServer`; no
//! external services are needed.

pub mod fixtures;

use axum::Router;
use axum_test::TestServer;

use lecture_quiz_backend::config::Config;
use lecture_quiz_backend::{router, AppState};

/// Test context wrapping a configured router.
pub struct TestContext {
    app: Router,
}

impl TestContext {
    /// Create a test context with default settings.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create a test context from explicit settings.
    ///
    /// # Panics
    /// Panics if the config carries an invalid noise pattern.
    pub fn with_config(config: Config) -> Self {
        let state = AppState::from_config(&config).expect("Failed to build app state");
        Self {
            app: router(state),
        }
    }

    /// Start an in-process test server.
    pub fn server(&self) -> TestServer {
        TestServer::new(self.app.clone()).expect("Failed to start test server")
    }
}

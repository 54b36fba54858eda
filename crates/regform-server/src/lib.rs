// Regform server - the registration form over HTTP
// axum routes, maud pages and the results hand-off

pub mod config;
pub mod error;
pub mod handoff_store;
pub mod pages;
pub mod request;
pub mod routes;

pub use config::Config;
pub use error::AppError;
pub use handoff_store::HandoffStore;
pub use routes::app;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub handoff: HandoffStore,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            handoff: HandoffStore::with_capacity(config.handoff.capacity),
        }
    }
}

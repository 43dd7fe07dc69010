pub mod catalog;
pub mod screening;
pub mod trackers;

use crate::domain::models::{AnemiaLogEntry, GeneralLogEntry, PcosLogEntry};
use crate::state::SharedState;
use axum::{routing::get, Router};

async fn health() -> &'static str {
    "OK"
}

pub fn routes(state: SharedState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(catalog::router())
        .merge(trackers::router::<AnemiaLogEntry>(state.clone()))
        .merge(trackers::router::<PcosLogEntry>(state.clone()))
        .merge(trackers::router::<GeneralLogEntry>(state.clone()))
        .merge(screening::router(state))
}

pub mod health;
pub mod production;

use axum::Router;

use crate::server::state::AppState;

/// Build the `/api` route tree.
pub fn api_routes() -> Router<AppState> {
    production::router()
}

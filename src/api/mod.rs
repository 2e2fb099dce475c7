mod handlers;
mod models;

use axum::{
    routing::{get, post},
    Router,
};

use crate::AppState;

#[allow(unused_imports)]
pub use handlers::{ask, index, not_found};
#[allow(unused_imports)]
pub use models::{AskRequest, AskResponse, ErrorResponse};

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/ask", post(ask))
        .fallback(not_found)
        .with_state(state)
}

pub mod booking;
pub mod health;
pub mod info;

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

/// Catch-all route: POST books an appointment, every other method gets the landing page.
pub async fn dispatch(
    State(state): State<Arc<AppState>>,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    if method == Method::POST {
        booking::handle_booking(&state, &headers, &body)
            .await
            .into_response()
    } else {
        info::landing_page().await.into_response()
    }
}

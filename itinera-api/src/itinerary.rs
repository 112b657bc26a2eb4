use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use tracing::info;

use itinera_domain::CustomerRecord;

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/itinerary/{customer_id}", get(get_itinerary))
}

async fn get_itinerary(
    State(state): State<AppState>,
    Path(customer_id): Path<String>,
) -> Result<Json<CustomerRecord>, AppError> {
    let customer_id = parse_customer_id(&customer_id).ok_or(AppError::InvalidCustomerId)?;
    info!(customer_id, "itinerary lookup");

    let record = state.directory.customer_record(customer_id).await?;
    Ok(Json(record))
}

/// The raw path segment must be all digits and fit an i64.
fn parse_customer_id(raw: &str) -> Option<i64> {
    if raw.is_empty() || !raw.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

//! Coworking endpoints: spaces, price preview, booking, booking history.

#[cfg(test)]
#[path = "cowork_test.rs"]
mod cowork_test;

use serde::Serialize;

use super::api::ApiClient;
use super::error::ApiError;
use super::transport::Transport;
use super::types::{BookingCreated, BookingPreview, BookingType, BookingsPayload, SpacesPayload};
use crate::util::query::Query;

pub const SPACES_PATH: &str = "/api/cowork/spaces/";
pub const BOOKINGS_PATH: &str = "/api/cowork/bookings/";
pub const MY_BOOKINGS_PATH: &str = "/api/cowork/my-bookings/";

/// What the user wants to book. `start_time` is a `YYYY-MM-DD` date.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BookingRequest {
    pub space_id: i64,
    pub booking_type: BookingType,
    pub start_time: String,
}

impl BookingRequest {
    pub fn preview_path(&self) -> String {
        Query::new()
            .with("space_id", self.space_id)
            .with("booking_type", self.booking_type.as_str())
            .with("start_time", &self.start_time)
            .append_to("/api/cowork/bookings/preview/")
    }
}

/// # Errors
///
/// Returns the API error.
pub async fn fetch_spaces<T: Transport>(api: &ApiClient<T>) -> Result<SpacesPayload, ApiError> {
    api.get(SPACES_PATH).await
}

/// # Errors
///
/// Returns the API error (e.g. the space is not available on that date).
pub async fn preview_booking<T: Transport>(
    api: &ApiClient<T>,
    request: &BookingRequest,
) -> Result<BookingPreview, ApiError> {
    api.get(&request.preview_path()).await
}

/// # Errors
///
/// Returns the API error.
pub async fn create_booking<T: Transport>(
    api: &ApiClient<T>,
    request: &BookingRequest,
) -> Result<BookingCreated, ApiError> {
    let created: Option<BookingCreated> = api.post_json(BOOKINGS_PATH, request).await?;
    Ok(created.unwrap_or_default())
}

/// # Errors
///
/// Returns the API error.
pub async fn fetch_my_bookings<T: Transport>(api: &ApiClient<T>) -> Result<BookingsPayload, ApiError> {
    api.get(MY_BOOKINGS_PATH).await
}

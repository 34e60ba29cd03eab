use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use crate::{
    AppState,
    error::ApiError,
    models::{Booking, Class},
    validation::{DATE_FORMAT, parse_date, require_non_empty, validate_capacity, validate_range},
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateClassRequest {
    #[serde(default)]
    #[schema(example = "Yoga")]
    pub class_name: String,
    #[serde(default)]
    #[schema(example = "2024-01-01")]
    pub start_date: String,
    #[serde(default)]
    #[schema(example = "2024-01-03")]
    pub end_date: String,
    #[serde(default)]
    #[schema(example = 10)]
    pub capacity: u32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct BookingRequest {
    #[serde(default)]
    #[schema(example = "Alice")]
    pub name: String,
    #[serde(default)]
    #[schema(example = "2024-01-01")]
    pub date: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BookingsResponse {
    #[schema(example = "2024-01-01")]
    pub date: String,
    pub names: Vec<String>,
}

#[utoipa::path(get, path = "/", tag = "studio")]
pub async fn root() -> impl IntoResponse {
    Json(serde_json::json!({
        "message": "Studio Classes API",
        "endpoints": {
            "/classes": "Create a class over a date range (POST)",
            "/classes/{date}": "Get the class scheduled on a date",
            "/bookings": "Book an attendee onto a class day (POST)",
            "/bookings/{date}": "List attendees booked on a date"
        }
    }))
}

#[utoipa::path(get, path = "/healthz/live", tag = "studio")]
pub async fn healthz_live() -> impl IntoResponse {
    Json(serde_json::json!({"status": "ok"}))
}

#[utoipa::path(get, path = "/healthz/ready", tag = "studio")]
pub async fn healthz_ready() -> impl IntoResponse {
    Json(serde_json::json!({"status": "ok"}))
}

#[utoipa::path(
    post,
    path = "/classes",
    request_body = CreateClassRequest,
    responses(
        (status = 201, description = "Class created on every day of the range", body = MessageResponse),
        (status = 400, description = "Missing field, bad date or inverted range"),
        (status = 409, description = "A class already exists on one of the days")
    ),
    tag = "studio"
)]
pub async fn create_class(
    State(state): State<AppState>,
    Json(req): Json<CreateClassRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let name = require_non_empty("class_name", &req.class_name)?;
    require_non_empty("start_date", &req.start_date)?;
    require_non_empty("end_date", &req.end_date)?;
    let capacity = validate_capacity(req.capacity)?;

    let start_date = parse_date("start date", &req.start_date)?;
    let end_date = parse_date("end date", &req.end_date)?;
    validate_range(start_date, end_date)?;

    let class = Class::new(name, start_date, end_date, capacity);
    state.repository.create_class(&class).await?;
    info!(class = %class.name, %start_date, %end_date, "class created");

    let message = format!(
        "created {} classes between {} and {} with Capacity: {}",
        class.name,
        start_date.format(DATE_FORMAT),
        end_date.format(DATE_FORMAT),
        class.capacity
    );
    Ok((StatusCode::CREATED, Json(MessageResponse { message })))
}

#[utoipa::path(
    get,
    path = "/classes/{date}",
    params(("date" = String, Path, description = "Calendar day, YYYY-MM-DD")),
    responses(
        (status = 200, description = "Class scheduled on the day", body = Class),
        (status = 400, description = "Invalid date"),
        (status = 404, description = "No class on the day")
    ),
    tag = "studio"
)]
pub async fn get_class(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let date = parse_date("date", &date)?;
    state
        .repository
        .get_class_by_date(date)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("No class on {date}")))
}

#[utoipa::path(
    post,
    path = "/bookings",
    request_body = BookingRequest,
    responses(
        (status = 201, description = "Attendee enrolled", body = MessageResponse),
        (status = 400, description = "Missing field, bad date or no class on the day"),
        (status = 409, description = "Attendee already enrolled on the day")
    ),
    tag = "studio"
)]
pub async fn create_booking(
    State(state): State<AppState>,
    Json(req): Json<BookingRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let name = require_non_empty("name", &req.name)?;
    require_non_empty("date", &req.date)?;
    let date = parse_date("date", &req.date)?;

    let booking = Booking::new(name, date);
    state.repository.create_booking(&booking).await?;
    info!(attendee = %booking.name, %date, "booking created");

    let message = format!(
        "{} has been enrolled for class on {}",
        booking.name,
        date.format(DATE_FORMAT)
    );
    Ok((StatusCode::CREATED, Json(MessageResponse { message })))
}

#[utoipa::path(
    get,
    path = "/bookings/{date}",
    params(("date" = String, Path, description = "Calendar day, YYYY-MM-DD")),
    responses(
        (status = 200, description = "Attendees booked on the day", body = BookingsResponse),
        (status = 400, description = "Invalid date")
    ),
    tag = "studio"
)]
pub async fn list_bookings(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let date = parse_date("date", &date)?;
    let names = state.repository.bookings_on(date).await?;
    Ok(Json(BookingsResponse {
        date: date.format(DATE_FORMAT).to_string(),
        names,
    }))
}

use utoipa::OpenApi;

use crate::handlers::{BookingRequest, BookingsResponse, CreateClassRequest, MessageResponse};
use crate::models::{Booking, Class};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::root,
        crate::handlers::healthz_live,
        crate::handlers::healthz_ready,
        crate::handlers::create_class,
        crate::handlers::get_class,
        crate::handlers::create_booking,
        crate::handlers::list_bookings
    ),
    components(schemas(
        Class,
        Booking,
        CreateClassRequest,
        BookingRequest,
        MessageResponse,
        BookingsResponse
    )),
    tags(
        (name = "studio", description = "Studio class scheduling and bookings")
    )
)]
pub struct ApiDoc;

use axum::{
    middleware,
    routing::get,
    Router,
};

use crate::handlers::{bookings, showtimes};
use crate::middleware::auth::{auth_middleware, require_customer};
use crate::middleware::rate_limit::create_public_governor;
use crate::middleware::user_rate_limit::create_user_governor;
use crate::AppState;

pub fn create_router(state: AppState) -> Router {
    // IP-based limit for anonymous reads
    let public_governor = create_public_governor();
    // Per-user limit for booking routes
    let user_governor = create_user_governor();

    // Public routes (showtime listing and seat maps)
    let public_routes = Router::new()
        .route("/showtimes", get(showtimes::list_showtimes))
        .route("/showtimes/{id}/seats", get(showtimes::view_seats))
        .layer(public_governor);

    // Booking routes (requires auth + customer role)
    let booking_routes = Router::new()
        .route("/", get(bookings::my_bookings).post(bookings::create_booking))
        .layer(user_governor)
        .layer(middleware::from_fn(require_customer))
        .layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    Router::new()
        .nest("/api", public_routes)
        .nest("/api/bookings", booking_routes)
        .with_state(state)
}

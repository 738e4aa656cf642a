use axum::{
    routing::{get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::booking::{book_venue, cancel_booking, show_booking_list};

pub fn build_booking_routers() -> Router<AppRegistry> {
    let booking_routers = Router::new()
        .route("/", post(book_venue))
        .route("/", get(show_booking_list))
        .route("/cancellations", post(cancel_booking));

    Router::new().nest("/bookings", booking_routers)
}

use axum::{routing::get, Router};
use registry::AppRegistry;

use crate::handler::venue::show_venue_list;

pub fn build_venue_routers() -> Router<AppRegistry> {
    let venue_routers = Router::new().route("/", get(show_venue_list));

    Router::new().nest("/venues", venue_routers)
}

use crate::{extractor::AuthenticatedMember, model::venue::VenuesResponse};
use axum::{extract::State, Json};
use registry::AppRegistry;
use shared::error::AppResult;

pub async fn show_venue_list(
    _member: AuthenticatedMember,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<VenuesResponse>> {
    match registry.catalog_repository().find_all_venues().await {
        Ok(venues) => Ok(Json(venues.into())),
        Err(e) if e.is_unavailable() => {
            tracing::warn!(
                error.message = %e,
                "Store unavailable, degrading venue list to empty"
            );
            Ok(Json(VenuesResponse::default()))
        }
        Err(e) => Err(e),
    }
}

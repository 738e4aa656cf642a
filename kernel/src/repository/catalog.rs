use crate::model::{
    catalog::Venue,
    id::{ClubId, VenueId},
};
use async_trait::async_trait;
use shared::error::AppResult;

/// Read-only access to the provisioned venue/club catalog and the
/// club-head binding table. Never mutates the backing store.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn resolve_venue(&self, venue_name: &str) -> AppResult<Option<VenueId>>;
    async fn resolve_club(&self, club_name: &str) -> AppResult<Option<ClubId>>;
    /// Resolves the club a principal may book for. Emails are compared
    /// case-insensitively. None when the email is not a club-head account.
    async fn club_for_principal(&self, email: &str) -> AppResult<Option<ClubId>>;
    async fn find_all_venues(&self) -> AppResult<Vec<Venue>>;
}

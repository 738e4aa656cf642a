use crate::model::id::{ClubId, VenueId};

/// Catalog entries are provisioned once and never mutated by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Venue {
    pub venue_id: VenueId,
    pub venue_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Club {
    pub club_id: ClubId,
    pub club_name: String,
}

use crate::model::{
    id::{ClubId, VenueId},
    slot::Slot,
};

pub mod event;

/// A committed reservation, joined with its catalog names for display.
/// Bookings carry no surrogate identifier; the composite
/// (venue, club, date, time range) key identifies them externally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    pub venue_id: VenueId,
    pub club_id: ClubId,
    pub slot: Slot,
    pub venue_link: String,
    pub venue_name: String,
    pub club_name: String,
}

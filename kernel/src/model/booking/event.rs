use crate::model::{
    id::{ClubId, VenueId},
    slot::Slot,
};
use derive_new::new;

#[derive(Debug, new)]
pub struct BookVenue {
    pub venue_id: VenueId,
    pub club_id: ClubId,
    pub slot: Slot,
    pub venue_link: String,
}

#[derive(Debug, new)]
pub struct CancelBooking {
    pub venue_id: VenueId,
    pub club_id: ClubId,
    pub slot: Slot,
}

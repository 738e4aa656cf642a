use chrono::{NaiveDate, NaiveTime};
use kernel::model::{
    booking::Booking,
    id::{ClubId, VenueId},
    slot::Slot,
};

/// Row shape for booking listings: `booked_venue` joined with the two
/// catalog tables for the display names.
#[derive(Debug, sqlx::FromRow)]
pub struct BookingRow {
    pub venue_id: VenueId,
    pub club_id: ClubId,
    pub date: NaiveDate,
    pub from_time: NaiveTime,
    pub end_time: NaiveTime,
    pub venue_link: String,
    pub venue_name: String,
    pub club_name: String,
}

impl From<BookingRow> for Booking {
    fn from(value: BookingRow) -> Self {
        let BookingRow {
            venue_id,
            club_id,
            date,
            from_time,
            end_time,
            venue_link,
            venue_name,
            club_name,
        } = value;
        Booking {
            venue_id,
            club_id,
            slot: Slot::new(date, from_time, end_time),
            venue_link,
            venue_name,
            club_name,
        }
    }
}

use crate::model::{
    booking::{
        event::{BookVenue, CancelBooking},
        Booking,
    },
    id::ClubId,
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Commits a booking. The overlap check and the insert must execute as
    /// one atomically-consistent unit with respect to concurrent calls on
    /// the same venue and date; a lost race surfaces as `SlotConflict`.
    async fn book(&self, event: BookVenue) -> AppResult<()>;
    /// Deletes by the full composite key, club included. Returns whether a
    /// row was removed; a missing row is a normal zero-effect outcome.
    async fn cancel(&self, event: CancelBooking) -> AppResult<bool>;
    /// All committed bookings, ordered by date then start time.
    async fn find_all(&self) -> AppResult<Vec<Booking>>;
    /// Committed bookings held by one club, same ordering.
    async fn find_by_club(&self, club_id: ClubId) -> AppResult<Vec<Booking>>;
}

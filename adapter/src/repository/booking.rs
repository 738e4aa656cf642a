use crate::database::{
    is_serialization_failure, is_unique_violation, map_query_error, model::booking::BookingRow,
    ConnectionPool,
};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    booking::{
        event::{BookVenue, CancelBooking},
        Booking,
    },
    id::ClubId,
};
use kernel::repository::booking::BookingRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct BookingRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl BookingRepository for BookingRepositoryImpl {
    async fn book(&self, event: BookVenue) -> AppResult<()> {
        let mut tx = self.db.begin().await?;

        // The overlap probe and the insert must be one atomically-consistent
        // unit against concurrent bookings of the same venue and date, or two
        // requests can both pass the probe before either commits. SERIALIZABLE
        // isolation closes that window; the loser of a race surfaces as a
        // serialization failure and is reported as a conflict.
        self.set_transaction_serializable(&mut tx).await?;

        {
            //
            // ① both catalog references must resolve
            //
            let venue = sqlx::query("SELECT venue_id FROM venue_list WHERE venue_id = $1")
                .bind(event.venue_id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(map_query_error)?;
            if venue.is_none() {
                return Err(AppError::EntityNotFound(format!(
                    "venue {} is not in the catalog",
                    event.venue_id
                )));
            }

            let club = sqlx::query("SELECT club_id FROM club_list WHERE club_id = $1")
                .bind(event.club_id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(map_query_error)?;
            if club.is_none() {
                return Err(AppError::EntityNotFound(format!(
                    "club {} is not in the catalog",
                    event.club_id
                )));
            }

            //
            // ② the requested range must not overlap a committed booking.
            //    Overlap over half-open ranges:
            //        existing.from < new.to AND new.from < existing.to
            //
            let overlap = sqlx::query(
                r#"
                SELECT venue_id
                FROM booked_venue
                WHERE venue_id = $1
                  AND date = $2
                  AND from_time < $4
                  AND $3 < end_time
                LIMIT 1
                "#,
            )
            .bind(event.venue_id)
            .bind(event.slot.date)
            .bind(event.slot.from)
            .bind(event.slot.to)
            .fetch_optional(&mut *tx)
            .await
            .map_err(map_query_error)?;

            if overlap.is_some() {
                return Err(AppError::SlotConflict(format!(
                    "the venue is already booked within {} - {} on {}",
                    event.slot.from, event.slot.to, event.slot.date
                )));
            }
        }

        let res = sqlx::query(
            r#"
            INSERT INTO booked_venue
            (venue_id, club_id, date, from_time, end_time, venue_link)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(event.venue_id)
        .bind(event.club_id)
        .bind(event.slot.date)
        .bind(event.slot.from)
        .bind(event.slot.to)
        .bind(&event.venue_link)
        .execute(&mut *tx)
        .await
        .map_err(|e| conflict_or_query_error(e, &event))?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No booking record has been created".into(),
            ));
        }

        tx.commit().await.map_err(|e| {
            if is_serialization_failure(&e) || is_unique_violation(&e) {
                AppError::SlotConflict(format!(
                    "the venue is already booked within {} - {} on {}",
                    event.slot.from, event.slot.to, event.slot.date
                ))
            } else {
                AppError::TransactionError(e)
            }
        })?;

        Ok(())
    }

    async fn cancel(&self, event: CancelBooking) -> AppResult<bool> {
        // Exact match on the full composite key. The club is part of the key,
        // so a principal can never remove another club's booking; a missing
        // row is a normal zero-effect outcome, not an error.
        let res = sqlx::query(
            r#"
            DELETE FROM booked_venue
            WHERE venue_id = $1
              AND club_id = $2
              AND date = $3
              AND from_time = $4
              AND end_time = $5
            "#,
        )
        .bind(event.venue_id)
        .bind(event.club_id)
        .bind(event.slot.date)
        .bind(event.slot.from)
        .bind(event.slot.to)
        .execute(self.db.inner_ref())
        .await
        .map_err(map_query_error)?;

        Ok(res.rows_affected() > 0)
    }

    async fn find_all(&self) -> AppResult<Vec<Booking>> {
        sqlx::query_as::<_, BookingRow>(
            r#"
            SELECT
                bv.venue_id,
                bv.club_id,
                bv.date,
                bv.from_time,
                bv.end_time,
                bv.venue_link,
                vl.venue_name,
                cl.club_name
            FROM booked_venue AS bv
            INNER JOIN venue_list AS vl ON bv.venue_id = vl.venue_id
            INNER JOIN club_list AS cl ON bv.club_id = cl.club_id
            ORDER BY bv.date ASC, bv.from_time ASC
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map(|rows| rows.into_iter().map(Booking::from).collect())
        .map_err(map_query_error)
    }

    async fn find_by_club(&self, club_id: ClubId) -> AppResult<Vec<Booking>> {
        sqlx::query_as::<_, BookingRow>(
            r#"
            SELECT
                bv.venue_id,
                bv.club_id,
                bv.date,
                bv.from_time,
                bv.end_time,
                bv.venue_link,
                vl.venue_name,
                cl.club_name
            FROM booked_venue AS bv
            INNER JOIN venue_list AS vl ON bv.venue_id = vl.venue_id
            INNER JOIN club_list AS cl ON bv.club_id = cl.club_id
            WHERE bv.club_id = $1
            ORDER BY bv.date ASC, bv.from_time ASC
            "#,
        )
        .bind(club_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map(|rows| rows.into_iter().map(Booking::from).collect())
        .map_err(map_query_error)
    }
}

impl BookingRepositoryImpl {
    async fn set_transaction_serializable(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    ) -> AppResult<()> {
        sqlx::query("SET TRANSACTION ISOLATION LEVEL SERIALIZABLE")
            .execute(&mut **tx)
            .await
            .map_err(map_query_error)?;
        Ok(())
    }
}

fn conflict_or_query_error(e: sqlx::Error, event: &BookVenue) -> AppError {
    if is_serialization_failure(&e) || is_unique_violation(&e) {
        AppError::SlotConflict(format!(
            "the venue is already booked within {} - {} on {}",
            event.slot.from, event.slot.to, event.slot.date
        ))
    } else {
        map_query_error(e)
    }
}

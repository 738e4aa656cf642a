use crate::{
    binder::bind_club,
    extractor::AuthenticatedMember,
    model::booking::{
        BookingListQuery, BookingListScope, BookingStatusResponse, BookingsResponse,
        CancelBookingRequest, CreateBookingRequest,
    },
};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Local;
use garde::Validate;
use kernel::model::booking::event::{BookVenue, CancelBooking};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

/// Request order: validate the interval, resolve catalog names, authorize
/// the principal, then hand the conflict check and commit to the store as
/// one transactional unit.
pub async fn book_venue(
    member: AuthenticatedMember,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateBookingRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate(&())?;

    let slot = req.slot();
    slot.validate()?;

    if registry.booking_policy().reject_past_bookings
        && slot.date.and_time(slot.from) < Local::now().naive_local()
    {
        return Err(AppError::InvalidTimeRange(
            "bookings in the past are not accepted".into(),
        ));
    }

    let catalog = registry.catalog_repository();
    let venue_id = catalog
        .resolve_venue(&req.venue_name)
        .await?
        .ok_or_else(|| AppError::UnknownVenue(req.venue_name.clone()))?;

    let club_id = bind_club(catalog.as_ref(), member.email(), &req.club_name).await?;

    registry
        .booking_repository()
        .book(BookVenue::new(venue_id, club_id, slot, req.venue_link))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(BookingStatusResponse::success(format!(
            "{} is booked for {} on {}",
            req.venue_name, req.club_name, slot.date
        ))),
    ))
}

/// Cancellation matches on the full composite key scoped to the authorized
/// club. A missing row is acknowledged as a zero-effect success.
pub async fn cancel_booking(
    member: AuthenticatedMember,
    State(registry): State<AppRegistry>,
    Json(req): Json<CancelBookingRequest>,
) -> AppResult<Json<BookingStatusResponse>> {
    req.validate(&())?;

    let catalog = registry.catalog_repository();
    let venue_id = catalog
        .resolve_venue(&req.venue_name)
        .await?
        .ok_or_else(|| AppError::UnknownVenue(req.venue_name.clone()))?;

    let club_id = bind_club(catalog.as_ref(), member.email(), &req.club_name).await?;

    let removed = registry
        .booking_repository()
        .cancel(CancelBooking::new(venue_id, club_id, req.slot()))
        .await?;

    let message = if removed {
        "Booking cancelled"
    } else {
        "No matching booking was found"
    };
    Ok(Json(BookingStatusResponse::success(message)))
}

pub async fn show_booking_list(
    member: AuthenticatedMember,
    Query(query): Query<BookingListQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BookingsResponse>> {
    let result = match query.scope {
        BookingListScope::All => registry.booking_repository().find_all().await,
        BookingListScope::Mine => match registry
            .catalog_repository()
            .club_for_principal(member.email())
            .await
        {
            // A principal without a club-head binding holds no bookings.
            Ok(None) => Ok(Vec::new()),
            Ok(Some(club_id)) => registry.booking_repository().find_by_club(club_id).await,
            Err(e) => Err(e),
        },
    };

    match result {
        Ok(bookings) => Ok(Json(bookings.into())),
        Err(e) if e.is_unavailable() => {
            tracing::warn!(
                error.message = %e,
                "Store unavailable, degrading booking list to empty"
            );
            Ok(Json(BookingsResponse::default()))
        }
        Err(e) => Err(e),
    }
}

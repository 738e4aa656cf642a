use chrono::{NaiveDate, NaiveTime};
use garde::Validate;
use kernel::model::{booking::Booking, slot::Slot};
use serde::{Deserialize, Serialize};

/// Booking requests carry human-readable catalog names and normalized
/// (ISO date, 24-hour) times; display formatting happens on the way out.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    #[garde(skip)]
    pub date: NaiveDate,
    #[garde(skip)]
    pub from_time: NaiveTime,
    #[garde(skip)]
    pub to_time: NaiveTime,
    #[garde(length(min = 1))]
    pub venue_name: String,
    #[garde(length(min = 1))]
    pub club_name: String,
    #[garde(length(min = 1, max = 2048))]
    pub venue_link: String,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CancelBookingRequest {
    #[garde(skip)]
    pub date: NaiveDate,
    #[garde(skip)]
    pub from_time: NaiveTime,
    #[garde(skip)]
    pub to_time: NaiveTime,
    #[garde(length(min = 1))]
    pub venue_name: String,
    #[garde(length(min = 1))]
    pub club_name: String,
}

impl CreateBookingRequest {
    pub fn slot(&self) -> Slot {
        Slot::new(self.date, self.from_time, self.to_time)
    }
}

impl CancelBookingRequest {
    pub fn slot(&self) -> Slot {
        Slot::new(self.date, self.from_time, self.to_time)
    }
}

#[derive(Debug, Deserialize, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BookingListScope {
    #[default]
    All,
    Mine,
}

#[derive(Debug, Deserialize, Default)]
pub struct BookingListQuery {
    #[serde(default)]
    pub scope: BookingListScope,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingStatusResponse {
    pub status: &'static str,
    pub message: String,
}

impl BookingStatusResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: "success",
            message: message.into(),
        }
    }
}

#[derive(Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct BookingsResponse {
    pub items: Vec<BookingResponse>,
}

impl From<Vec<Booking>> for BookingsResponse {
    fn from(value: Vec<Booking>) -> Self {
        Self {
            items: value.into_iter().map(BookingResponse::from).collect(),
        }
    }
}

/// Display representation: day-month-year dates and 12-hour times, as
/// the dashboards render them. The engine itself never works in this form.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub date: String,
    pub from_time: String,
    pub to_time: String,
    pub venue_link: String,
    pub venue_name: String,
    pub club_name: String,
}

impl From<Booking> for BookingResponse {
    fn from(value: Booking) -> Self {
        let Booking {
            venue_id: _,
            club_id: _,
            slot,
            venue_link,
            venue_name,
            club_name,
        } = value;
        Self {
            date: slot.date.format("%d-%m-%Y").to_string(),
            from_time: slot.from.format("%I:%M %p").to_string(),
            to_time: slot.to.format("%I:%M %p").to_string(),
            venue_link,
            venue_name,
            club_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::model::id::{ClubId, VenueId};

    #[test]
    fn booking_is_formatted_for_display() {
        let booking = Booking {
            venue_id: VenueId::new(5),
            club_id: ClubId::new(4),
            slot: Slot::new(
                "2024-05-01".parse().unwrap(),
                "14:00:00".parse().unwrap(),
                "15:30:00".parse().unwrap(),
            ),
            venue_link: "https://events.example.org/ai-meetup".into(),
            venue_name: "G - 301".into(),
            club_name: "Artificial Intelligence & Robotics".into(),
        };

        let res = BookingResponse::from(booking);
        assert_eq!(res.date, "01-05-2024");
        assert_eq!(res.from_time, "02:00 PM");
        assert_eq!(res.to_time, "03:30 PM");
    }

    #[test]
    fn morning_times_keep_am_marker() {
        let booking = Booking {
            venue_id: VenueId::new(1),
            club_id: ClubId::new(1),
            slot: Slot::new(
                "2024-12-09".parse().unwrap(),
                "09:00:00".parse().unwrap(),
                "10:00:00".parse().unwrap(),
            ),
            venue_link: String::new(),
            venue_name: "J - 410".into(),
            club_name: "Dramatix Club".into(),
        };

        let res = BookingResponse::from(booking);
        assert_eq!(res.date, "09-12-2024");
        assert_eq!(res.from_time, "09:00 AM");
        assert_eq!(res.to_time, "10:00 AM");
    }

    #[test]
    fn scope_defaults_to_all() {
        let query: BookingListQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query.scope, BookingListScope::All);

        let query: BookingListQuery = serde_json::from_str(r#"{"scope":"mine"}"#).unwrap();
        assert_eq!(query.scope, BookingListScope::Mine);
    }

    #[test]
    fn create_request_rejects_blank_names() {
        let req = CreateBookingRequest {
            date: "2024-05-01".parse().unwrap(),
            from_time: "14:00:00".parse().unwrap(),
            to_time: "15:00:00".parse().unwrap(),
            venue_name: String::new(),
            club_name: "Cyber Security Club".into(),
            venue_link: "https://events.example.org".into(),
        };
        assert!(req.validate(&()).is_err());
    }
}

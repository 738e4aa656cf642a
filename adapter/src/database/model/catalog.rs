use kernel::model::{catalog::Venue, id::VenueId};

#[derive(Debug, sqlx::FromRow)]
pub struct VenueRow {
    pub venue_id: VenueId,
    pub venue_name: String,
}

impl From<VenueRow> for Venue {
    fn from(value: VenueRow) -> Self {
        let VenueRow {
            venue_id,
            venue_name,
        } = value;
        Venue {
            venue_id,
            venue_name,
        }
    }
}

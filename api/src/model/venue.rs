use kernel::model::{catalog::Venue, id::VenueId};
use serde::Serialize;

#[derive(Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct VenuesResponse {
    pub items: Vec<VenueResponse>,
}

impl From<Vec<Venue>> for VenuesResponse {
    fn from(value: Vec<Venue>) -> Self {
        Self {
            items: value.into_iter().map(VenueResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueResponse {
    pub venue_id: VenueId,
    pub venue_name: String,
}

impl From<Venue> for VenueResponse {
    fn from(value: Venue) -> Self {
        let Venue {
            venue_id,
            venue_name,
        } = value;
        Self {
            venue_id,
            venue_name,
        }
    }
}

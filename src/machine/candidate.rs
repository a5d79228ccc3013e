use log::debug;
use serde::{Deserialize, Serialize};
use vendnav_geo::GeoPoint;

use crate::Error;
use crate::ident::MachineId;
use crate::util::lenient::{lenient_f64, nan, tolerant_vec};

/// A vending machine location which may be ranked by proximity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Candidate {
    pub id: MachineId,
    pub location: GeoPoint,
}

impl Candidate {
    pub fn new(id: impl Into<MachineId>, location: GeoPoint) -> Self {
        Self {
            id: id.into(),
            location,
        }
    }

    /// Whether the location can take part in ranking.
    pub fn is_valid(&self) -> bool {
        self.location.is_finite()
    }
}

/// A record as returned by the coordinates endpoint.
///
/// The `x_coordinate` holds the latitude and `y_coordinate` the longitude.
/// Either may be a number, a numeric string, or absent, and is coerced
/// into NaN when it cannot be read.
#[derive(Debug, Clone, Deserialize)]
pub struct CoordinateRecord {
    pub id: MachineId,
    #[serde(default = "nan", deserialize_with = "lenient_f64")]
    pub x_coordinate: f64,
    #[serde(default = "nan", deserialize_with = "lenient_f64")]
    pub y_coordinate: f64,
}

impl From<CoordinateRecord> for Candidate {
    fn from(record: CoordinateRecord) -> Self {
        Candidate::new(
            record.id,
            GeoPoint::new(record.x_coordinate, record.y_coordinate),
        )
    }
}

/// The coordinates endpoint answers either with a bare array of records
/// or with the array wrapped in a `data` envelope.
///
/// Records which cannot be read at all, such as those without an id, are
/// skipped so that one bad row never hides the rest.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CoordinatesPayload {
    Wrapped {
        #[serde(deserialize_with = "tolerant_vec")]
        data: Vec<CoordinateRecord>,
    },
    Bare(#[serde(deserialize_with = "tolerant_vec")] Vec<CoordinateRecord>),
}

impl CoordinatesPayload {
    pub fn from_json(payload: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(payload)?)
    }

    pub fn records(self) -> Vec<CoordinateRecord> {
        match self {
            CoordinatesPayload::Wrapped { data } => data,
            CoordinatesPayload::Bare(records) => records,
        }
    }

    /// Converts every record into a [`Candidate`], dropping those
    /// whose coordinates could not be read.
    pub fn into_candidates(self) -> Vec<Candidate> {
        let records = self.records();
        let total = records.len();

        let candidates = records
            .into_iter()
            .map(Candidate::from)
            .filter(Candidate::is_valid)
            .collect::<Vec<_>>();

        if candidates.len() != total {
            debug!(
                "Dropped {} of {} machines with unreadable coordinates",
                total - candidates.len(),
                total
            );
        }

        candidates
    }
}

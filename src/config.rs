use std::env;
use std::str::FromStr;

use serde::Serialize;
use vendnav_geo::GeoPoint;

use crate::Error;
use crate::ident::MachineId;

pub const API_URL: &str = "VENDNAV_API_URL";
pub const ACCESS_TOKEN: &str = "MAPBOX_ACCESS_TOKEN";
pub const DEFAULT_LAT: &str = "VENDNAV_DEFAULT_LAT";
pub const DEFAULT_LNG: &str = "VENDNAV_DEFAULT_LNG";
pub const PANORAMA_RADIUS: &str = "VENDNAV_PANORAMA_RADIUS";

/// Aldrich Park, at the centre of the UCI campus.
pub const DEFAULT_LOCATION: GeoPoint = GeoPoint::new(33.6461, -117.8427);

/// Search radius, in metres, used when looking up a panorama near a machine.
pub const DEFAULT_PANORAMA_RADIUS: f64 = 200.0;

const DIRECTIONS_URL: &str = "https://api.mapbox.com/directions/v5/mapbox/walking";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_url: String,
    pub access_token: String,
    pub default_location: GeoPoint,
    pub panorama_radius: f64,
}

#[derive(Serialize)]
struct DirectionsQuery<'a> {
    access_token: &'a str,
    alternatives: bool,
    geometries: &'a str,
    steps: bool,
    annotations: &'a str,
    overview: &'a str,
    voice_instructions: bool,
    banner_instructions: bool,
}

impl Config {
    /// Reads the configuration from the process environment, after
    /// loading a `.env` file when one is present.
    pub fn from_env() -> Result<Self, Error> {
        dotenv::dotenv().ok();
        Config::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = lookup(API_URL)
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| Error::MissingEnvironment(API_URL.to_string()))?;

        let latitude = parse_or(&lookup, DEFAULT_LAT, DEFAULT_LOCATION.latitude)?;
        let longitude = parse_or(&lookup, DEFAULT_LNG, DEFAULT_LOCATION.longitude)?;

        Ok(Config {
            api_url: api_url.trim().trim_end_matches('/').to_string(),
            access_token: lookup(ACCESS_TOKEN).unwrap_or_default(),
            default_location: GeoPoint::try_new(latitude, longitude)?,
            panorama_radius: parse_or(&lookup, PANORAMA_RADIUS, DEFAULT_PANORAMA_RADIUS)?,
        })
    }

    pub fn coordinates_url(&self) -> String {
        format!("{}/coordinates", self.api_url)
    }

    pub fn inventory_url(&self, machine: &MachineId) -> String {
        format!("{}/vending-machines/inventory/{machine}", self.api_url)
    }

    /// The walking directions request between two points, asking for
    /// step maneuvers and the full route geometry.
    pub fn directions_url(&self, origin: GeoPoint, destination: GeoPoint) -> Result<String, Error> {
        let query = serde_qs::to_string(&DirectionsQuery {
            access_token: &self.access_token,
            alternatives: true,
            geometries: "geojson",
            steps: true,
            annotations: "distance,duration",
            overview: "full",
            voice_instructions: true,
            banner_instructions: true,
        })?;

        Ok(format!(
            "{DIRECTIONS_URL}/{},{};{},{}?{query}",
            origin.longitude, origin.latitude, destination.longitude, destination.latitude
        ))
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, Error>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| Error::InvalidEnvironment(key.to_string(), value)),
    }
}

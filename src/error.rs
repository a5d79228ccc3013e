use std::fmt::{Display, Formatter};

use vendnav_geo::GeoError;

use crate::impl_err;

#[derive(Debug)]
pub enum Error {
    Geo(GeoError),
    Json(serde_json::Error),
    Query(serde_qs::Error),
    MissingEnvironment(String),
    InvalidEnvironment(String, String),
    /// A command-line argument could not be read.
    InvalidArgument(String, String),
    /// The routing service answered without any route.
    NoRoute,
    /// A wrapped collaborator (map surface, data source) failed.
    Collaborator(String),
}

impl_err!(GeoError, Geo);
impl_err!(serde_json::Error, Json);
impl_err!(serde_qs::Error, Query);

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Geo(err) => write!(f, "{err}"),
            Error::Json(err) => write!(f, "malformed payload: {err}"),
            Error::Query(err) => write!(f, "could not encode query: {err}"),
            Error::MissingEnvironment(key) => write!(f, "missing environment variable {key}"),
            Error::InvalidEnvironment(key, value) => {
                write!(f, "environment variable {key} has invalid value {value:?}")
            }
            Error::InvalidArgument(name, value) => {
                write!(f, "argument {name} has invalid value {value:?}")
            }
            Error::NoRoute => write!(f, "no route returned"),
            Error::Collaborator(reason) => write!(f, "collaborator failed: {reason}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Geo(err) => Some(err),
            Error::Json(err) => Some(err),
            Error::Query(err) => Some(err),
            _ => None,
        }
    }
}

use std::collections::BTreeMap;

use serde::Serialize;
use vendnav_geo::GeoPoint;

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(tag = "type")]
pub enum Geometry {
    Point { coordinates: [f64; 2] },
    LineString { coordinates: Vec<[f64; 2]> },
}

impl Geometry {
    pub fn point(point: GeoPoint) -> Self {
        Geometry::Point {
            coordinates: point.lng_lat(),
        }
    }

    pub fn line(points: &[GeoPoint]) -> Self {
        Geometry::LineString {
            coordinates: points.iter().map(GeoPoint::lng_lat).collect(),
        }
    }
}

/// A geometry with properties. Always tagged `"type": "Feature"`, including
/// inside a collection.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(tag = "type", rename = "Feature")]
pub struct Feature {
    pub properties: BTreeMap<String, String>,
    pub geometry: Geometry,
}

impl Feature {
    pub fn new(geometry: Geometry) -> Self {
        Feature {
            properties: BTreeMap::new(),
            geometry,
        }
    }

    pub fn with_property(mut self, key: &str, value: &str) -> Self {
        self.properties.insert(key.to_string(), value.to_string());
        self
    }
}

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(tag = "type", rename = "FeatureCollection")]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

/// The GeoJSON payload of a map source. Each variant carries its own
/// `type` tag.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(untagged)]
pub enum GeoJson {
    Feature(Feature),
    FeatureCollection(FeatureCollection),
}

use serde::Serialize;
use serde_json::{Value, json};
use vendnav_geo::{Bounds, GeoPoint};

use crate::render::{Feature, FeatureCollection, GeoJson, Geometry};
use crate::route::RouteSummary;

pub const ROUTE_SOURCE: &str = "route";
pub const ROUTE_LAYER: &str = "route-layer";
pub const TURN_POINTS_SOURCE: &str = "turn-points";
pub const TURN_POINTS_LAYER: &str = "turn-points-layer";
pub const ENDPOINT_SOURCE: &str = "endpoint-markers";
pub const ENDPOINT_LAYER: &str = "endpoint-markers-layer";

/// Padding, in pixels, kept around the route when fitting the view.
pub const FIT_PADDING: u32 = 80;

pub const ROUTE_COLOR: &str = "#34a853";
pub const ROUTE_WIDTH: f64 = 4.0;
pub const ROUTE_OPACITY: f64 = 0.8;

pub const ENDPOINT_RADIUS: f64 = 6.0;
pub const ENDPOINT_STROKE_COLOR: &str = "#ffffff";
pub const ENDPOINT_STROKE_WIDTH: f64 = 2.0;

#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    GeoJson,
}

/// A named data source. Serializes to the source definition passed
/// alongside `id` when adding it to a map.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Source {
    #[serde(skip)]
    pub id: String,
    #[serde(rename = "type")]
    pub kind: SourceKind,
    pub data: GeoJson,
}

impl Source {
    pub fn geojson(id: &str, data: GeoJson) -> Self {
        Source {
            id: id.to_string(),
            kind: SourceKind::GeoJson,
            data,
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LayerKind {
    Line,
    Circle,
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct LineLayout {
    pub line_join: String,
    pub line_cap: String,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct LinePaint {
    pub line_color: String,
    pub line_width: f64,
    pub line_opacity: f64,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct CirclePaint {
    pub circle_radius: f64,
    /// A style expression, or a literal colour.
    pub circle_color: Value,
    pub circle_stroke_color: String,
    pub circle_stroke_width: f64,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(untagged)]
pub enum Paint {
    Line(LinePaint),
    Circle(CirclePaint),
}

/// A style layer drawing one source.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Layer {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: LayerKind,
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<LineLayout>,
    pub paint: Paint,
}

/// Everything a map needs to show a walking route between the user and
/// a machine. Computing it touches no map; see [`crate::render::sync`]
/// for applying it.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteLayers {
    /// `(layer, source)` pairs left behind by earlier routes.
    pub stale: Vec<(&'static str, &'static str)>,
    pub route: (Source, Layer),
    pub endpoints: (Source, Layer),
    /// Area to fit the view to, absent for an empty route.
    pub bounds: Option<Bounds>,
    pub padding: u32,
}

impl RouteLayers {
    pub fn new(origin: GeoPoint, destination: GeoPoint, path: &[GeoPoint]) -> Self {
        RouteLayers {
            stale: vec![
                (ROUTE_LAYER, ROUTE_SOURCE),
                (TURN_POINTS_LAYER, TURN_POINTS_SOURCE),
                (ENDPOINT_LAYER, ENDPOINT_SOURCE),
            ],
            route: route_line(path),
            endpoints: endpoint_markers(origin, destination),
            bounds: Bounds::enclosing(path.iter().copied()),
            padding: FIT_PADDING,
        }
    }

    pub fn from_summary(origin: GeoPoint, destination: GeoPoint, summary: &RouteSummary) -> Self {
        RouteLayers::new(origin, destination, &summary.path())
    }

    /// Sources paired with their layers, in drawing order.
    pub fn pairs(&self) -> [&(Source, Layer); 2] {
        [&self.route, &self.endpoints]
    }
}

fn route_line(path: &[GeoPoint]) -> (Source, Layer) {
    let source = Source::geojson(ROUTE_SOURCE, GeoJson::Feature(Feature::new(Geometry::line(path))));

    let layer = Layer {
        id: ROUTE_LAYER.to_string(),
        kind: LayerKind::Line,
        source: ROUTE_SOURCE.to_string(),
        layout: Some(LineLayout {
            line_join: "round".to_string(),
            line_cap: "round".to_string(),
        }),
        paint: Paint::Line(LinePaint {
            line_color: ROUTE_COLOR.to_string(),
            line_width: ROUTE_WIDTH,
            line_opacity: ROUTE_OPACITY,
        }),
    };

    (source, layer)
}

fn endpoint_markers(origin: GeoPoint, destination: GeoPoint) -> (Source, Layer) {
    let features = vec![
        Feature::new(Geometry::point(origin)).with_property("type", "start"),
        Feature::new(Geometry::point(destination)).with_property("type", "end"),
    ];

    let source = Source::geojson(
        ENDPOINT_SOURCE,
        GeoJson::FeatureCollection(FeatureCollection { features }),
    );

    let layer = Layer {
        id: ENDPOINT_LAYER.to_string(),
        kind: LayerKind::Circle,
        source: ENDPOINT_SOURCE.to_string(),
        layout: None,
        paint: Paint::Circle(CirclePaint {
            circle_radius: ENDPOINT_RADIUS,
            circle_color: json!(["get", "type"]),
            circle_stroke_color: ENDPOINT_STROKE_COLOR.to_string(),
            circle_stroke_width: ENDPOINT_STROKE_WIDTH,
        }),
    };

    (source, layer)
}

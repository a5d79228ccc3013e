use std::collections::BTreeSet;

use crate::Error;
use crate::render::{
    ENDPOINT_LAYER, ENDPOINT_SOURCE, FIT_PADDING, Layer, MapSurface, ROUTE_LAYER, ROUTE_SOURCE,
    RouteLayers, Source, TURN_POINTS_SOURCE, sync,
};
use crate::route::RouteSummary;

use serde_json::json;
use vendnav_fixtures::{WALKING_DIRECTIONS, fixture};
use vendnav_geo::{Bounds, GeoPoint};

const ORIGIN: GeoPoint = GeoPoint::new(33.6461, -117.8427);
const DESTINATION: GeoPoint = GeoPoint::new(33.6470, -117.8410);

#[derive(Debug, Clone, PartialEq)]
enum Call {
    RemoveLayer(String),
    RemoveSource(String),
    AddSource(String),
    AddLayer(String),
    FitBounds(Bounds, u32),
}

#[derive(Default)]
struct RecordingSurface {
    sources: BTreeSet<String>,
    calls: Vec<Call>,
    reject_layers: bool,
}

impl MapSurface for RecordingSurface {
    fn has_source(&self, id: &str) -> bool {
        self.sources.contains(id)
    }

    fn remove_layer(&mut self, id: &str) {
        self.calls.push(Call::RemoveLayer(id.to_string()));
    }

    fn remove_source(&mut self, id: &str) {
        self.sources.remove(id);
        self.calls.push(Call::RemoveSource(id.to_string()));
    }

    fn add_source(&mut self, source: &Source) -> Result<(), Error> {
        self.sources.insert(source.id.clone());
        self.calls.push(Call::AddSource(source.id.clone()));
        Ok(())
    }

    fn add_layer(&mut self, layer: &Layer) -> Result<(), Error> {
        if self.reject_layers {
            return Err(Error::Collaborator(format!("layer {} rejected", layer.id)));
        }

        self.calls.push(Call::AddLayer(layer.id.clone()));
        Ok(())
    }

    fn fit_bounds(&mut self, bounds: &Bounds, padding: u32) {
        self.calls.push(Call::FitBounds(*bounds, padding));
    }
}

fn walking_layers() -> RouteLayers {
    let payload = fixture(WALKING_DIRECTIONS).expect("Fixture must exist");
    let summary = RouteSummary::from_json(&payload).expect("Fixture must parse");

    RouteLayers::from_summary(ORIGIN, DESTINATION, &summary)
}

#[test]
fn route_source_carries_path() {
    let path = [ORIGIN, GeoPoint::new(33.6466, -117.8427), DESTINATION];
    let layers = RouteLayers::new(ORIGIN, DESTINATION, &path);

    let (source, layer) = &layers.route;
    assert_eq!(source.id, ROUTE_SOURCE);
    assert_eq!(
        serde_json::to_value(source).expect("Source must serialize"),
        json!({
            "type": "geojson",
            "data": {
                "type": "Feature",
                "properties": {},
                "geometry": {
                    "type": "LineString",
                    "coordinates": [
                        [-117.8427, 33.6461],
                        [-117.8427, 33.6466],
                        [-117.8410, 33.6470]
                    ]
                }
            }
        })
    );

    assert_eq!(
        serde_json::to_value(layer).expect("Layer must serialize"),
        json!({
            "id": "route-layer",
            "type": "line",
            "source": "route",
            "layout": { "line-join": "round", "line-cap": "round" },
            "paint": {
                "line-color": "#34a853",
                "line-width": 4.0,
                "line-opacity": 0.8
            }
        })
    );
}

#[test]
fn endpoints_are_typed_circles() {
    let layers = RouteLayers::new(ORIGIN, DESTINATION, &[ORIGIN, DESTINATION]);
    let (source, layer) = &layers.endpoints;

    assert_eq!(source.id, ENDPOINT_SOURCE);
    assert_eq!(
        serde_json::to_value(&source.data).expect("Source must serialize"),
        json!({
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "properties": { "type": "start" },
                    "geometry": { "type": "Point", "coordinates": [-117.8427, 33.6461] }
                },
                {
                    "type": "Feature",
                    "properties": { "type": "end" },
                    "geometry": { "type": "Point", "coordinates": [-117.8410, 33.6470] }
                }
            ]
        })
    );

    let layer = serde_json::to_value(layer).expect("Layer must serialize");
    assert_eq!(layer["type"], "circle");
    assert!(layer.get("layout").is_none());
    assert_eq!(
        layer["paint"],
        json!({
            "circle-radius": 6.0,
            "circle-color": ["get", "type"],
            "circle-stroke-color": "#ffffff",
            "circle-stroke-width": 2.0
        })
    );
}

#[test]
fn every_feature_is_tagged_once() {
    let layers = RouteLayers::new(ORIGIN, DESTINATION, &[ORIGIN, DESTINATION]);

    let route = serde_json::to_string(&layers.route.0.data).expect("Source must serialize");
    assert_eq!(route.matches(r#""type":"Feature""#).count(), 1);
    assert_eq!(route.matches(r#""type":"#).count(), 2);

    let endpoints =
        serde_json::to_string(&layers.endpoints.0.data).expect("Source must serialize");
    assert_eq!(endpoints.matches(r#""type":"Feature""#).count(), 2);
    assert_eq!(endpoints.matches(r#""type":"FeatureCollection""#).count(), 1);
}

#[test]
fn fit_covers_route() {
    let layers = walking_layers();
    let bounds = layers.bounds.expect("Route must be bounded");

    assert_eq!(layers.padding, FIT_PADDING);
    assert_eq!(bounds.south_west, GeoPoint::new(33.6461, -117.8427));
    assert_eq!(bounds.north_east, GeoPoint::new(33.6470, -117.8410));
}

#[test_log::test]
fn fresh_surface_is_populated() {
    let layers = walking_layers();
    let mut surface = RecordingSurface::default();

    sync(&mut surface, &layers).expect("Surface must accept layers");

    assert_eq!(
        surface.calls,
        vec![
            Call::AddSource(ROUTE_SOURCE.to_string()),
            Call::AddLayer(ROUTE_LAYER.to_string()),
            Call::AddSource(ENDPOINT_SOURCE.to_string()),
            Call::AddLayer(ENDPOINT_LAYER.to_string()),
            Call::FitBounds(layers.bounds.expect("Route must be bounded"), FIT_PADDING),
        ]
    );
}

#[test_log::test]
fn stale_route_is_replaced() {
    let layers = walking_layers();
    let mut surface = RecordingSurface::default();
    surface.sources.insert(ROUTE_SOURCE.to_string());
    surface.sources.insert(TURN_POINTS_SOURCE.to_string());

    sync(&mut surface, &layers).expect("Surface must accept layers");

    assert_eq!(
        &surface.calls[..4],
        &[
            Call::RemoveLayer(ROUTE_LAYER.to_string()),
            Call::RemoveSource(ROUTE_SOURCE.to_string()),
            Call::RemoveLayer("turn-points-layer".to_string()),
            Call::RemoveSource(TURN_POINTS_SOURCE.to_string()),
        ]
    );
    assert!(!surface.sources.contains(TURN_POINTS_SOURCE));
    assert!(surface.sources.contains(ROUTE_SOURCE));
    assert!(surface.sources.contains(ENDPOINT_SOURCE));
}

#[test]
fn empty_route_skips_fit() {
    let layers = RouteLayers::new(ORIGIN, DESTINATION, &[]);
    let mut surface = RecordingSurface::default();

    sync(&mut surface, &layers).expect("Surface must accept layers");

    assert!(layers.bounds.is_none());
    assert!(
        !surface
            .calls
            .iter()
            .any(|call| matches!(call, Call::FitBounds(..)))
    );
}

#[test]
fn surface_failure_propagates() {
    let layers = walking_layers();
    let mut surface = RecordingSurface {
        reject_layers: true,
        ..RecordingSurface::default()
    };

    let result = sync(&mut surface, &layers);

    assert!(matches!(result, Err(Error::Collaborator(_))));
    assert_eq!(surface.calls, vec![Call::AddSource(ROUTE_SOURCE.to_string())]);
}

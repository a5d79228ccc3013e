use crate::machine::{Candidate, CoordinatesPayload, Proximity, select_nearest};

use approx::assert_relative_eq;
use vendnav_fixtures::{CAMPUS_COORDINATES, MIXED_COORDINATES, fixture};
use vendnav_geo::{GeoPoint, estimate_distance};

const ALDRICH_PARK: GeoPoint = GeoPoint::new(33.6461, -117.8427);

fn campus() -> Vec<Candidate> {
    let payload = fixture(CAMPUS_COORDINATES).expect("Fixture must exist");
    CoordinatesPayload::from_json(&payload)
        .expect("Fixture must parse")
        .into_candidates()
}

#[test_log::test]
fn nearest_on_campus() {
    let machines = campus();
    assert_eq!(machines.len(), 5);

    let nearest = machines
        .nearest(&ALDRICH_PARK)
        .expect("A machine must be nearest");

    assert_eq!(nearest.candidate.id.as_str(), "4");
    assert_relative_eq!(nearest.distance, 0.18580, max_relative = 1e-3);
}

#[test]
fn nearest_is_no_further_than_any_other() {
    let machines = campus();
    let origins = [
        ALDRICH_PARK,
        GeoPoint::new(33.6500, -117.8400),
        GeoPoint::new(33.6400, -117.8500),
        GeoPoint::new(33.6453, -117.8447),
    ];

    for origin in origins {
        let nearest = select_nearest(&origin, &machines).expect("A machine must be nearest");
        let best = estimate_distance(origin, nearest.location);

        for other in &machines {
            assert!(
                best <= estimate_distance(origin, other.location),
                "{:?} is closer to {origin:?} than {:?}",
                other.id,
                nearest.id
            );
        }
    }
}

#[test]
fn ranking_orders_by_distance() {
    let machines = campus();
    let ranked = machines
        .ranked(&ALDRICH_PARK)
        .into_iter()
        .map(|nearest| nearest.candidate.id.to_string())
        .collect::<Vec<_>>();

    assert_eq!(ranked, vec!["4", "2", "1", "3", "5"]);
}

#[test]
fn empty_and_invalid_candidates() {
    assert!(select_nearest(&ALDRICH_PARK, &[]).is_none());

    let broken = vec![
        Candidate::new("a", GeoPoint::new(f64::NAN, -117.84)),
        Candidate::new("b", GeoPoint::new(33.64, f64::NAN)),
        Candidate::new("c", GeoPoint::new(f64::INFINITY, -117.84)),
    ];

    assert!(select_nearest(&ALDRICH_PARK, &broken).is_none());
    assert!(broken.ranked(&ALDRICH_PARK).is_empty());
}

#[test]
fn invalid_candidates_are_skipped() {
    let machines = vec![
        Candidate::new("broken", GeoPoint::new(f64::NAN, f64::NAN)),
        Candidate::new("far", GeoPoint::new(33.6502, -117.8391)),
        Candidate::new("near", GeoPoint::new(33.6470, -117.8410)),
    ];

    let nearest = select_nearest(&ALDRICH_PARK, &machines).expect("A machine must be nearest");
    assert_eq!(nearest.id.as_str(), "near");
}

#[test]
fn ties_resolve_to_first() {
    let location = GeoPoint::new(33.6470, -117.8410);
    let machines = vec![
        Candidate::new("first", location),
        Candidate::new("second", location),
        Candidate::new("third", location),
    ];

    let nearest = select_nearest(&ALDRICH_PARK, &machines).expect("A machine must be nearest");
    assert_eq!(nearest.id.as_str(), "first");

    let ranked = machines.ranked(&ALDRICH_PARK);
    let order = ranked
        .iter()
        .map(|n| n.candidate.id.as_str())
        .collect::<Vec<_>>();
    assert_eq!(order, vec!["first", "second", "third"]);
}

#[test]
fn recomputed_as_origin_moves() {
    let machines = campus();

    let first = select_nearest(&ALDRICH_PARK, &machines).map(|c| c.id.clone());
    let moved = select_nearest(&GeoPoint::new(33.6500, -117.8392), &machines).map(|c| c.id.clone());

    assert_eq!(first.as_ref().map(|id| id.as_str()), Some("4"));
    assert_eq!(moved.as_ref().map(|id| id.as_str()), Some("5"));
}

#[test]
fn non_finite_origin_has_no_nearest() {
    let machines = campus();
    assert!(select_nearest(&GeoPoint::new(f64::NAN, -117.84), &machines).is_none());
}

#[test_log::test]
fn mixed_payload_is_coerced() {
    let payload = fixture(MIXED_COORDINATES).expect("Fixture must exist");
    let records = CoordinatesPayload::from_json(&payload)
        .expect("Fixture must parse")
        .records();

    assert_eq!(records.len(), 5);
    assert_relative_eq!(records[0].x_coordinate, 33.6431);
    assert!(records[1].x_coordinate.is_nan());
    assert!(records[2].y_coordinate.is_nan());
    assert_eq!(records[3].id.as_str(), "42");
    assert_relative_eq!(records[4].x_coordinate, 33.6422);

    let machines = CoordinatesPayload::from_json(&payload)
        .expect("Fixture must parse")
        .into_candidates();

    let ids = machines.iter().map(|c| c.id.as_str()).collect::<Vec<_>>();
    assert_eq!(ids, vec!["engineering-1", "42", "arc"]);

    let nearest = select_nearest(&ALDRICH_PARK, &machines).expect("A machine must be nearest");
    assert_eq!(nearest.id.as_str(), "42");
}

#[test]
fn missing_coordinates_become_nan() {
    let payload = r#"[{ "id": 7 }]"#;
    let machines = CoordinatesPayload::from_json(payload)
        .expect("Payload must parse")
        .records();

    assert!(machines[0].x_coordinate.is_nan());
    assert!(machines[0].y_coordinate.is_nan());
}

#[test_log::test]
fn unreadable_records_are_skipped() {
    let payload = r#"[
        { "id": 1, "x_coordinate": "33.6470", "y_coordinate": -117.8410 },
        { "id": 2, "x_coordinate": true, "y_coordinate": -117.8410 },
        { "id": null, "x_coordinate": 33.6466, "y_coordinate": -117.8427 },
        { "x_coordinate": 33.6466, "y_coordinate": -117.8427 },
        null
    ]"#;

    let payload = CoordinatesPayload::from_json(payload).expect("Payload must parse");
    let records = payload.clone().records();
    assert_eq!(records.len(), 2);
    assert!(records[1].x_coordinate.is_nan());

    let machines = payload.into_candidates();
    let ids = machines.iter().map(|c| c.id.as_str()).collect::<Vec<_>>();
    assert_eq!(ids, vec!["1"]);

    let wrapped = r#"{ "data": [{ "id": null }, { "id": "a", "x_coordinate": 1, "y_coordinate": 2 }] }"#;
    let machines = CoordinatesPayload::from_json(wrapped)
        .expect("Payload must parse")
        .into_candidates();
    assert_eq!(machines.len(), 1);
}

#[test]
fn coordinates_read_numeric_prefixes() {
    let payload = r#"[{ "id": "engineering", "x_coordinate": "33.6470,", "y_coordinate": "-117.8410 deg" }]"#;
    let machines = CoordinatesPayload::from_json(payload)
        .expect("Payload must parse")
        .into_candidates();

    assert_eq!(machines.len(), 1);
    assert_eq!(machines[0].location, GeoPoint::new(33.6470, -117.8410));
}

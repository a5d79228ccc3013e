use std::path::Path;
use std::{env, fs};

use log::{info, warn};
use vendnav::machine::{CoordinatesPayload, Proximity};
use vendnav::{Config, Error, GeoPoint, config};

fn origin(args: &[String]) -> Result<GeoPoint, Error> {
    match args {
        [latitude, longitude] => {
            let parse = |key: &str, value: &String| {
                value
                    .parse::<f64>()
                    .map_err(|_| Error::InvalidArgument(key.to_string(), value.clone()))
            };

            Ok(GeoPoint::try_new(
                parse("latitude", latitude)?,
                parse("longitude", longitude)?,
            )?)
        }
        _ => match Config::from_env() {
            Ok(config) => Ok(config.default_location),
            Err(err) => {
                warn!("Falling back to the campus default location: {err}");
                Ok(config::DEFAULT_LOCATION)
            }
        },
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing")]
    vendnav::util::trace::initialize_tracer();
    #[cfg(not(feature = "tracing"))]
    env_logger::init();

    let args = env::args().skip(1).collect::<Vec<_>>();
    let Some((file, rest)) = args.split_first() else {
        return Err("usage: vendnav <coordinates.json> [latitude longitude]".into());
    };

    let payload = fs::read_to_string(Path::new(file))?;
    let machines = CoordinatesPayload::from_json(&payload)?.into_candidates();
    let origin = origin(rest)?;

    info!("Ranking {} machines from {origin:?}", machines.len());

    let Some(nearest) = machines.nearest(&origin) else {
        println!("No machine with a usable location");
        return Ok(());
    };

    println!(
        "Nearest: {} ({:.0} m)",
        nearest.candidate.id,
        nearest.distance * 1000.0
    );

    for (rank, entry) in machines.ranked(&origin).iter().enumerate() {
        println!(
            "{:>3}. {:<20} {:>8.0} m",
            rank + 1,
            entry.candidate.id.as_str(),
            entry.distance * 1000.0
        );
    }

    Ok(())
}

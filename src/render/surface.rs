use log::debug;
use vendnav_geo::Bounds;

use crate::Error;
use crate::render::{Layer, RouteLayers, Source};

/// The imperative side of a rendering SDK that route layers are pushed into.
pub trait MapSurface {
    fn has_source(&self, id: &str) -> bool;

    fn remove_layer(&mut self, id: &str);

    fn remove_source(&mut self, id: &str);

    fn add_source(&mut self, source: &Source) -> Result<(), Error>;

    fn add_layer(&mut self, layer: &Layer) -> Result<(), Error>;

    fn fit_bounds(&mut self, bounds: &Bounds, padding: u32);
}

/// Replaces whatever route the surface shows with `layers`.
///
/// Layers are removed before their sources, and sources are added
/// before the layers drawing them.
pub fn sync<S>(surface: &mut S, layers: &RouteLayers) -> Result<(), Error>
where
    S: MapSurface + ?Sized,
{
    for (layer, source) in &layers.stale {
        if surface.has_source(source) {
            debug!("Clearing stale {source} source");
            surface.remove_layer(layer);
            surface.remove_source(source);
        }
    }

    for (source, layer) in layers.pairs() {
        surface.add_source(source)?;
        surface.add_layer(layer)?;
    }

    if let Some(bounds) = &layers.bounds {
        surface.fit_bounds(bounds, layers.padding);
    }

    Ok(())
}

use itertools::Itertools;
use vendnav_geo::heading::angular_difference;

#[cfg(feature = "tracing")]
use tracing::Level;

use crate::pano::PanoLink;

/// Largest angular deviation, in degrees, between a requested heading and
/// the link followed for it.
pub const MAX_LINK_DEVIATION: f64 = 45.0;

/// Picks the link whose heading is angularly closest to `target`.
///
/// Returns `None` when there are no links or when even the closest one
/// deviates by more than [`MAX_LINK_DEVIATION`]; sparse panoramas often
/// have no link in the requested direction. Ties go to the first link.
#[cfg_attr(feature = "tracing", tracing::instrument(level = Level::DEBUG, skip(links)))]
pub fn resolve_best_link(target: f64, links: &[PanoLink]) -> Option<&PanoLink> {
    links
        .iter()
        .map(|link| (link, angular_difference(link.heading, target)))
        .filter(|(_, diff)| !diff.is_nan())
        .min_by(|(_, a), (_, b)| a.total_cmp(b))
        .filter(|(_, diff)| *diff <= MAX_LINK_DEVIATION)
        .map(|(link, _)| link)
}

/// Orders links by how closely they follow `reference`, closest first.
/// Links at the same deviation keep their relative order.
pub fn sort_links(reference: f64, links: &[PanoLink]) -> Vec<PanoLink> {
    links
        .iter()
        .cloned()
        .sorted_by(|a, b| {
            angular_difference(a.heading, reference)
                .total_cmp(&angular_difference(b.heading, reference))
        })
        .collect()
}

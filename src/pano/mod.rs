//! Street-level panorama navigation.
//!
//! The panorama service exposes, for the panorama on screen, a set of
//! links each pointing at a neighbouring panorama. A relative turn is
//! resolved to the link heading closest to where the turn aims.

mod link;
mod resolver;
mod view;

pub use link::{PanoLink, Turn};
pub use resolver::{MAX_LINK_DEVIATION, resolve_best_link, sort_links};
pub use view::{PanoMove, PanoramaView, look_at};

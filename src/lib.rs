#![doc = include_str!("../readme.md")]

pub mod collaborator;
pub mod config;
pub mod error;
pub mod ident;
pub mod inventory;
pub mod machine;
pub mod pano;
pub mod render;
pub mod route;
pub mod session;
pub mod util;

pub use config::Config;
pub use error::Error;
pub use ident::{Identifier, MachineId};
pub use session::{Session, ViewMode};

pub use vendnav_geo::{Bounds, GeoPoint, estimate_distance};

pub mod err;
pub(crate) mod lenient;
#[cfg(feature = "tracing")]
pub mod trace;

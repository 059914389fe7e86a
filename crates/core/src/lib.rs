//! Domain core for the hallyu catalog.
//!
//! Zero-internal-dependency crate holding the shared id/timestamp types, the
//! error taxonomy, and pure helpers (date coercion, pagination clamping, the
//! favorite target variant) used by both the data-access and API layers.

pub mod dates;
pub mod error;
pub mod favorite;
pub mod pagination;
pub mod types;

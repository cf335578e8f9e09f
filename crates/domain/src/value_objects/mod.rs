//! Value Objects - Immutable, identity-less domain primitives

mod bounds;
mod lat_lng;
mod locale;

pub use bounds::Bounds;
pub use lat_lng::LatLng;
pub use locale::Locale;

//! Domain layer for the geocoding client
//!
//! Contains the geographic value objects shared by the HTTP client and the
//! configuration layer. This layer has no I/O and defines the ubiquitous language:
//! coordinates, bounding boxes and locales.

pub mod errors;
pub mod value_objects;

pub use errors::DomainError;
pub use value_objects::*;

//! Domain layer for trailer-sync
//!
//! Holds the trailer record model, the trailer filter, and the traits the
//! infrastructure layer implements for decoding and persistence.

pub mod decoder;
pub mod model;
pub mod repository;
pub mod service;

//! Domain model types

pub mod trailer;

pub use trailer::TrailerRecord;

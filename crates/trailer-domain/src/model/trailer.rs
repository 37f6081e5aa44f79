//! Decoded vehicle record

use serde::{Deserialize, Serialize};

/// A vehicle as returned by the VIN decoding service.
///
/// Every decoded row uses this shape; only rows that pass the trailer filter
/// are persisted. `vin` is the primary key in the relational store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrailerRecord {
    pub vin: String,
    pub make: String,
    pub model: String,
    /// Model year, absent when the service returns a blank value
    pub year: Option<i32>,
    pub vehicle_type: String,
}

impl TrailerRecord {
    pub fn new(
        vin: impl Into<String>,
        make: impl Into<String>,
        model: impl Into<String>,
        year: Option<i32>,
        vehicle_type: impl Into<String>,
    ) -> Self {
        Self {
            vin: vin.into(),
            make: make.into(),
            model: model.into(),
            year,
            vehicle_type: vehicle_type.into(),
        }
    }
}

//! Repository trait definitions for data persistence

use trailer_types::Error;

use crate::model::TrailerRecord;

/// Repository for stored trailers, keyed by VIN
pub trait TrailerRepository {
    /// Insert records whose VIN is not yet stored. Existing rows are left
    /// untouched. Returns the number of rows actually inserted.
    fn insert_ignore(&self, records: &[TrailerRecord]) -> Result<usize, Error>;

    /// Find a trailer by VIN
    fn find_by_vin(&self, vin: &str) -> Result<Option<TrailerRecord>, Error>;

    /// Find all trailers, ordered by VIN
    fn find_all(&self) -> Result<Vec<TrailerRecord>, Error>;

    /// Number of stored trailers
    fn count(&self) -> Result<usize, Error>;
}

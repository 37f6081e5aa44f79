//! VIN decoding port

use trailer_types::Result;

use crate::model::TrailerRecord;

/// Decodes a batch of VINs into vehicle records.
///
/// One call is one request to the decoding service. Callers are responsible
/// for keeping a batch within the service's per-request limit.
pub trait VinDecoder {
    fn decode(&self, vins: &[String]) -> Result<Vec<TrailerRecord>>;
}

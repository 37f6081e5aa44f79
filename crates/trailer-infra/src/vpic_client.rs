//! NHTSA vPIC batch VIN decoder
//!
//! Posts `format=json&data=VIN1;VIN2;...` to the `DecodeVINValuesBatch`
//! endpoint and maps the flat `Results` rows to [`TrailerRecord`]s.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::{debug, warn};
use trailer_domain::decoder::VinDecoder;
use trailer_domain::model::TrailerRecord;
use trailer_types::{null_to_default, parse_model_year, Result};

/// Public vPIC batch decode endpoint
pub const DEFAULT_API_URL: &str = "https://vpic.nhtsa.dot.gov/api/vehicles/decodevinvaluesbatch/";

/// Maximum VINs vPIC accepts in one batch request
pub const MAX_BATCH_SIZE: usize = 50;

const VIN_DELIMITER: &str = ";";

/// Response envelope of the batch decode endpoint
#[derive(Debug, Deserialize)]
struct VpicResponse {
    #[serde(rename = "Message", default, deserialize_with = "null_to_default")]
    message: String,

    #[serde(rename = "Results", default, deserialize_with = "null_to_default")]
    results: Vec<VpicResult>,
}

/// One decoded VIN. vPIC returns every value as a string.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct VpicResult {
    #[serde(rename = "VIN", default, deserialize_with = "null_to_default")]
    vin: String,

    #[serde(default, deserialize_with = "null_to_default")]
    make: String,

    #[serde(default, deserialize_with = "null_to_default")]
    model: String,

    #[serde(default, deserialize_with = "null_to_default")]
    model_year: String,

    #[serde(default, deserialize_with = "null_to_default")]
    vehicle_type: String,

    #[serde(default, deserialize_with = "null_to_default")]
    error_code: String,

    #[serde(default, deserialize_with = "null_to_default")]
    error_text: String,
}

impl From<VpicResult> for TrailerRecord {
    fn from(r: VpicResult) -> Self {
        TrailerRecord {
            year: parse_model_year(&r.model_year),
            vin: r.vin,
            make: r.make,
            model: r.model,
            vehicle_type: r.vehicle_type,
        }
    }
}

/// Parse a batch decode response body
pub fn parse_response(body: &str) -> Result<Vec<TrailerRecord>> {
    let response: VpicResponse = serde_json::from_str(body)?;
    debug!(
        "vPIC returned {} results: {}",
        response.results.len(),
        response.message
    );

    Ok(response
        .results
        .into_iter()
        .inspect(|r| {
            // "0" means decoded cleanly; anything else still carries usable fields
            if !r.error_code.is_empty() && r.error_code != "0" {
                warn!("VIN {} decoded with errors: {}", r.vin, r.error_text);
            }
        })
        .map(TrailerRecord::from)
        .collect())
}

/// Blocking vPIC client
pub struct VpicClient {
    client: Client,
    api_url: String,
}

impl VpicClient {
    /// Create a client for `api_url`. `timeout` of `None` blocks until the
    /// server answers.
    pub fn new(api_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            api_url: api_url.into(),
        })
    }
}

impl VinDecoder for VpicClient {
    fn decode(&self, vins: &[String]) -> Result<Vec<TrailerRecord>> {
        if vins.is_empty() {
            return Ok(Vec::new());
        }

        let data = vins.join(VIN_DELIMITER);
        debug!("Posting {} VINs to {}", vins.len(), self.api_url);

        let body = self
            .client
            .post(&self.api_url)
            .form(&[("format", "json"), ("data", data.as_str())])
            .send()?
            .error_for_status()?
            .text()?;

        parse_response(&body)
    }
}

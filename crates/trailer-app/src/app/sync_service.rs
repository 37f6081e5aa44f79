//! Sync Service - fetch, filter and store trailer VINs
//!
//! This service orchestrates the complete run:
//! 1. Load VINs from the input CSV
//! 2. Decode them in batches through the VIN decoder
//! 3. Keep only trailer records
//! 4. Insert new trailers into the repository
//! 5. Export the filtered set to the spreadsheet
//!
//! Steps 4 and 5 are skipped when no trailers are found, so neither the
//! database nor the spreadsheet is touched on an empty run.

use chrono::{DateTime, Local};
use std::path::PathBuf;
use tracing::{debug, info};
use trailer_domain::decoder::VinDecoder;
use trailer_domain::model::TrailerRecord;
use trailer_domain::repository::TrailerRepository;
use trailer_domain::service::filter_trailers;
use trailer_infra::vin_csv::load_vins;
use trailer_types::{ConfigError, Result};

use crate::config::Config;
use crate::export::export_to_excel;

/// Options for a sync run
#[derive(Debug, Clone)]
pub struct SyncOptions {
    /// CSV file with a `VIN` column
    pub input_csv: PathBuf,

    /// Spreadsheet output, overwritten on success
    pub spreadsheet_path: PathBuf,

    /// VINs per decode request
    pub batch_size: usize,
}

impl From<&Config> for SyncOptions {
    fn from(config: &Config) -> Self {
        Self {
            input_csv: config.input_csv.clone(),
            spreadsheet_path: config.spreadsheet_path.clone(),
            batch_size: config.batch_size,
        }
    }
}

/// Progress notifications emitted during a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncEvent {
    /// VINs loaded and about to be decoded in `batches` requests
    Loaded { vins: usize, batches: usize },
    /// `done` of `total` decode requests completed
    BatchDecoded { done: usize, total: usize },
}

/// Sync progress callback
pub type ProgressCallback = Box<dyn Fn(SyncEvent) + Send>;

/// Summary of a run that stored trailers
#[derive(Debug, Clone)]
pub struct SyncReport {
    /// VINs read from the input file
    pub vin_count: usize,
    /// Records returned by the decoder
    pub decoded: usize,
    /// Trailer records, in input order
    pub trailers: Vec<TrailerRecord>,
    /// Rows newly inserted (the rest were already stored)
    pub inserted: usize,
    /// Spreadsheet that was written
    pub spreadsheet: PathBuf,
    pub finished_at: DateTime<Local>,
}

/// How a run ended. Every variant is a normal completion.
#[derive(Debug, Clone)]
pub enum SyncOutcome {
    /// The input file had no VINs; nothing was decoded
    NoVins,
    /// Nothing decoded was a trailer; sinks untouched
    NoTrailers { vin_count: usize, decoded: usize },
    /// Trailers stored and exported
    Stored(SyncReport),
}

/// Run the sync pipeline
///
/// `open_repo` is only called once there is something to store.
pub fn sync_trailers<D, R, F>(
    options: &SyncOptions,
    decoder: &D,
    open_repo: F,
    progress: Option<ProgressCallback>,
) -> Result<SyncOutcome>
where
    D: VinDecoder + ?Sized,
    R: TrailerRepository,
    F: FnOnce() -> Result<R>,
{
    let notify = |event: SyncEvent| {
        if let Some(ref cb) = progress {
            cb(event);
        }
    };

    if options.batch_size == 0 {
        return Err(ConfigError::InvalidValue {
            field: "batch_size",
            reason: "must be at least 1".to_string(),
        }
        .into());
    }

    // Step 1: Load VINs
    let vins = load_vins(&options.input_csv)?;
    if vins.is_empty() {
        info!("No VINs in {}", options.input_csv.display());
        return Ok(SyncOutcome::NoVins);
    }

    // Step 2: Decode in batches
    let total = vins.len().div_ceil(options.batch_size);
    notify(SyncEvent::Loaded {
        vins: vins.len(),
        batches: total,
    });

    let mut decoded = Vec::with_capacity(vins.len());
    for (idx, batch) in vins.chunks(options.batch_size).enumerate() {
        debug!("Decoding batch {}/{} ({} VINs)", idx + 1, total, batch.len());
        decoded.extend(decoder.decode(batch)?);
        notify(SyncEvent::BatchDecoded {
            done: idx + 1,
            total,
        });
    }
    let decoded_count = decoded.len();

    // Step 3: Filter
    let trailers = filter_trailers(decoded);
    info!(
        "{} of {} decoded vehicles are trailers",
        trailers.len(),
        decoded_count
    );
    if trailers.is_empty() {
        return Ok(SyncOutcome::NoTrailers {
            vin_count: vins.len(),
            decoded: decoded_count,
        });
    }

    // Step 4: Store
    let repo = open_repo()?;
    let inserted = repo.insert_ignore(&trailers)?;

    // Step 5: Export
    export_to_excel(&trailers, &options.spreadsheet_path)?;
    info!(
        "Exported {} trailers to {}",
        trailers.len(),
        options.spreadsheet_path.display()
    );

    Ok(SyncOutcome::Stored(SyncReport {
        vin_count: vins.len(),
        decoded: decoded_count,
        trailers,
        inserted,
        spreadsheet: options.spreadsheet_path.clone(),
        finished_at: Local::now(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::path::Path;
    use std::sync::{Arc, Mutex};
    use trailer_infra::persistence::SqliteTrailerRepository;
    use trailer_types::Error;

    /// Decoder backed by a fixed VIN -> vehicle type table
    struct FakeDecoder {
        types: HashMap<String, String>,
        calls: RefCell<Vec<Vec<String>>>,
    }

    impl FakeDecoder {
        fn new(entries: &[(&str, &str)]) -> Self {
            Self {
                types: entries
                    .iter()
                    .map(|(vin, ty)| (vin.to_string(), ty.to_string()))
                    .collect(),
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl VinDecoder for FakeDecoder {
        fn decode(&self, vins: &[String]) -> Result<Vec<TrailerRecord>> {
            self.calls.borrow_mut().push(vins.to_vec());
            Ok(vins
                .iter()
                .map(|vin| {
                    let ty = self.types.get(vin).cloned().unwrap_or_default();
                    TrailerRecord::new(vin.as_str(), "MAKE", "MODEL", Some(2001), ty)
                })
                .collect())
        }
    }

    fn write_csv(dir: &Path, vins: &[&str]) -> PathBuf {
        let path = dir.join("vin_list.csv");
        let mut content = String::from("VIN\n");
        for vin in vins {
            content.push_str(vin);
            content.push('\n');
        }
        std::fs::write(&path, content).unwrap();
        path
    }

    fn options(dir: &Path, input_csv: PathBuf, batch_size: usize) -> SyncOptions {
        SyncOptions {
            input_csv,
            spreadsheet_path: dir.join("trailers.xlsx"),
            batch_size,
        }
    }

    #[test]
    fn test_stores_only_trailers() {
        let dir = tempfile::tempdir().unwrap();
        let csv = write_csv(dir.path(), &["1M2AX07Y1WM012345", "1GRAA0620XB000001"]);
        let db = dir.path().join("trailers.db");
        let decoder = FakeDecoder::new(&[
            ("1M2AX07Y1WM012345", "Truck Tractor"),
            ("1GRAA0620XB000001", "Trailer"),
        ]);

        let outcome = sync_trailers(
            &options(dir.path(), csv, 50),
            &decoder,
            || SqliteTrailerRepository::open(&db),
            None,
        )
        .unwrap();

        let report = match outcome {
            SyncOutcome::Stored(report) => report,
            other => panic!("expected Stored, got {:?}", other),
        };
        assert_eq!(report.vin_count, 2);
        assert_eq!(report.decoded, 2);
        assert_eq!(report.inserted, 1);
        assert_eq!(report.trailers.len(), 1);
        assert_eq!(report.trailers[0].vin, "1GRAA0620XB000001");
        assert!(report.spreadsheet.exists());

        let repo = SqliteTrailerRepository::open(&db).unwrap();
        let stored = repo.find_all().unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].vin, "1GRAA0620XB000001");
    }

    #[test]
    fn test_no_vins_skips_decoder() {
        let dir = tempfile::tempdir().unwrap();
        let csv = write_csv(dir.path(), &[]);
        let db = dir.path().join("trailers.db");
        let decoder = FakeDecoder::new(&[]);

        let outcome = sync_trailers(
            &options(dir.path(), csv, 50),
            &decoder,
            || SqliteTrailerRepository::open(&db),
            None,
        )
        .unwrap();

        assert!(matches!(outcome, SyncOutcome::NoVins));
        assert!(decoder.calls.borrow().is_empty());
        assert!(!db.exists());
        assert!(!dir.path().join("trailers.xlsx").exists());
    }

    #[test]
    fn test_no_trailers_leaves_sinks_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let csv = write_csv(dir.path(), &["1M2AX07Y1WM012345", "2HGFC2F59JH000001"]);
        let db = dir.path().join("trailers.db");
        let decoder = FakeDecoder::new(&[
            ("1M2AX07Y1WM012345", "Truck Tractor"),
            ("2HGFC2F59JH000001", "Passenger Car"),
        ]);

        let outcome = sync_trailers(
            &options(dir.path(), csv, 50),
            &decoder,
            || SqliteTrailerRepository::open(&db),
            None,
        )
        .unwrap();

        assert!(matches!(
            outcome,
            SyncOutcome::NoTrailers {
                vin_count: 2,
                decoded: 2
            }
        ));
        assert!(!db.exists());
        assert!(!dir.path().join("trailers.xlsx").exists());
    }

    #[test]
    fn test_decodes_in_batches_and_reports_progress() {
        let dir = tempfile::tempdir().unwrap();
        let csv = write_csv(dir.path(), &["V1", "V2", "V3"]);
        let db = dir.path().join("trailers.db");
        let decoder = FakeDecoder::new(&[("V1", "Trailer"), ("V2", "Truck"), ("V3", "TRAILER")]);

        let events = Arc::new(Mutex::new(Vec::<SyncEvent>::new()));
        let sink = Arc::clone(&events);
        let progress: ProgressCallback = Box::new(move |event: SyncEvent| sink.lock().unwrap().push(event));

        let outcome = sync_trailers(
            &options(dir.path(), csv, 2),
            &decoder,
            || SqliteTrailerRepository::open(&db),
            Some(progress),
        )
        .unwrap();

        assert_eq!(
            *decoder.calls.borrow(),
            vec![
                vec!["V1".to_string(), "V2".to_string()],
                vec!["V3".to_string()]
            ]
        );
        assert_eq!(
            *events.lock().unwrap(),
            vec![
                SyncEvent::Loaded { vins: 3, batches: 2 },
                SyncEvent::BatchDecoded { done: 1, total: 2 },
                SyncEvent::BatchDecoded { done: 2, total: 2 },
            ]
        );

        match outcome {
            SyncOutcome::Stored(report) => {
                let vins: Vec<_> = report.trailers.iter().map(|r| r.vin.as_str()).collect();
                assert_eq!(vins, vec!["V1", "V3"]);
            }
            other => panic!("expected Stored, got {:?}", other),
        }
    }

    #[test]
    fn test_rerun_does_not_duplicate() {
        let dir = tempfile::tempdir().unwrap();
        let csv = write_csv(dir.path(), &["1GRAA0620XB000001"]);
        let db = dir.path().join("trailers.db");
        let decoder = FakeDecoder::new(&[("1GRAA0620XB000001", "Trailer")]);
        let opts = options(dir.path(), csv, 50);

        for expected_inserted in [1, 0] {
            match sync_trailers(&opts, &decoder, || SqliteTrailerRepository::open(&db), None)
                .unwrap()
            {
                SyncOutcome::Stored(report) => assert_eq!(report.inserted, expected_inserted),
                other => panic!("expected Stored, got {:?}", other),
            }
        }

        let repo = SqliteTrailerRepository::open(&db).unwrap();
        assert_eq!(repo.count().unwrap(), 1);
    }

    #[test]
    fn test_missing_input_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let decoder = FakeDecoder::new(&[]);

        let result = sync_trailers(
            &options(dir.path(), dir.path().join("absent.csv"), 50),
            &decoder,
            SqliteTrailerRepository::open_in_memory,
            None,
        );

        assert!(matches!(result, Err(Error::FileNotFound(_))));
    }

    #[test]
    fn test_zero_batch_size_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let csv = write_csv(dir.path(), &["V1"]);
        let decoder = FakeDecoder::new(&[]);

        let result = sync_trailers(
            &options(dir.path(), csv, 0),
            &decoder,
            SqliteTrailerRepository::open_in_memory,
            None,
        );

        assert!(matches!(result, Err(Error::Config(_))));
        assert!(decoder.calls.borrow().is_empty());
    }
}

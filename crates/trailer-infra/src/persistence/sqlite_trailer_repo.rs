//! SQLite implementation of TrailerRepository

use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension, Row};
use tracing::debug;
use trailer_domain::model::TrailerRecord;
use trailer_domain::repository::TrailerRepository;
use trailer_types::{Error, Result};

const CREATE_TABLE: &str = "
    CREATE TABLE IF NOT EXISTS trailers (
        vin TEXT PRIMARY KEY,
        make TEXT,
        model TEXT,
        year INTEGER,
        vehicle_type TEXT
    )";

const INSERT_OR_IGNORE: &str = "INSERT OR IGNORE INTO trailers (vin, make, model, year, vehicle_type) \
     VALUES (?1, ?2, ?3, ?4, ?5)";

const SELECT_COLUMNS: &str = "SELECT vin, make, model, year, vehicle_type FROM trailers";

/// Trailer store in a local SQLite file
///
/// The connection lives as long as the repository and is closed on drop.
pub struct SqliteTrailerRepository {
    conn: Connection,
}

impl SqliteTrailerRepository {
    /// Open (or create) the database file and ensure the table exists
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        debug!("Opening trailer database at {}", path.as_ref().display());
        Self::init(Connection::open(path)?)
    }

    /// Open a private in-memory database
    pub fn open_in_memory() -> Result<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self> {
        conn.execute_batch(CREATE_TABLE)?;
        Ok(Self { conn })
    }
}

fn row_to_record(row: &Row<'_>) -> rusqlite::Result<TrailerRecord> {
    Ok(TrailerRecord {
        vin: row.get(0)?,
        make: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
        model: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
        year: row.get(3)?,
        vehicle_type: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
    })
}

impl TrailerRepository for SqliteTrailerRepository {
    fn insert_ignore(&self, records: &[TrailerRecord]) -> std::result::Result<usize, Error> {
        let tx = self.conn.unchecked_transaction()?;
        let mut inserted = 0;
        {
            let mut stmt = tx.prepare(INSERT_OR_IGNORE)?;
            for record in records {
                inserted += stmt.execute(params![
                    record.vin,
                    record.make,
                    record.model,
                    record.year,
                    record.vehicle_type,
                ])?;
            }
        }
        tx.commit()?;

        debug!(
            "Inserted {} of {} trailers ({} already stored)",
            inserted,
            records.len(),
            records.len() - inserted
        );
        Ok(inserted)
    }

    fn find_by_vin(&self, vin: &str) -> std::result::Result<Option<TrailerRecord>, Error> {
        let sql = format!("{} WHERE vin = ?1", SELECT_COLUMNS);
        let record = self
            .conn
            .query_row(&sql, params![vin], row_to_record)
            .optional()?;
        Ok(record)
    }

    fn find_all(&self) -> std::result::Result<Vec<TrailerRecord>, Error> {
        let sql = format!("{} ORDER BY vin", SELECT_COLUMNS);
        let mut stmt = self.conn.prepare(&sql)?;
        let records = stmt
            .query_map([], row_to_record)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(records)
    }

    fn count(&self) -> std::result::Result<usize, Error> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM trailers", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

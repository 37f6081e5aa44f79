//! Repository adapters for persistence layer

use trailer_infra::persistence::SqliteTrailerRepository;
use trailer_types::Result;

use crate::config::Config;

/// Open the SQLite trailer store named in the config
pub fn open_trailer_repo(config: &Config) -> Result<SqliteTrailerRepository> {
    SqliteTrailerRepository::open(&config.database_path)
}

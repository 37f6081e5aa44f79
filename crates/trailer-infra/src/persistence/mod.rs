//! Persistence implementations
//!
//! SQLite-backed implementation of the trailer repository trait.

mod sqlite_trailer_repo;

pub use sqlite_trailer_repo::SqliteTrailerRepository;

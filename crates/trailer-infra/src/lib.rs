//! Infrastructure layer
//!
//! Concrete implementations of domain interfaces: the CSV input loader, the
//! vPIC HTTP decoder and the SQLite trailer store.

pub mod persistence;
pub mod vin_csv;
pub mod vpic_client;

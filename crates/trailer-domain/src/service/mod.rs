//! Domain services

pub mod trailer_filter;

pub use trailer_filter::{filter_trailers, is_trailer};

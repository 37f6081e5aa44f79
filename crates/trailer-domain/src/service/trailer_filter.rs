//! Trailer classification

use crate::model::TrailerRecord;

const TRAILER_MARKER: &str = "trailer";

/// True when the record's vehicle type mentions "trailer" in any case
pub fn is_trailer(record: &TrailerRecord) -> bool {
    record.vehicle_type.to_lowercase().contains(TRAILER_MARKER)
}

/// Keep only trailer records, preserving input order
pub fn filter_trailers(records: Vec<TrailerRecord>) -> Vec<TrailerRecord> {
    records.into_iter().filter(is_trailer).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(vin: &str, vehicle_type: &str) -> TrailerRecord {
        TrailerRecord::new(vin, "MAKE", "MODEL", Some(2000), vehicle_type)
    }

    #[test]
    fn test_is_trailer_ignores_case() {
        assert!(is_trailer(&record("A", "TRAILER")));
        assert!(is_trailer(&record("A", "Trailer")));
        assert!(is_trailer(&record("A", "trailer")));
    }

    #[test]
    fn test_is_trailer_matches_substring() {
        assert!(is_trailer(&record("A", "Semi-Trailer")));
        assert!(is_trailer(&record("A", "TRAILER / RV")));
        assert!(!is_trailer(&record("A", "Truck Tractor")));
        assert!(!is_trailer(&record("A", "TRUCK")));
        assert!(!is_trailer(&record("A", "")));
        assert!(!is_trailer(&record("A", "trail")));
    }

    #[test]
    fn test_filter_keeps_order() {
        let records = vec![
            record("1", "Trailer"),
            record("2", "Passenger Car"),
            record("3", "Incomplete Vehicle"),
            record("4", "TRAILER"),
            record("5", "Low Speed Vehicle"),
            record("6", "trailer"),
        ];

        let vins: Vec<_> = filter_trailers(records)
            .into_iter()
            .map(|r| r.vin)
            .collect();
        assert_eq!(vins, vec!["1", "4", "6"]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let records = vec![
            record("1", "Trailer"),
            record("2", "Truck Tractor"),
            record("3", "Semi-Trailer"),
        ];

        let once = filter_trailers(records);
        let twice = filter_trailers(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_filter_truck_tractor_and_trailer() {
        let records = vec![
            record("1M2AX07Y1WM012345", "Truck Tractor"),
            record("1GRAA0620XB000001", "Trailer"),
        ];

        let trailers = filter_trailers(records);
        assert_eq!(trailers.len(), 1);
        assert_eq!(trailers[0].vin, "1GRAA0620XB000001");
    }

    #[test]
    fn test_filter_empty() {
        assert!(filter_trailers(Vec::new()).is_empty());
    }

    #[test]
    fn test_record_json_shape() {
        let json = serde_json::to_value(record("1GRAA0620XB000001", "Trailer")).unwrap();
        assert_eq!(json["vin"], "1GRAA0620XB000001");
        assert_eq!(json["year"], 2000);
        assert_eq!(json["vehicle_type"], "Trailer");
    }
}

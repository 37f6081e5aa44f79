//! Output formatting module

use trailer_domain::model::TrailerRecord;
use trailer_types::{OutputFormat, Result};

pub fn output_trailers(
    output_format: OutputFormat,
    trailers: &[TrailerRecord],
    total: usize,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(trailers)?;
        println!("{}", content);
        return Ok(());
    }

    println!("\nStored Trailers");
    println!("===============");
    println!(
        "{:<18} {:<24} {:<20} {:>5}  {}",
        "VIN", "Make", "Model", "Year", "Vehicle Type"
    );
    println!("{}", "-".repeat(84));

    for trailer in trailers {
        let year = trailer
            .year
            .map(|y| y.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<18} {:<24} {:<20} {:>5}  {}",
            trailer.vin,
            truncate(&trailer.make, 24),
            truncate(&trailer.model, 20),
            year,
            trailer.vehicle_type
        );
    }

    println!();
    if trailers.len() < total {
        println!("Showing {} of {} trailers", trailers.len(), total);
    } else {
        println!("{} trailers", total);
    }

    Ok(())
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let head: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", head)
    } else {
        s.to_string()
    }
}

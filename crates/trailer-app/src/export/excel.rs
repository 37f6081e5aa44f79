//! Excel export functionality

use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::path::Path;
use trailer_domain::model::TrailerRecord;
use trailer_types::{Error, Result};

/// Column headers, one per TrailerRecord field
pub const COLUMNS: [&str; 5] = ["vin", "make", "model", "year", "vehicle_type"];

/// Export trailers to an Excel file, replacing any existing file
pub fn export_to_excel(records: &[TrailerRecord], output_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();

    let sheet = workbook.add_worksheet();
    write_trailers_sheet(sheet, records)?;

    workbook
        .save(output_path)
        .map_err(|e| Error::Excel(e.to_string()))?;

    Ok(())
}

fn write_trailers_sheet(sheet: &mut Worksheet, records: &[TrailerRecord]) -> Result<()> {
    sheet
        .set_name("Trailers")
        .map_err(|e| Error::Excel(e.to_string()))?;

    let header_format = Format::new().set_bold();

    for (col, header) in COLUMNS.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *header, &header_format)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    for (row_idx, record) in records.iter().enumerate() {
        let row = (row_idx + 1) as u32;

        sheet
            .write_string(row, 0, &record.vin)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_string(row, 1, &record.make)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_string(row, 2, &record.model)
            .map_err(|e| Error::Excel(e.to_string()))?;

        // Blank cell when the model year is unknown
        if let Some(year) = record.year {
            sheet
                .write_number(row, 3, year as f64)
                .map_err(|e| Error::Excel(e.to_string()))?;
        }

        sheet
            .write_string(row, 4, &record.vehicle_type)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    sheet
        .set_column_width(0, 22)
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .set_column_width(1, 24)
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .set_column_width(2, 20)
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .set_column_width(4, 28)
        .map_err(|e| Error::Excel(e.to_string()))?;

    Ok(())
}

// ============================================================================
// tubescout-core/src/export.rs
// ============================================================================
//
// TABULAR EXPORT: Writes enriched records to a spreadsheet
//
// One header row followed by one row per record, columns in the order of
// `record::COLUMNS`. An existing file at the target path is overwritten. An
// empty record set writes nothing.
//
// KEY COMPONENTS:
// - ExportFormat: xlsx (single worksheet) or csv
// - ExportOutcome: what happened, with the status line to show the user
// - export_records: entry point

use std::fmt;
use std::path::{Path, PathBuf};

use log::info;
use rust_xlsxwriter::{Format, Workbook};

use crate::error::CoreResult;
use crate::record::{COLUMNS, SubscriberCount, VideoRecord};

/// Name of the single worksheet in XLSX output.
pub const SHEET_NAME: &str = "Sheet1";

/// Output table format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Xlsx,
    Csv,
}

impl ExportFormat {
    /// `.csv` (any case) selects CSV; anything else is XLSX.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => Self::Csv,
            _ => Self::Xlsx,
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Xlsx => f.write_str("xlsx"),
            Self::Csv => f.write_str("csv"),
        }
    }
}

/// Result of an export call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// Nothing to write; no file was touched.
    NoData,
    /// `rows` data rows (plus header) were written to `path`.
    Saved { rows: usize, path: PathBuf },
}

impl fmt::Display for ExportOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoData => f.write_str("No data to save."),
            Self::Saved { rows, path } => write!(f, "Saved {rows} results to {}", path.display()),
        }
    }
}

/// Writes `records` to `path` in the given format.
pub fn export_records(records: &[VideoRecord], path: &Path, format: ExportFormat) -> CoreResult<ExportOutcome> {
    if records.is_empty() {
        info!("No records to export; skipping write to {}", path.display());
        return Ok(ExportOutcome::NoData);
    }

    match format {
        ExportFormat::Xlsx => write_xlsx(records, path)?,
        ExportFormat::Csv => write_csv(records, path)?,
    }

    info!("Wrote {} row(s) to {} as {format}", records.len(), path.display());
    Ok(ExportOutcome::Saved {
        rows: records.len(),
        path: path.to_path_buf(),
    })
}

fn write_xlsx(records: &[VideoRecord], path: &Path) -> CoreResult<()> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (col, name) in COLUMNS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *name, &header)?;
    }

    for (index, record) in records.iter().enumerate() {
        let row = index as u32 + 1;
        worksheet.write_string(row, 0, record.channel.as_str())?;
        match &record.subscribers {
            SubscriberCount::Count(count) => worksheet.write_number(row, 1, *count as f64)?,
            other => worksheet.write_string(row, 1, other.to_string())?,
        };
        worksheet.write_string(row, 2, record.title.as_str())?;
        worksheet.write_string(row, 3, record.url.as_str())?;
        worksheet.write_number(row, 4, record.views as f64)?;
        worksheet.write_number(row, 5, record.likes as f64)?;
        worksheet.write_number(row, 6, record.comments as f64)?;
        worksheet.write_number(row, 7, record.engagement_rate)?;
        worksheet.write_number(row, 8, record.views_per_day)?;
        worksheet.write_string(row, 9, record.published_at.as_str())?;
        worksheet.write_string(row, 10, record.duration.as_str())?;
        worksheet.write_string(row, 11, record.category.as_str())?;
        worksheet.write_string(row, 12, record.hashtags.as_str())?;
        worksheet.write_string(row, 13, record.description.as_str())?;
    }

    workbook.save(path)?;
    Ok(())
}

/// Rates keep a decimal point in text output, so `100.0` is not shown as `100`.
fn decimal_text(value: f64) -> String {
    format!("{value:?}")
}

fn write_csv(records: &[VideoRecord], path: &Path) -> CoreResult<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(COLUMNS)?;

    for record in records {
        writer.write_record([
            record.channel.clone(),
            record.subscribers.to_string(),
            record.title.clone(),
            record.url.clone(),
            record.views.to_string(),
            record.likes.to_string(),
            record.comments.to_string(),
            decimal_text(record.engagement_rate),
            decimal_text(record.views_per_day),
            record.published_at.clone(),
            record.duration.clone(),
            record.category.clone(),
            record.hashtags.clone(),
            record.description.clone(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

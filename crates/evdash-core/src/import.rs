//! Spreadsheet import.
//!
//! Reads the first sheet of a `.csv`, `.xlsx`, or `.xls` file and maps each
//! row onto an [`Event`] through a fixed set of column headers. Missing
//! columns leave the field empty. Comma-separated list columns come in an
//! English and an Arabic variant; the two are paired up by position.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use calamine::{Data, Reader, open_workbook_auto};

use crate::i18n::LocalizedText;
use crate::model::{Event, Session, Topic};

/// Column headers for a bilingual field.
#[derive(Debug, Clone, Copy)]
pub struct ColumnPair {
    pub en: &'static str,
    pub ar: &'static str,
}

impl ColumnPair {
    const fn new(en: &'static str, ar: &'static str) -> Self {
        Self { en, ar }
    }
}

pub mod columns {
    use super::ColumnPair;

    pub const EVENT_NAME: ColumnPair = ColumnPair::new("Event Name English", "Event Name Arabic");
    pub const CITY: ColumnPair = ColumnPair::new("City English", "City Arabic");
    pub const COUNTRY: ColumnPair = ColumnPair::new("Country English", "Country Arabic");
    pub const VENUE: ColumnPair = ColumnPair::new("Venue English", "Venue Arabic");
    pub const REGION: ColumnPair = ColumnPair::new("Region English", "Region Arabic");
    pub const EVENT_TYPE: ColumnPair = ColumnPair::new("Event Type English", "Event Type Arabic");
    pub const MAIN_SECTORS: ColumnPair =
        ColumnPair::new("Main Sectors English", "Main Sectors Arabic");
    pub const FEATURED_SESSIONS: ColumnPair =
        ColumnPair::new("Featured Sessions English", "Featured Sessions Arabic");
    pub const MAJOR_TOPICS: ColumnPair =
        ColumnPair::new("Major Topics English", "Major Topics Arabic");
    pub const GOVERNMENT_ENDORSEMENTS: ColumnPair = ColumnPair::new(
        "Government Endorsements English",
        "Government Endorsements Arabic",
    );
    pub const START_DATE: &str = "Start Date";
    pub const END_DATE: &str = "End Date";

    /// Headers a useful sheet is expected to carry.
    pub const REQUIRED: &[&str] = &[EVENT_NAME.en, CITY.en];
}

/// Input format, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpreadsheetFormat {
    Csv,
    Xlsx,
    Xls,
}

impl SpreadsheetFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "csv" => Ok(SpreadsheetFormat::Csv),
            "xlsx" => Ok(SpreadsheetFormat::Xlsx),
            "xls" => Ok(SpreadsheetFormat::Xls),
            _ => anyhow::bail!(
                "Unsupported file type for {} (expected .csv, .xlsx, or .xls)",
                path.display()
            ),
        }
    }
}

impl fmt::Display for SpreadsheetFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SpreadsheetFormat::Csv => "csv",
            SpreadsheetFormat::Xlsx => "xlsx",
            SpreadsheetFormat::Xls => "xls",
        })
    }
}

/// One data row keyed by normalized header.
#[derive(Debug, Clone, Default)]
pub struct SheetRow {
    cells: HashMap<String, String>,
}

impl SheetRow {
    fn from_cells(headers: &[String], values: impl IntoIterator<Item = String>) -> Self {
        let cells = headers
            .iter()
            .zip(values)
            .filter(|(header, _)| !header.is_empty())
            .map(|(header, value)| (header.clone(), value.trim().to_string()))
            .collect();
        Self { cells }
    }

    /// Cell text for a header (case-insensitive), empty if the column is absent.
    pub fn get(&self, header: &str) -> &str {
        self.cells
            .get(&normalize_header(header))
            .map_or("", String::as_str)
    }

    fn pair(&self, columns: ColumnPair) -> LocalizedText {
        LocalizedText::new(self.get(columns.en), self.get(columns.ar))
    }

    fn is_blank(&self) -> bool {
        self.cells.values().all(|v| v.is_empty())
    }
}

/// Result of parsing one spreadsheet.
#[derive(Debug, Clone)]
pub struct ImportBatch {
    pub source: PathBuf,
    pub format: SpreadsheetFormat,
    pub events: Vec<Event>,
    /// Rows dropped because every cell was empty.
    pub skipped_rows: usize,
    /// Entries of [`columns::REQUIRED`] not present in the header row.
    pub missing_headers: Vec<&'static str>,
}

impl ImportBatch {
    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Parses a spreadsheet into events without touching the store.
pub fn import_file(path: &Path) -> Result<ImportBatch> {
    let format = SpreadsheetFormat::from_path(path)?;
    let (headers, rows) = match format {
        SpreadsheetFormat::Csv => read_csv(path)?,
        SpreadsheetFormat::Xlsx | SpreadsheetFormat::Xls => read_workbook(path)?,
    };

    let missing_headers: Vec<&'static str> = columns::REQUIRED
        .iter()
        .copied()
        .filter(|required| !headers.contains(&normalize_header(required)))
        .collect();
    if !missing_headers.is_empty() {
        tracing::warn!(?missing_headers, path = %path.display(), "spreadsheet lacks expected headers");
    }

    let total = rows.len();
    let events: Vec<Event> = rows
        .iter()
        .filter(|row| !row.is_blank())
        .map(row_to_event)
        .collect();
    let skipped_rows = total - events.len();

    tracing::info!(
        path = %path.display(),
        %format,
        rows = total,
        events = events.len(),
        skipped_rows,
        "parsed spreadsheet"
    );

    Ok(ImportBatch {
        source: path.to_path_buf(),
        format,
        events,
        skipped_rows,
        missing_headers,
    })
}

/// Maps one row onto the event shape used by bundled records.
pub fn row_to_event(row: &SheetRow) -> Event {
    Event {
        event_name: row.pair(columns::EVENT_NAME),
        city: row.pair(columns::CITY),
        country: row.pair(columns::COUNTRY),
        venue: row.pair(columns::VENUE),
        region: row.pair(columns::REGION),
        event_type: row.pair(columns::EVENT_TYPE),
        start_date: non_blank(row.get(columns::START_DATE)),
        end_date: non_blank(row.get(columns::END_DATE)),
        main_sectors: paired_list(row, columns::MAIN_SECTORS),
        featured_sessions: paired_list(row, columns::FEATURED_SESSIONS)
            .into_iter()
            .map(|title| Session {
                title,
                description: LocalizedText::default(),
            })
            .collect(),
        major_topics: paired_list(row, columns::MAJOR_TOPICS)
            .into_iter()
            .map(|name| Topic {
                name,
                ..Topic::default()
            })
            .collect(),
        government_endorsements: row.pair(columns::GOVERNMENT_ENDORSEMENTS),
        ..Event::default()
    }
}

/// Turns typed or pasted path text into a path.
///
/// Strips surrounding whitespace and matching quotes (terminals quote dropped
/// files) and expands a leading `~`. Returns `None` for blank input.
pub fn resolve_input_path(input: &str) -> Option<PathBuf> {
    let mut text = input.trim();
    for quote in ['"', '\''] {
        if text.len() >= 2 && text.starts_with(quote) && text.ends_with(quote) {
            text = text[1..text.len() - 1].trim();
        }
    }
    if text.is_empty() {
        return None;
    }
    if let Some(rest) = text.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return Some(home.join(rest));
    }
    Some(PathBuf::from(text))
}

/// Splits a comma list, trimming entries and dropping empty ones.
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Pairs the English and Arabic lists by position; the shorter side pads with "".
fn paired_list(row: &SheetRow, columns: ColumnPair) -> Vec<LocalizedText> {
    let mut en = split_list(row.get(columns.en)).into_iter();
    let mut ar = split_list(row.get(columns.ar)).into_iter();
    let mut out = Vec::new();
    loop {
        match (en.next(), ar.next()) {
            (None, None) => break,
            (en, ar) => out.push(LocalizedText::new(
                en.unwrap_or_default(),
                ar.unwrap_or_default(),
            )),
        }
    }
    out
}

fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn normalize_header(header: &str) -> String {
    header.trim().to_lowercase()
}

fn read_csv(path: &Path) -> Result<(Vec<String>, Vec<SheetRow>)> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;

    let headers: Vec<String> = reader
        .headers()
        .with_context(|| format!("Failed to read header row from {}", path.display()))?
        .iter()
        .map(normalize_header)
        .collect();

    let mut rows = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record
            .with_context(|| format!("Failed to read row {} of {}", index + 2, path.display()))?;
        rows.push(SheetRow::from_cells(
            &headers,
            record.iter().map(str::to_string),
        ));
    }
    Ok((headers, rows))
}

fn read_workbook(path: &Path) -> Result<(Vec<String>, Vec<SheetRow>)> {
    let mut workbook = open_workbook_auto(path)
        .with_context(|| format!("Failed to open workbook {}", path.display()))?;

    let Some(sheet_name) = workbook.sheet_names().first().cloned() else {
        anyhow::bail!("No sheets found in {}", path.display());
    };
    let range = workbook
        .worksheet_range(&sheet_name)
        .with_context(|| format!("Failed to read sheet '{sheet_name}' of {}", path.display()))?;

    let mut sheet_rows = range.rows();
    let Some(header_row) = sheet_rows.next() else {
        return Ok((Vec::new(), Vec::new()));
    };
    let headers: Vec<String> = header_row
        .iter()
        .map(|cell| normalize_header(&cell_text(cell)))
        .collect();

    let rows = sheet_rows
        .map(|cells| SheetRow::from_cells(&headers, cells.iter().map(cell_text)))
        .collect();
    Ok((headers, rows))
}

/// Renders a workbook cell the way it would read in a CSV export.
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Float(f) if f.fract().abs() < f64::EPSILON && f.abs() < 1e15 => {
            format!("{}", *f as i64)
        }
        Data::DateTime(dt) => dt.as_datetime().map_or_else(
            || cell.to_string(),
            |datetime| datetime.date().format("%Y-%m-%d").to_string(),
        ),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use rust_xlsxwriter::{ExcelDateTime, Format, Workbook};
    use tempfile::tempdir;

    use super::*;
    use crate::i18n::Language;

    const HEADER: &str = "Event Name English,Event Name Arabic,City English,City Arabic,Start Date,End Date,Event Type English,Event Type Arabic,Major Topics English,Major Topics Arabic,Region English,Region Arabic";

    fn write_csv(dir: &Path, name: &str, body: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn test_csv_rows_map_to_events() {
        let dir = tempdir().unwrap();
        let path = write_csv(
            dir.path(),
            "events.csv",
            &format!(
                "{HEADER}\nTech Expo,معرض التقنية,Doha,الدوحة,2026-05-01,2026-05-03,Exhibition,معرض,\"AI, Cloud ,\",\"الذكاء الاصطناعي, السحابة\",Middle East,الشرق الأوسط\n"
            ),
        );

        let batch = import_file(&path).unwrap();
        assert_eq!(batch.format, SpreadsheetFormat::Csv);
        assert_eq!(batch.len(), 1);
        assert!(batch.missing_headers.is_empty());

        let event = &batch.events[0];
        assert_eq!(event.name(Language::Ar), "معرض التقنية");
        assert_eq!(event.city.get(Language::En), "Doha");
        assert_eq!(event.start_date.as_deref(), Some("2026-05-01"));
        assert_eq!(event.event_type.get(Language::Ar), "معرض");
        assert_eq!(event.region.get(Language::En), "Middle East");
        assert_eq!(event.major_topics.len(), 2);
        assert_eq!(event.major_topics[1].name.get(Language::En), "Cloud");
        assert_eq!(event.major_topics[1].name.get(Language::Ar), "السحابة");
    }

    #[test]
    fn test_absent_columns_default_to_empty() {
        let dir = tempdir().unwrap();
        let path = write_csv(dir.path(), "minimal.csv", "Event Name English\nSolo\n");

        let batch = import_file(&path).unwrap();
        let event = &batch.events[0];
        assert_eq!(event.name(Language::En), "Solo");
        assert_eq!(event.event_name.get(Language::Ar), "");
        assert!(event.city.is_blank());
        assert!(event.start_date.is_none());
        assert!(event.main_sectors.is_empty());
        assert!(event.featured_sessions.is_empty());
        assert_eq!(batch.missing_headers, vec!["City English"]);
    }

    #[test]
    fn test_blank_rows_are_skipped() {
        let dir = tempdir().unwrap();
        let path = write_csv(
            dir.path(),
            "gaps.csv",
            "Event Name English,City English\nA,X\n,\nB,Y\n",
        );

        let batch = import_file(&path).unwrap();
        assert_eq!(batch.len(), 2);
        assert_eq!(batch.skipped_rows, 1);
    }

    #[test]
    fn test_headers_match_case_insensitively() {
        let dir = tempdir().unwrap();
        let path = write_csv(dir.path(), "case.CSV", " event name english ,CITY ENGLISH\nA,B\n");

        let batch = import_file(&path).unwrap();
        assert_eq!(batch.events[0].name(Language::En), "A");
        assert_eq!(batch.events[0].city.get(Language::En), "B");
    }

    /// Two sheets: the events first, then an archive that must be ignored.
    fn write_workbook(path: &Path) {
        let mut workbook = Workbook::new();
        let date = Format::new().set_num_format("yyyy-mm-dd");

        let events = workbook.add_worksheet();
        events.set_name("Events").unwrap();
        let headers = [
            "Event Name English",
            "Event Name Arabic",
            "City English",
            "Start Date",
            "End Date",
        ];
        for (col, header) in (0u16..).zip(headers) {
            events.write_string(0, col, header).unwrap();
        }
        events.write_string(1, 0, "Gulf Expo").unwrap();
        events.write_string(1, 1, "معرض الخليج").unwrap();
        events.write_string(1, 2, "Muscat").unwrap();
        let start = ExcelDateTime::from_ymd(2026, 2, 10).unwrap();
        let end = ExcelDateTime::from_ymd(2026, 2, 12).unwrap();
        events.write_datetime_with_format(1, 3, &start, &date).unwrap();
        events.write_datetime_with_format(1, 4, &end, &date).unwrap();

        let archive = workbook.add_worksheet();
        archive.set_name("Archive").unwrap();
        archive.write_string(0, 0, "Event Name English").unwrap();
        archive.write_string(1, 0, "Old Expo").unwrap();

        workbook.save(path).unwrap();
    }

    #[test]
    fn test_xlsx_reads_first_sheet_with_header_row() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("events.xlsx");
        write_workbook(&path);

        let batch = import_file(&path).unwrap();
        assert_eq!(batch.format, SpreadsheetFormat::Xlsx);
        assert_eq!(batch.len(), 1);
        assert!(batch.missing_headers.is_empty());

        let event = &batch.events[0];
        assert_eq!(event.name(Language::En), "Gulf Expo");
        assert_eq!(event.name(Language::Ar), "معرض الخليج");
        assert_eq!(event.city.get(Language::En), "Muscat");
        assert_eq!(event.start_date.as_deref(), Some("2026-02-10"));
        assert_eq!(event.end_date.as_deref(), Some("2026-02-12"));
        assert!(batch.events.iter().all(|e| e.name(Language::En) != "Old Expo"));
    }

    #[test]
    fn test_unsupported_extension_is_rejected() {
        let err = import_file(Path::new("events.json")).unwrap_err();
        assert!(err.to_string().contains("Unsupported file type"));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let dir = tempdir().unwrap();
        let err = import_file(&dir.path().join("absent.xlsx")).unwrap_err();
        assert!(format!("{err:#}").contains("absent.xlsx"));
    }

    #[test]
    fn test_resolve_input_path_strips_quotes() {
        assert_eq!(
            resolve_input_path("  '/tmp/my events.csv' "),
            Some(PathBuf::from("/tmp/my events.csv"))
        );
        assert_eq!(
            resolve_input_path("\"/tmp/a.xlsx\""),
            Some(PathBuf::from("/tmp/a.xlsx"))
        );
        assert_eq!(resolve_input_path("   "), None);
        assert_eq!(resolve_input_path("\"\""), None);
    }

    #[test]
    fn test_split_list_trims_and_drops_empty() {
        assert_eq!(split_list(" a, b ,,c ,"), ["a", "b", "c"]);
        assert!(split_list("").is_empty());
    }

    #[test]
    fn test_paired_list_pads_shorter_side() {
        let headers = vec![
            normalize_header(columns::MAIN_SECTORS.en),
            normalize_header(columns::MAIN_SECTORS.ar),
        ];
        let row = SheetRow::from_cells(
            &headers,
            ["Energy, Water".to_string(), "الطاقة".to_string()],
        );
        let sectors = paired_list(&row, columns::MAIN_SECTORS);
        assert_eq!(sectors.len(), 2);
        assert_eq!(sectors[1].get(Language::En), "Water");
        assert_eq!(sectors[1].get(Language::Ar), "");
    }

    #[test]
    fn test_workbook_cells_render_as_text() {
        assert_eq!(cell_text(&Data::Float(2026.0)), "2026");
        assert_eq!(cell_text(&Data::Float(1.5)), "1.5");
        assert_eq!(cell_text(&Data::Int(42)), "42");
        assert_eq!(cell_text(&Data::String("x".into())), "x");
        assert_eq!(cell_text(&Data::Empty), "");
    }
}

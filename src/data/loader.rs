// ============================================================
// Layer 4 — Record Loaders
// ============================================================
// Reads abalone rows from disk into typed AbaloneRecords.
//
//   JsonRecordLoader → data/abalone.json  (array of objects)
//   CsvRecordLoader  → data/abalone.csv   (header row + rows)
//
// Columns are matched by header name through serde, so
// column order in the file does not matter.
//
// A malformed row aborts the whole load. The error names the
// file and, for CSV, the row number.

use anyhow::{Context, Result};
use std::{fs, io::Read, path::Path};

use crate::domain::record::AbaloneRecord;
use crate::domain::traits::RecordSource;

// ─── JSON ─────────────────────────────────────────────────────────────────────
/// Loads a JSON array of abalone records.
pub struct JsonRecordLoader {
    path: String,
}

impl JsonRecordLoader {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordSource for JsonRecordLoader {
    fn load_all(&self) -> Result<Vec<AbaloneRecord>> {
        let text = fs::read_to_string(&self.path)
            .with_context(|| format!("Cannot read JSON dataset '{}'", self.path))?;

        let records = parse_json(&text)
            .with_context(|| format!("Malformed JSON dataset '{}'", self.path))?;

        tracing::info!("Loaded {} records from '{}'", records.len(), self.path);
        Ok(records)
    }
}

/// Parse a JSON array of records from a string.
pub fn parse_json(text: &str) -> Result<Vec<AbaloneRecord>> {
    Ok(serde_json::from_str(text)?)
}

// ─── CSV ──────────────────────────────────────────────────────────────────────
/// Loads abalone records from a CSV file with a header row.
pub struct CsvRecordLoader {
    path: String,
}

impl CsvRecordLoader {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordSource for CsvRecordLoader {
    fn load_all(&self) -> Result<Vec<AbaloneRecord>> {
        let path = Path::new(&self.path);
        let file = fs::File::open(path)
            .with_context(|| format!("Cannot open CSV dataset '{}'", self.path))?;

        let records = read_csv(file)
            .with_context(|| format!("Malformed CSV dataset '{}'", self.path))?;

        tracing::info!("Loaded {} records from '{}'", records.len(), self.path);
        Ok(records)
    }
}

/// Deserialize every CSV row from `reader`.
/// The first line must be a header naming the record fields.
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<AbaloneRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    tracing::debug!("CSV header: {} columns {:?}", headers.len(), headers);

    let mut records = Vec::new();
    for (i, row) in rdr.deserialize::<AbaloneRecord>().enumerate() {
        // +2: one for the header line, one for 1-based numbering
        let record = row.with_context(|| format!("Bad CSV row at line {}", i + 2))?;
        records.push(record);
    }

    Ok(records)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::Sex;

    const CSV_SNAKE: &str = "\
sex,length,diameter,height,whole_weight,shucked_weight,viscera_weight,shell_weight,rings
F,0.53,0.42,0.135,0.677,0.2565,0.1415,0.21,9
M,0.44,0.365,0.125,0.516,0.2155,0.114,0.155,10
I,0.33,0.255,0.08,0.205,0.0895,0.0395,0.055,7
";

    #[test]
    fn test_csv_reads_all_rows() {
        let records = read_csv(CSV_SNAKE.as_bytes()).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].sex, Sex::Female);
        assert_eq!(records[1].rings, 10);
        assert_eq!(records[2].sex, Sex::Infant);
    }

    #[test]
    fn test_csv_accepts_kebab_headers_in_any_order() {
        let csv = "\
rings,shell-weight,viscera-weight,shucked-weight,whole-weight,height,diameter,length,sex
9,0.21,0.1415,0.2565,0.677,0.135,0.42,0.53,F
";
        let records = read_csv(csv.as_bytes()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].rings, 9);
        assert_eq!(records[0].sex, Sex::Female);
        assert!((records[0].length - 0.53).abs() < 1e-6);
    }

    #[test]
    fn test_csv_bad_row_is_an_error() {
        let csv = "\
sex,length,diameter,height,whole_weight,shucked_weight,viscera_weight,shell_weight,rings
F,0.53,0.42,0.135,0.677,0.2565,0.1415,0.21,nine
";
        let err = read_csv(csv.as_bytes()).unwrap_err();
        assert!(format!("{err:#}").contains("line 2"));
    }

    #[test]
    fn test_json_array() {
        let json = r#"[
            {"sex":"M","length":0.455,"diameter":0.365,"height":0.095,
             "whole_weight":0.514,"shucked_weight":0.2245,"viscera_weight":0.101,
             "shell_weight":0.15,"rings":15},
            {"sex":"X","length":0.35,"diameter":0.265,"height":0.09,
             "whole_weight":0.2255,"shucked_weight":0.0995,"viscera_weight":0.0485,
             "shell_weight":0.07,"rings":7}
        ]"#;
        let records = parse_json(json).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].rings, 15);
        assert_eq!(records[1].sex, Sex::Other("X".to_string()));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let loader = JsonRecordLoader::new("definitely/not/here.json");
        assert!(loader.load_all().is_err());

        let loader = CsvRecordLoader::new("definitely/not/here.csv");
        assert!(loader.load_all().is_err());
    }
}

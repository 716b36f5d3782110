//! # Worksheets
//!
//! A worksheet is a labelled list of calculations stored as JSON, evaluated
//! in one batch. Every item is evaluated even when earlier items fail; the
//! report records each outcome.
//!
//! ## File Format
//!
//! ```json
//! {
//!   "meta": { "version": "0.1.0", "title": "Trip planning", "created": "2024-06-01T09:00:00Z" },
//!   "items": [
//!     { "label": "Flight distance",
//!       "calculation": { "type": "GreatCircle", "lat1": 51.47, "lon1": -0.4543, "lat2": 40.6413, "lon2": -73.7781 } }
//!   ]
//! }
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use calc_core::worksheet::{evaluate_worksheet, load_worksheet, save_report};
//! use std::path::Path;
//!
//! let worksheet = load_worksheet(Path::new("trip.json"))?;
//! let report = evaluate_worksheet(&worksheet);
//! save_report(&report, Path::new("trip.report.json"))?;
//! # Ok::<(), calc_core::errors::CalcError>(())
//! ```

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::calculations::{CalculationItem, CalculationOutput};
use crate::errors::{CalcError, CalcResult};

/// Current schema version for worksheet files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Root worksheet container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Worksheet {
    pub meta: WorksheetMeta,
    /// Evaluated in order
    #[serde(default)]
    pub items: Vec<WorksheetItem>,
}

/// Worksheet metadata stored in the file header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorksheetMeta {
    /// Schema version (for migration compatibility)
    pub version: String,
    #[serde(default)]
    pub title: String,
    pub created: DateTime<Utc>,
}

/// One labelled calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorksheetItem {
    pub label: String,
    pub calculation: CalculationItem,
}

impl Worksheet {
    /// Create an empty worksheet stamped with the current time.
    pub fn new(title: impl Into<String>) -> Self {
        Worksheet {
            meta: WorksheetMeta {
                version: SCHEMA_VERSION.to_string(),
                title: title.into(),
                created: Utc::now(),
            },
            items: Vec::new(),
        }
    }

    /// Append a labelled calculation.
    pub fn push(&mut self, label: impl Into<String>, calculation: CalculationItem) {
        self.items.push(WorksheetItem {
            label: label.into(),
            calculation,
        });
    }
}

/// Outcome of one worksheet item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ItemOutcome {
    Ok { output: CalculationOutput },
    Error { error: CalcError },
}

/// Report line for one worksheet item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportEntry {
    pub label: String,
    pub calc_type: String,
    pub outcome: ItemOutcome,
}

/// Results of evaluating a whole worksheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorksheetReport {
    pub title: String,
    pub evaluated_at: DateTime<Utc>,
    pub succeeded: usize,
    pub failed: usize,
    pub entries: Vec<ReportEntry>,
}

impl WorksheetReport {
    pub fn all_succeeded(&self) -> bool {
        self.failed == 0
    }
}

/// Evaluate every item, collecting successes and failures alike.
pub fn evaluate_worksheet(worksheet: &Worksheet) -> WorksheetReport {
    debug!(title = %worksheet.meta.title, items = worksheet.items.len(), "evaluating worksheet");

    let entries: Vec<ReportEntry> = worksheet
        .items
        .iter()
        .map(|item| {
            let calc_type = item.calculation.calc_type();
            let outcome = match item.calculation.evaluate() {
                Ok(output) => ItemOutcome::Ok { output },
                Err(error) => {
                    warn!(label = %item.label, calc_type, code = error.error_code(), %error, "worksheet item rejected");
                    ItemOutcome::Error { error }
                }
            };
            ReportEntry {
                label: item.label.clone(),
                calc_type: calc_type.to_string(),
                outcome,
            }
        })
        .collect();

    let failed = entries
        .iter()
        .filter(|e| matches!(e.outcome, ItemOutcome::Error { .. }))
        .count();
    info!(succeeded = entries.len() - failed, failed, "worksheet evaluated");

    WorksheetReport {
        title: worksheet.meta.title.clone(),
        evaluated_at: Utc::now(),
        succeeded: entries.len() - failed,
        failed,
        entries,
    }
}

/// Load a worksheet from a JSON file.
///
/// # Returns
///
/// * `Ok(Worksheet)` - Successfully loaded worksheet
/// * `Err(CalcError::VersionMismatch)` - File version is incompatible
/// * `Err(CalcError::SerializationError)` - Invalid JSON
/// * `Err(CalcError::FileError)` - I/O error
pub fn load_worksheet(path: &Path) -> CalcResult<Worksheet> {
    let mut file = File::open(path).map_err(|e| CalcError::file_error("open", path.display().to_string(), e.to_string()))?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;

    let worksheet = parse_worksheet(&contents)
        .map_err(|e| match e {
            CalcError::SerializationError { reason } => CalcError::SerializationError {
                reason: format!("Invalid JSON in {}: {}", path.display(), reason),
            },
            other => other,
        })?;
    debug!(path = %path.display(), items = worksheet.items.len(), "worksheet loaded");
    Ok(worksheet)
}

/// Parse worksheet JSON and check its schema version.
pub fn parse_worksheet(json: &str) -> CalcResult<Worksheet> {
    let worksheet: Worksheet = serde_json::from_str(json).map_err(|e| CalcError::SerializationError {
        reason: e.to_string(),
    })?;
    validate_version(&worksheet.meta.version)?;
    Ok(worksheet)
}

/// Save a worksheet with atomic write semantics.
pub fn save_worksheet(worksheet: &Worksheet, path: &Path) -> CalcResult<()> {
    write_json_atomic(worksheet, path)
}

/// Save an evaluation report with atomic write semantics.
pub fn save_report(report: &WorksheetReport, path: &Path) -> CalcResult<()> {
    write_json_atomic(report, path)
}

/// Serialize, write to a `.tmp` sibling, fsync, verify the size on disk, then
/// rename over `path`.
fn write_json_atomic<T: Serialize>(value: &T, path: &Path) -> CalcResult<()> {
    let json = serde_json::to_string_pretty(value).map_err(|e| CalcError::SerializationError {
        reason: e.to_string(),
    })?;

    let mut tmp_name = path.as_os_str().to_owned();
    tmp_name.push(".tmp");
    let tmp_path = Path::new(&tmp_name);

    let mut tmp_file = File::create(tmp_path)
        .map_err(|e| CalcError::file_error("create temp file", tmp_path.display().to_string(), e.to_string()))?;

    tmp_file
        .write_all(json.as_bytes())
        .map_err(|e| CalcError::file_error("write temp file", tmp_path.display().to_string(), e.to_string()))?;

    tmp_file
        .sync_all()
        .map_err(|e| CalcError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string()))?;
    drop(tmp_file);

    let written = fs::metadata(tmp_path)
        .map_err(|e| CalcError::file_error("verify temp file", tmp_path.display().to_string(), e.to_string()))?
        .len();
    if written != json.len() as u64 {
        let _ = fs::remove_file(tmp_path);
        return Err(CalcError::file_error(
            "verify temp file",
            tmp_path.display().to_string(),
            format!("wrote {} of {} bytes", written, json.len()),
        ));
    }

    fs::rename(tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(tmp_path);
        CalcError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    debug!(path = %path.display(), bytes = json.len(), "saved");
    Ok(())
}

/// Validate that a file version is compatible with the current schema.
fn validate_version(file_version: &str) -> CalcResult<()> {
    let mismatch = || CalcError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };

    let major = |v: &str| v.split('.').next().and_then(|p| p.trim().parse::<u32>().ok());
    match (major(file_version), major(SCHEMA_VERSION)) {
        (Some(file_major), Some(current_major)) if file_major == current_major => Ok(()),
        _ => Err(mismatch()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::special::BesselKind;
    use crate::calculations::{BesselInput, DoublingTimeInput, SaleDiscountInput};
    use std::env::temp_dir;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        temp_dir().join(format!("reckon_test_{}_{}.json", name, std::process::id()))
    }

    fn sample() -> Worksheet {
        let mut worksheet = Worksheet::new("Sample");
        worksheet.push(
            "Jacket",
            CalculationItem::SaleDiscount(SaleDiscountInput {
                original_price: 120.0,
                sale_price: 90.0,
            }),
        );
        worksheet.push("Bad rate", CalculationItem::DoublingTime(DoublingTimeInput { rate_percent: -1.0 }));
        worksheet
    }

    #[test]
    fn test_evaluate_continues_past_failures() {
        let report = evaluate_worksheet(&sample());
        assert_eq!(report.entries.len(), 2);
        assert_eq!((report.succeeded, report.failed), (1, 1));
        assert!(!report.all_succeeded());
        assert!(matches!(report.entries[0].outcome, ItemOutcome::Ok { .. }));
        match &report.entries[1].outcome {
            ItemOutcome::Error { error } => assert_eq!(error.field(), Some("rate_percent")),
            other => panic!("expected error, got {:?}", other),
        }
        assert_eq!(report.entries[1].calc_type, "DoublingTime");
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = temp_path("roundtrip");
        let worksheet = sample();
        save_worksheet(&worksheet, &path).unwrap();

        let loaded = load_worksheet(&path).unwrap();
        assert_eq!(loaded, worksheet);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_atomic_save_leaves_no_tmp_file() {
        let path = temp_path("atomic");
        let report = evaluate_worksheet(&sample());
        save_report(&report, &path).unwrap();

        let mut tmp = path.as_os_str().to_owned();
        tmp.push(".tmp");
        assert!(!Path::new(&tmp).exists());
        let saved: WorksheetReport = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(saved, report);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_report_with_singular_value_reloads() {
        let mut worksheet = Worksheet::new("Special functions");
        worksheet.push(
            "Y0 at origin",
            CalculationItem::Bessel(BesselInput {
                kind: BesselKind::Y,
                order: 0,
                x: 0.0,
            }),
        );
        let report = evaluate_worksheet(&worksheet);
        assert!(report.all_succeeded());

        let path = temp_path("singular");
        save_report(&report, &path).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains(r#""value": "-inf""#), "{}", text);

        let saved: WorksheetReport = serde_json::from_str(&text).unwrap();
        match &saved.entries[0].outcome {
            ItemOutcome::Ok {
                output: CalculationOutput::Bessel(result),
            } => {
                assert!(result.singular);
                assert_eq!(result.value, f64::NEG_INFINITY);
            }
            other => panic!("expected a Bessel result, got {:?}", other),
        }

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_parse_handwritten_worksheet() {
        let json = r#"{
            "meta": { "version": "0.3.1", "created": "2024-06-01T09:00:00Z" },
            "items": [
                { "label": "Trip", "calculation": { "type": "TravelDays", "start": "2024-07-01", "end": "2024-07-03" } }
            ]
        }"#;
        let worksheet = parse_worksheet(json).unwrap();
        assert_eq!(worksheet.meta.title, "");
        assert_eq!(worksheet.items[0].calculation.calc_type(), "TravelDays");
    }

    #[test]
    fn test_version_validation() {
        assert!(validate_version(SCHEMA_VERSION).is_ok());
        assert!(validate_version("0.9.2").is_ok());
        assert!(validate_version("1.0.0").is_err());
        assert!(validate_version("garbage").is_err());
    }

    #[test]
    fn test_load_errors() {
        let missing = load_worksheet(Path::new("/nonexistent/reckon/worksheet.json")).unwrap_err();
        assert_eq!(missing.error_code(), "FILE_ERROR");

        let path = temp_path("invalid");
        fs::write(&path, "{ not json").unwrap();
        assert_eq!(load_worksheet(&path).unwrap_err().error_code(), "SERIALIZATION_ERROR");
        let _ = fs::remove_file(&path);

        let newer = r#"{"meta":{"version":"2.0.0","created":"2024-06-01T09:00:00Z"},"items":[]}"#;
        assert_eq!(parse_worksheet(newer).unwrap_err().error_code(), "VERSION_MISMATCH");
    }
}

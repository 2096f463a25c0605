// ==========================================
// Quadrant Engine - Roster Importer
// ==========================================
// Responsibility: staff onboarding from a roster CSV into the
// personnel repository
// Flow: parse -> map -> upsert, with per-row results
// ==========================================

use std::collections::HashMap;
use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::personnel::PersonnelRecord;
use crate::importer::error::{ImportError, ImportResult};
use crate::normalize::norm;
use crate::repository::personnel_repo::PersonnelRepository;

// ==========================================
// Report types
// ==========================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterRowResult {
    /// 1-based file row, counting the header as row 1.
    pub row: usize,
    pub name: String,
    pub imported: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterImportReport {
    pub total_rows: usize,
    pub imported: usize,
    pub skipped: usize,
    pub rows: Vec<RosterRowResult>,
}

// ==========================================
// RosterImporter
// ==========================================

pub struct RosterImporter {
    personnel_repo: Arc<PersonnelRepository>,
}

impl RosterImporter {
    pub fn new(personnel_repo: Arc<PersonnelRepository>) -> Self {
        Self { personnel_repo }
    }

    /// Imports a roster CSV file.
    ///
    /// # Rules
    /// - headers are matched case- and diacritic-insensitively, with
    ///   Catalan aliases (`nom`, `rol`, `departament`, ...)
    /// - `name` and `department` are required per row; a row missing
    ///   one is skipped with a reason, never fatal
    /// - `role` defaults to `treballador`, a missing `id` gets a
    ///   generated one, `available` defaults to true
    /// - a row whose id already exists replaces the stored person
    ///
    /// # Returns
    /// - `RosterImportReport` with one entry per data row
    pub fn import_from_csv(&self, file_path: &Path) -> ImportResult<RosterImportReport> {
        info!(file = %file_path.display(), "roster import started");

        // === Step 1: parse the file ===
        let rows = parse_roster_rows(file_path)?;
        let total_rows = rows.len();

        // === Step 2: map and upsert row by row ===
        let mut results = Vec::with_capacity(total_rows);
        let mut imported = 0usize;
        for (idx, row) in rows.into_iter().enumerate() {
            // header occupies file row 1
            let row_number = idx + 2;
            match row_to_person(&row, row_number) {
                Ok(person) => {
                    self.personnel_repo.upsert(&person)?;
                    imported += 1;
                    results.push(RosterRowResult {
                        row: row_number,
                        name: person.name,
                        imported: true,
                        reason: None,
                    });
                }
                Err(e) => {
                    warn!(row = row_number, error = %e, "roster row skipped");
                    results.push(RosterRowResult {
                        row: row_number,
                        name: field(&row, &["name", "nom"]).unwrap_or_default(),
                        imported: false,
                        reason: Some(e.to_string()),
                    });
                }
            }
        }

        // === Step 3: report ===
        let skipped = total_rows - imported;
        info!(total_rows, imported, skipped, "roster import finished");

        Ok(RosterImportReport {
            total_rows,
            imported,
            skipped,
            rows: results,
        })
    }
}

/// Reads the CSV into per-row maps keyed by the normalized header.
fn parse_roster_rows(path: &Path) -> ImportResult<Vec<HashMap<String, String>>> {
    if !path.exists() {
        return Err(ImportError::FileNotFound(path.display().to_string()));
    }
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    if !ext.eq_ignore_ascii_case("csv") {
        return Err(ImportError::UnsupportedFormat(ext.to_string()));
    }

    let file = File::open(path)?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let headers: Vec<String> = reader.headers()?.iter().map(norm).collect();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        let mut row_map = HashMap::new();
        for (col_idx, value) in record.iter().enumerate() {
            if let Some(header) = headers.get(col_idx) {
                row_map.insert(header.clone(), value.trim().to_string());
            }
        }
        // skip fully blank rows
        if row_map.values().all(|v| v.is_empty()) {
            continue;
        }
        rows.push(row_map);
    }

    Ok(rows)
}

/// First non-empty value among the given normalized header names.
fn field(row: &HashMap<String, String>, names: &[&str]) -> Option<String> {
    names
        .iter()
        .filter_map(|n| row.get(*n))
        .find(|v| !v.is_empty())
        .cloned()
}

/// Lenient boolean: accepts the spellings roster exports carry.
fn parse_flag(raw: &str) -> bool {
    matches!(norm(raw).as_str(), "true" | "1" | "yes" | "si" | "x")
}

fn row_to_person(
    row: &HashMap<String, String>,
    row_number: usize,
) -> Result<PersonnelRecord, ImportError> {
    let name = field(row, &["name", "nom"]).ok_or_else(|| ImportError::FieldMappingError {
        row: row_number,
        message: "name is required".to_string(),
    })?;
    let department =
        field(row, &["department", "departament"]).ok_or_else(|| ImportError::FieldMappingError {
            row: row_number,
            message: "department is required".to_string(),
        })?;

    let role = field(row, &["role", "rol"]).unwrap_or_else(|| "treballador".to_string());
    let id = field(row, &["id"]).unwrap_or_else(|| Uuid::new_v4().to_string());

    let max_hours_week = match field(row, &["maxhoursweek", "maxhoressetmana"]) {
        Some(raw) => Some(raw.parse::<f64>().map_err(|_| ImportError::FieldMappingError {
            row: row_number,
            message: format!("maxHoursWeek is not a number: {}", raw),
        })?),
        None => None,
    };

    Ok(PersonnelRecord {
        id,
        name,
        role,
        department,
        is_driver: field(row, &["isdriver", "conductor"])
            .map(|v| parse_flag(&v))
            .unwrap_or(false),
        drives_small_truck: field(row, &["drivessmalltruck", "camiopetit"])
            .map(|v| parse_flag(&v))
            .unwrap_or(false),
        drives_large_truck: field(row, &["driveslargetruck", "camiogran"])
            .map(|v| parse_flag(&v))
            .unwrap_or(false),
        // absent means available, the legacy roster default
        available: field(row, &["available", "disponible"])
            .map(|v| parse_flag(&v))
            .unwrap_or(true),
        max_hours_week,
    })
}

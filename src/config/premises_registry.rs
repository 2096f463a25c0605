// ==========================================
// Quadrant Engine - Premises Registry
// ==========================================
// Responsibility: startup-time map from department key to its
// premises, loaded once from a config directory
// Red line: lookups never fail; a department without a file gets
// the documented defaults plus the "no_premises" warning
// ==========================================

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::domain::premises::{Premises, NO_PREMISES_WARNING};
use crate::normalize::norm;

// ==========================================
// PremisesRegistry
// ==========================================
/// Per-department premises, keyed case- and diacritic-insensitively.
///
/// Each file `premises-<department>.json` in the config directory
/// holds one [`Premises`] document; the stem after the `premises-`
/// prefix is the department key. A bare `<department>.json` works
/// too.
#[derive(Debug, Default)]
pub struct PremisesRegistry {
    by_department: HashMap<String, Premises>,
}

impl PremisesRegistry {
    /// Empty registry; every lookup degrades to defaults.
    pub fn new() -> Self {
        PremisesRegistry::default()
    }

    /// Loads every `*.json` file in the directory. A missing
    /// directory or a malformed file is logged and skipped, never
    /// fatal; the affected departments fall back to defaults.
    pub fn from_dir(dir: &Path) -> Self {
        let mut registry = PremisesRegistry::new();

        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(err) => {
                warn!(dir = %dir.display(), error = %err, "premises directory not readable, using defaults");
                return registry;
            }
        };

        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let department = stem.strip_prefix("premises-").unwrap_or(stem);

            let raw = match fs::read_to_string(&path) {
                Ok(raw) => raw,
                Err(err) => {
                    warn!(file = %path.display(), error = %err, "premises file not readable, skipped");
                    continue;
                }
            };
            match serde_json::from_str::<Premises>(&raw) {
                Ok(premises) => {
                    debug!(department = %norm(department), file = %path.display(), "premises loaded");
                    registry.insert(department, premises);
                }
                Err(err) => {
                    warn!(file = %path.display(), error = %err, "premises file malformed, skipped");
                }
            }
        }

        registry
    }

    pub fn insert(&mut self, department: &str, premises: Premises) {
        self.by_department.insert(norm(department), premises);
    }

    /// Premises for one department.
    ///
    /// # Returns
    /// The configured premises with no warnings, or the defaults
    /// plus a `"no_premises"` warning when the department has no
    /// entry. This call never fails.
    pub fn load(&self, department: &str) -> (Premises, Vec<String>) {
        match self.by_department.get(&norm(department)) {
            Some(premises) => (premises.clone(), Vec::new()),
            None => (
                Premises::default(),
                vec![NO_PREMISES_WARNING.to_string()],
            ),
        }
    }

    pub fn len(&self) -> usize {
        self.by_department.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_department.is_empty()
    }
}

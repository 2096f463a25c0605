// ==========================================
// Quadrant Engine - Importer Layer
// ==========================================
// Responsibility: external roster data into the personnel store
// ==========================================

pub mod error;
pub mod roster_importer;

pub use error::{ImportError, ImportResult};
pub use roster_importer::{RosterImportReport, RosterImporter, RosterRowResult};

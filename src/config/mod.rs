// ==========================================
// Quadrant Engine - Configuration Layer
// ==========================================
// Responsibility: per-department premises, loaded at startup from a
// config directory into an explicit registry
// ==========================================

pub mod premises_registry;

pub use premises_registry::PremisesRegistry;

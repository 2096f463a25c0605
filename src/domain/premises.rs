// ==========================================
// Quadrant Engine - Premises Entity
// ==========================================
// Per-department business rules. Loaded once per allocation run
// and immutable while the run lasts.
// ==========================================

use serde::{Deserialize, Serialize};

/// Fallback minimum rest between two commitments, in hours.
pub const DEFAULT_REST_HOURS: f64 = 8.0;

/// Warning emitted when a department has no premises file.
pub const NO_PREMISES_WARNING: &str = "no_premises";

// ==========================================
// PremiseCondition
// ==========================================
// Location-based responsible override. The first condition whose
// location matches the event location wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PremiseCondition {
    #[serde(default)]
    pub locations: Vec<String>,
    pub responsible: String,
}

// ==========================================
// Premises
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Premises {
    #[serde(default = "default_rest_hours")]
    pub rest_hours: f64,
    #[serde(default = "default_true")]
    pub allow_multiple_events_same_day: bool,
    #[serde(default = "default_true")]
    pub require_responsible: bool,
    #[serde(default)]
    pub conditions: Vec<PremiseCondition>,
}

fn default_rest_hours() -> f64 {
    DEFAULT_REST_HOURS
}

fn default_true() -> bool {
    true
}

impl Default for Premises {
    fn default() -> Self {
        Self {
            rest_hours: DEFAULT_REST_HOURS,
            allow_multiple_events_same_day: true,
            require_responsible: true,
            conditions: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let p = Premises::default();
        assert_eq!(p.rest_hours, 8.0);
        assert!(p.allow_multiple_events_same_day);
        assert!(p.require_responsible);
        assert!(p.conditions.is_empty());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let json = r#"{"restHours": 10}"#;
        let p: Premises = serde_json::from_str(json).unwrap();
        assert_eq!(p.rest_hours, 10.0);
        assert!(p.allow_multiple_events_same_day);
        assert!(p.require_responsible);
    }

    #[test]
    fn test_conditions_deserialize() {
        let json = r#"{
            "restHours": 8,
            "allowMultipleEventsSameDay": false,
            "requireResponsible": true,
            "conditions": [
                {"locations": ["Finca Miró"], "responsible": "Anna Puig"}
            ]
        }"#;
        let p: Premises = serde_json::from_str(json).unwrap();
        assert!(!p.allow_multiple_events_same_day);
        assert_eq!(p.conditions.len(), 1);
        assert_eq!(p.conditions[0].responsible, "Anna Puig");
    }
}

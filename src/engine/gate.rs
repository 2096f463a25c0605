// ==========================================
// Quadrant Engine - Department Gate
// ==========================================
// Responsibility: optional serialize-per-department wrapper for
// callers who want allocation runs on one department to queue
// Red line: the engine itself never takes this lock; whoever wants
// serialization acquires it around the call
// ==========================================

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::normalize::norm;

/// Per-department serialization gate.
///
/// Two concurrent allocation runs for the same department each work
/// from their own snapshot and can pick the same person. Callers who
/// would rather queue the runs hold a gate guard for the duration of
/// the call.
#[derive(Default)]
pub struct DepartmentGate {
    locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl DepartmentGate {
    pub fn new() -> Self {
        DepartmentGate::default()
    }

    /// Acquires the gate for one department, keyed case- and
    /// diacritic-insensitively. The guard releases on drop.
    pub async fn acquire(&self, department: &str) -> OwnedMutexGuard<()> {
        let gate = {
            let mut locks = self.locks.lock().await;
            locks
                .entry(norm(department))
                .or_insert_with(|| Arc::new(Mutex::new(())))
                .clone()
        };
        gate.lock_owned().await
    }
}

// src/api/runs.rs — Bounded registry of triggered runs

use std::collections::{HashMap, VecDeque};

use super::types::{RunState, RunStatus};

/// Runs remembered by a server before finished ones are evicted.
pub const MAX_TRACKED_RUNS: usize = 100;

/// Run statuses keyed by run ID, oldest first.
///
/// Once more than `capacity` runs are tracked, the oldest runs that are no
/// longer running are dropped. Running entries are never evicted.
#[derive(Debug)]
pub struct RunRegistry {
    capacity: usize,
    order: VecDeque<String>,
    runs: HashMap<String, RunStatus>,
}

impl Default for RunRegistry {
    fn default() -> Self {
        Self::with_capacity(MAX_TRACKED_RUNS)
    }
}

impl RunRegistry {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            order: VecDeque::new(),
            runs: HashMap::new(),
        }
    }

    pub fn insert(&mut self, status: RunStatus) {
        let id = status.run_id.clone();
        if self.runs.insert(id.clone(), status).is_none() {
            self.order.push_back(id);
        }
        self.evict();
    }

    pub fn get(&self, id: &str) -> Option<&RunStatus> {
        self.runs.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut RunStatus> {
        self.runs.get_mut(id)
    }

    pub fn len(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    fn evict(&mut self) {
        while self.runs.len() > self.capacity {
            let runs = &self.runs;
            let Some(pos) = self
                .order
                .iter()
                .position(|id| runs.get(id).is_some_and(|r| r.state != RunState::Running))
            else {
                return;
            };
            if let Some(id) = self.order.remove(pos) {
                self.runs.remove(&id);
            }
        }
    }
}

//! Bounded per-body position history for presentation layers
//!
//! The engine never touches trails. Callers record them after each step.

use crate::body::Body;
use glam::DVec2;
use std::collections::{HashMap, VecDeque};

#[derive(Debug, Clone, Default)]
pub struct TrailHistory {
    capacity: usize,
    trails: HashMap<String, VecDeque<DVec2>>,
}

impl TrailHistory {
    /// Keep at most `capacity` positions per body; 0 disables recording
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            trails: HashMap::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Append each body's current position, dropping the oldest when full
    pub fn record(&mut self, bodies: &[Body]) {
        if self.capacity == 0 {
            return;
        }
        let capacity = self.capacity;
        for body in bodies {
            let trail = self
                .trails
                .entry(body.name().to_string())
                .or_insert_with(|| VecDeque::with_capacity(capacity));
            if trail.len() == capacity {
                trail.pop_front();
            }
            trail.push_back(body.position());
        }
    }

    /// Positions for `name`, oldest first
    pub fn trail(&self, name: &str) -> Option<&VecDeque<DVec2>> {
        self.trails.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &VecDeque<DVec2>)> {
        self.trails.iter().map(|(name, trail)| (name.as_str(), trail))
    }

    /// Number of bodies with a trail
    pub fn len(&self) -> usize {
        self.trails.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trails.is_empty()
    }

    pub fn clear(&mut self) {
        self.trails.clear();
    }
}

use std::collections::VecDeque;

use glam::Vec3;

use crate::api::error::{OrreryError, OrreryResult};
use crate::api::types::NodeId;

/// Fixed-length history of recent positions, newest first.
///
/// Every slot starts at the spawn position so the tail is fully populated
/// from the first frame and collapses into a point until the body moves.
#[derive(Debug, Clone)]
pub struct TrailBuffer {
    positions: VecDeque<Vec3>,
    capacity: usize,
}

impl TrailBuffer {
    pub fn new(capacity: usize, initial: Vec3) -> OrreryResult<Self> {
        if capacity == 0 {
            return Err(OrreryError::EmptyTrail);
        }
        let mut positions = VecDeque::with_capacity(capacity + 1);
        positions.resize(capacity, initial);
        Ok(Self { positions, capacity })
    }

    /// Push the newest position and drop the oldest.
    pub fn update(&mut self, position: Vec3) {
        self.positions.push_front(position);
        self.positions.truncate(self.capacity);
    }

    /// Slot `i`, where 0 is the most recent.
    pub fn get(&self, i: usize) -> Option<Vec3> {
        self.positions.get(i).copied()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Newest to oldest.
    pub fn iter(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.positions.iter().copied()
    }
}

/// A trail plus the marker nodes that display it, one marker per slot.
#[derive(Debug, Clone)]
pub struct Tail {
    pub buffer: TrailBuffer,
    pub markers: Vec<NodeId>,
}

impl Tail {
    pub fn new(buffer: TrailBuffer, markers: Vec<NodeId>) -> Self {
        Self { buffer, markers }
    }
}

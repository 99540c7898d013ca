// Fingertip motion trails: one short FIFO of recent positions per finger.
// Slots are keyed by finger identity, never by spatial proximity.

use crate::constants::TRAIL_CAPACITY;
use crate::estimator::Finger;
use crate::types::Point2D;
use std::collections::VecDeque;

pub struct TrailBuffer {
    slots: [VecDeque<Point2D>; 5],
}

impl TrailBuffer {
    pub fn new() -> Self {
        Self { slots: std::array::from_fn(|_| VecDeque::with_capacity(TRAIL_CAPACITY)) }
    }

    /// Push the newest point, evicting the oldest once the slot is full.
    pub fn append(&mut self, finger: Finger, point: Point2D) {
        let slot = &mut self.slots[finger.slot()];
        if slot.len() == TRAIL_CAPACITY {
            slot.pop_front();
        }
        slot.push_back(point);
    }

    /// Points of one trail, oldest first.
    pub fn snapshot(&self, finger: Finger) -> Vec<Point2D> {
        self.slots[finger.slot()].iter().copied().collect()
    }
}

impl Default for TrailBuffer {
    fn default() -> Self {
        Self::new()
    }
}

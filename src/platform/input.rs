//! Latest-value pointer slot
//!
//! The host's input thread publishes pointer x positions; the simulation reads
//! whatever is newest once per tick. Neither side ever blocks.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

/// Bit pattern meaning "nothing published yet"
const EMPTY: u32 = f32::NAN.to_bits();

/// Shared slot holding the most recent pointer x position
///
/// Cloning shares the same slot.
#[derive(Debug, Clone)]
pub struct PointerSlot {
    bits: Arc<AtomicU32>,
}

impl Default for PointerSlot {
    fn default() -> Self {
        Self::new()
    }
}

impl PointerSlot {
    pub fn new() -> Self {
        Self {
            bits: Arc::new(AtomicU32::new(EMPTY)),
        }
    }

    /// Publish a new pointer x position, replacing any older one
    ///
    /// Non-finite positions are dropped.
    pub fn publish(&self, x: f32) {
        if x.is_finite() {
            self.bits.store(x.to_bits(), Ordering::Release);
        }
    }

    /// Most recent position, if any has been published
    pub fn latest(&self) -> Option<f32> {
        let x = f32::from_bits(self.bits.load(Ordering::Acquire));
        (!x.is_nan()).then_some(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_empty_until_published() {
        let slot = PointerSlot::new();
        assert_eq!(slot.latest(), None);
        slot.publish(123.5);
        assert_eq!(slot.latest(), Some(123.5));
    }

    #[test]
    fn test_latest_wins() {
        let slot = PointerSlot::new();
        slot.publish(1.0);
        slot.publish(2.0);
        slot.publish(f32::NAN);
        assert_eq!(slot.latest(), Some(2.0));
    }

    #[test]
    fn test_shared_across_threads() {
        let slot = PointerSlot::new();
        let writer = slot.clone();
        thread::spawn(move || {
            for i in 0..100 {
                writer.publish(i as f32);
            }
        })
        .join()
        .unwrap();
        assert_eq!(slot.latest(), Some(99.0));
    }
}

//! Per-seat mutual exclusion for the check-then-insert booking sequence.
//!
//! Single-node defense against the double-booking race: the conflict
//! check and the insert run under the seat's lock, so two concurrent
//! creations for one seat are serialized. The database exclusion
//! constraint remains the backstop for multi-node deployments.

use std::collections::HashMap;
use std::sync::{Arc, Mutex as StdMutex};

use tokio::sync::Mutex;

/// Registry of per-seat async locks.
#[derive(Debug, Default)]
pub struct SeatLocks {
    /// Lazily created lock per seat id.
    locks: StdMutex<HashMap<i64, Arc<Mutex<()>>>>,
}

impl SeatLocks {
    /// Creates an empty lock registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the lock for a seat, creating it on first use.
    ///
    /// Locks are never removed; the registry grows with the number of
    /// distinct seats booked, which is bounded by the seat table.
    pub fn lock_for(&self, seat_id: i64) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock().expect("seat lock registry poisoned");
        locks.entry(seat_id).or_default().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seat_shares_one_lock() {
        let locks = SeatLocks::new();
        let a = locks.lock_for(5);
        let b = locks.lock_for(5);
        assert!(Arc::ptr_eq(&a, &b));

        let c = locks.lock_for(6);
        assert!(!Arc::ptr_eq(&a, &c));
    }

    #[tokio::test]
    async fn test_lock_serializes_holders() {
        let locks = SeatLocks::new();
        let lock = locks.lock_for(1);
        let guard = lock.lock().await;

        let second = locks.lock_for(1);
        assert!(second.try_lock().is_err());
        drop(guard);
        assert!(second.try_lock().is_ok());
    }
}

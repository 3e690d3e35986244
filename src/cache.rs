// src/cache.rs

use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::Result;

/// Injectable time source, so tests can drive expiry without sleeping.
pub type Clock = Box<dyn Fn() -> Instant + Send + Sync>;

struct Slot<T> {
    stored_at: Instant,
    value: T,
}

/// A single-slot cache with a fixed time-to-live.
///
/// `get_or_refresh` returns the cached value while it is younger than the
/// TTL and recomputes it otherwise. The check-and-populate sequence runs
/// under the mutex, so concurrent cold-cache callers are serialized and the
/// refresh runs once. A failed refresh leaves the slot untouched.
pub struct TtlCache<T> {
    ttl: Duration,
    clock: Clock,
    slot: Mutex<Option<Slot<T>>>,
}

impl<T: Clone> TtlCache<T> {
    pub fn new(ttl: Duration) -> Self {
        Self::with_clock(ttl, Box::new(Instant::now))
    }

    /// Same cache, but reading time from `clock`. Tests drive expiry with
    /// a hand-rolled clock instead of sleeping.
    pub fn with_clock(ttl: Duration, clock: Clock) -> Self {
        Self {
            ttl,
            clock,
            slot: Mutex::new(None),
        }
    }

    pub fn get_or_refresh<F>(&self, refresh: F) -> Result<T>
    where
        F: FnOnce() -> Result<T>,
    {
        let now = (self.clock)();
        let mut slot = self.slot.lock().unwrap();
        if let Some(cached) = slot.as_ref() {
            if now.saturating_duration_since(cached.stored_at) < self.ttl {
                return Ok(cached.value.clone());
            }
        }
        let value = refresh()?;
        *slot = Some(Slot {
            stored_at: now,
            value: value.clone(),
        });
        Ok(value)
    }
}

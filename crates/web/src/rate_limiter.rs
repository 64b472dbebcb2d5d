//! Rate Limiter (Token Bucket Algorithm)
//!
//! Guards the mutating endpoints. Lock-free: the bucket lives in one
//! `AtomicU64` updated with a CAS loop.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// Token bucket shared by all sessions
pub struct RateLimiter {
    // Upper 32 bits: available tokens
    // Lower 32 bits: last refill, ms since `epoch` (wrapping)
    packed: AtomicU64,
    epoch: Instant,
    burst: u32,
    per_second: u32,
}

fn pack(tokens: u32, at_ms: u32) -> u64 {
    (u64::from(tokens) << 32) | u64::from(at_ms)
}

fn unpack(packed: u64) -> (u32, u32) {
    ((packed >> 32) as u32, (packed & 0xFFFF_FFFF) as u32)
}

impl RateLimiter {
    /// `burst` tokens available up front, refilled at `per_second`
    pub fn new(burst: u32, per_second: u32) -> Self {
        Self {
            packed: AtomicU64::new(pack(burst, 0)),
            epoch: Instant::now(),
            burst,
            per_second,
        }
    }

    /// Milliseconds since `epoch`, wrapping every ~49.7 days
    fn clock_ms(&self) -> u32 {
        self.epoch.elapsed().as_millis() as u32
    }

    /// Take one token; `false` means the caller should be throttled
    pub fn try_acquire(&self) -> bool {
        self.try_acquire_at(self.clock_ms())
    }

    fn try_acquire_at(&self, now_ms: u32) -> bool {
        loop {
            let current = self.packed.load(Ordering::Acquire);
            let (tokens, last_ms) = unpack(current);

            // Wrapping difference stays correct across clock rollover
            let refill =
                u64::from(now_ms.wrapping_sub(last_ms)) * u64::from(self.per_second) / 1000;

            // Only advance the refill timestamp when a token was actually
            // earned, otherwise frequent callers would starve the bucket.
            let (available, stamp) = if refill > 0 {
                let topped = (u64::from(tokens) + refill).min(u64::from(self.burst)) as u32;
                (topped, now_ms)
            } else {
                (tokens, last_ms)
            };

            if available == 0 {
                return false;
            }

            let next = pack(available - 1, stamp);
            if self
                .packed
                .compare_exchange(current, next, Ordering::AcqRel, Ordering::Acquire)
                .is_ok()
            {
                return true;
            }
        }
    }
}

use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic token issuer for discarding stale lookup results.
///
/// Each user-initiated lookup calls [`begin`](Self::begin) and keeps the
/// returned token; when its response arrives, the handler applies it only
/// if [`is_current`](Self::is_current) still holds. A lookup started later
/// bumps the generation, so responses finishing out of order are dropped
/// instead of overwriting newer state. Nothing is cancelled; superseded
/// requests run to completion and their results are ignored.
#[derive(Debug, Default)]
pub struct RequestGeneration(AtomicU64);

impl RequestGeneration {
    pub const fn new() -> Self {
        RequestGeneration(AtomicU64::new(0))
    }

    /// Start a new lookup; the returned token becomes the current one.
    pub fn begin(&self) -> u64 {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn is_current(&self, token: u64) -> bool {
        self.0.load(Ordering::SeqCst) == token
    }
}

#[cfg(test)]
mod test {
    use super::RequestGeneration;

    #[test]
    fn test_newer_lookup_supersedes_older() {
        let generation = RequestGeneration::new();
        let first = generation.begin();
        assert!(generation.is_current(first));

        let second = generation.begin();
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }

    #[test]
    fn test_tokens_are_monotonic() {
        let generation = RequestGeneration::new();
        let a = generation.begin();
        let b = generation.begin();
        let c = generation.begin();
        assert!(a < b && b < c);
    }
}

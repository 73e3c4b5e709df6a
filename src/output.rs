use std::sync::atomic::{AtomicBool, Ordering};

/// Deduplicating warning emitter.
///
/// Holds the "already said this" flag explicitly so callers (and tests) can
/// own the dedup state instead of relying on a hidden global. The atomic
/// check-and-set guarantees at most one emission even under concurrent
/// callers.
pub struct WarnOnce {
    fired: AtomicBool,
}

impl WarnOnce {
    pub const fn new() -> Self {
        Self {
            fired: AtomicBool::new(false),
        }
    }

    /// Emit `message` to stderr unless this flag has already fired.
    ///
    /// Returns `true` if this call was the one that emitted.
    pub fn warn(&self, message: &str) -> bool {
        if self
            .fired
            .compare_exchange(false, true, Ordering::Relaxed, Ordering::Relaxed)
            .is_err()
        {
            return false;
        }
        eprintln!("tscfg: warning: {message}");
        true
    }

    pub fn fired(&self) -> bool {
        self.fired.load(Ordering::Relaxed)
    }
}

impl Default for WarnOnce {
    fn default() -> Self {
        Self::new()
    }
}

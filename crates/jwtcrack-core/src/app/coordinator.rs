//! Cross-worker search coordination
//!
//! A write-once result cell shared by every worker. Workers poll it before
//! each candidate and stop as soon as a secret has been published or the
//! search has been halted.

use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};

/// A recovered secret and the worker that found it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundSecret {
    pub secret: String,
    pub worker_id: usize,
}

/// Shared state for one search
#[derive(Debug, Default)]
pub struct SearchCoordinator {
    /// Set by the first successful publish
    found: AtomicBool,
    /// Set when a worker aborts on a backend failure
    halted: AtomicBool,
    /// Written once, by the publisher that won `found`
    secret: OnceLock<FoundSecret>,
}

impl SearchCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Try to publish a secret. Returns true if this call won.
    ///
    /// Only the caller that flips `found` from false to true stores its
    /// secret; every later call is a no-op.
    pub fn try_publish(&self, worker_id: usize, secret: &str) -> bool {
        if self
            .found
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return false;
        }

        self.secret
            .set(FoundSecret {
                secret: secret.to_string(),
                worker_id,
            })
            .is_ok()
    }

    /// Whether a secret has been published
    #[inline]
    pub fn is_found(&self) -> bool {
        self.found.load(Ordering::Acquire)
    }

    /// Abort the search without a result
    pub fn halt(&self) {
        self.halted.store(true, Ordering::Release);
    }

    #[inline]
    pub fn is_halted(&self) -> bool {
        self.halted.load(Ordering::Acquire)
    }

    /// Check if workers should stop searching
    #[inline]
    pub fn should_stop(&self) -> bool {
        self.is_found() || self.is_halted()
    }

    /// The published secret, if any
    ///
    /// Complete once every worker has been joined.
    pub fn secret(&self) -> Option<&FoundSecret> {
        self.secret.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_initial_state() {
        let coordinator = SearchCoordinator::new();
        assert!(!coordinator.is_found());
        assert!(!coordinator.is_halted());
        assert!(!coordinator.should_stop());
        assert!(coordinator.secret().is_none());
    }

    #[test]
    fn test_first_publish_wins() {
        let coordinator = SearchCoordinator::new();

        assert!(coordinator.try_publish(2, "ab"));
        assert!(!coordinator.try_publish(0, "zz"));

        assert!(coordinator.should_stop());
        assert_eq!(
            coordinator.secret(),
            Some(&FoundSecret {
                secret: "ab".to_string(),
                worker_id: 2
            })
        );
    }

    #[test]
    fn test_halt_stops_without_secret() {
        let coordinator = SearchCoordinator::new();
        coordinator.halt();

        assert!(coordinator.should_stop());
        assert!(!coordinator.is_found());
        assert!(coordinator.secret().is_none());
    }

    #[test]
    fn test_concurrent_publish_single_winner() {
        let coordinator = Arc::new(SearchCoordinator::new());

        let handles: Vec<_> = (0..16)
            .map(|id| {
                let coordinator = Arc::clone(&coordinator);
                thread::spawn(move || coordinator.try_publish(id, &format!("s{}", id)))
            })
            .collect();

        let winners: Vec<bool> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(winners.iter().filter(|&&won| won).count(), 1);

        let found = coordinator.secret().unwrap();
        assert!(winners[found.worker_id]);
        assert_eq!(found.secret, format!("s{}", found.worker_id));
    }
}

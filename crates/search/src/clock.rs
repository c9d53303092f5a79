use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// Wall-clock budget shared by every worker of one search.
#[derive(Debug)]
pub(crate) struct Clock {
    deadline: Option<Instant>,
    expired: AtomicBool,
}

impl Clock {
    pub fn start(budget: Option<Duration>) -> Self {
        Self {
            deadline: budget.and_then(|budget| Instant::now().checked_add(budget)),
            expired: AtomicBool::new(false),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.expired.load(Ordering::Relaxed)
    }

    /// Reads the time and latches expiry, so every worker sees it.
    pub fn poll(&self) -> bool {
        if self.is_expired() {
            return true;
        }
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => {
                self.expired.store(true, Ordering::Relaxed);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_budget_never_expires() {
        let clock = Clock::start(None);
        assert!(!clock.poll());
        assert!(!clock.is_expired());
    }

    #[test]
    fn test_zero_budget_latches() {
        let clock = Clock::start(Some(Duration::ZERO));
        assert!(!clock.is_expired());
        assert!(clock.poll());
        assert!(clock.is_expired());
    }
}

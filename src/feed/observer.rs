//! Scroll observer subscriptions
//!
//! A mounted feed page registers one `ScrollSubscription` and holds it for its
//! whole lifetime. Disposal happens exactly once: explicitly through
//! `dispose()`, or on drop if the page goes away without it.

use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

/// Scroll geometry of the card grid, in rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollPosition {
    pub offset: usize,
    pub viewport: usize,
    pub total: usize,
}

impl ScrollPosition {
    /// True when the bottom of the viewport is within `threshold` rows of the end
    pub fn is_near_bottom(&self, threshold: usize) -> bool {
        self.offset + self.viewport + threshold >= self.total
    }
}

#[derive(Debug, Default)]
struct RegistryInner {
    active: Mutex<HashSet<u64>>,
    next_id: AtomicU64,
}

/// Process-wide set of live scroll listeners
#[derive(Debug, Clone, Default)]
pub struct ScrollRegistry {
    inner: Arc<RegistryInner>,
}

impl ScrollRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self) -> ScrollSubscription {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        self.inner.active.lock().unwrap().insert(id);
        tracing::trace!(id, "scroll listener registered");
        ScrollSubscription {
            id,
            registry: Some(self.inner.clone()),
        }
    }

    /// Number of registered listeners
    pub fn active(&self) -> usize {
        self.inner.active.lock().unwrap().len()
    }
}

/// Handle for one registered listener
#[derive(Debug)]
pub struct ScrollSubscription {
    id: u64,
    registry: Option<Arc<RegistryInner>>,
}

impl ScrollSubscription {
    pub fn is_active(&self) -> bool {
        self.registry.is_some()
    }

    /// Unregister. Later calls (and the eventual drop) do nothing.
    pub fn dispose(&mut self) {
        if let Some(registry) = self.registry.take() {
            registry.active.lock().unwrap().remove(&self.id);
            tracing::trace!(id = self.id, "scroll listener removed");
        }
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        self.dispose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn near_bottom_threshold() {
        let pos = ScrollPosition {
            offset: 0,
            viewport: 10,
            total: 12,
        };
        assert!(!pos.is_near_bottom(1));
        assert!(pos.is_near_bottom(2));

        let at_end = ScrollPosition {
            offset: 2,
            viewport: 10,
            total: 12,
        };
        assert!(at_end.is_near_bottom(0));
    }

    #[test]
    fn content_shorter_than_viewport_is_at_bottom() {
        let pos = ScrollPosition {
            offset: 0,
            viewport: 20,
            total: 3,
        };
        assert!(pos.is_near_bottom(0));
    }

    #[test]
    fn dispose_is_idempotent() {
        let registry = ScrollRegistry::new();
        let mut sub = registry.subscribe();
        assert_eq!(registry.active(), 1);

        sub.dispose();
        assert!(!sub.is_active());
        assert_eq!(registry.active(), 0);

        sub.dispose();
        drop(sub);
        assert_eq!(registry.active(), 0);
    }

    #[test]
    fn drop_unregisters() {
        let registry = ScrollRegistry::new();
        let a = registry.subscribe();
        let b = registry.subscribe();
        assert_eq!(registry.active(), 2);
        drop(a);
        assert_eq!(registry.active(), 1);
        drop(b);
        assert_eq!(registry.active(), 0);
    }
}

//! Draft identifier generation.
//!
//! Identifiers exist only on draft mappings; exports never carry them and
//! every import mints fresh ones. Abstracting the generator behind a trait
//! lets tests and deterministic tooling substitute a predictable sequence.

use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

/// Produces unique draft identifiers.
pub trait IdFactory: Send + Sync {
    /// Mints a new identifier. `prefix` is advisory; random factories
    /// ignore it, deterministic ones fold it into the output.
    fn create_id(&self, prefix: &str) -> String;
}

/// Random identifiers backed by v4 UUIDs.
#[derive(Debug, Default)]
pub struct RandomIds;

impl RandomIds {
    pub fn new() -> Self {
        Self
    }
}

impl IdFactory for RandomIds {
    fn create_id(&self, _prefix: &str) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Deterministic `"<prefix>-<n>"` identifiers for tests and stable output.
#[derive(Debug, Default)]
pub struct SequentialIds {
    next: AtomicU64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdFactory for SequentialIds {
    fn create_id(&self, prefix: &str) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{prefix}-{n}")
    }
}

/// Mints a random identifier without wiring up a factory.
pub fn create_id(prefix: &str) -> String {
    RandomIds.create_id(prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_ids_are_unique() {
        let ids = RandomIds::new();
        let a = ids.create_id("input");
        let b = ids.create_id("input");
        assert_ne!(a, b);
        assert_eq!(a.len(), 36);
    }

    #[test]
    fn sequential_ids_count_up_across_prefixes() {
        let ids = SequentialIds::new();
        assert_eq!(ids.create_id("input"), "input-1");
        assert_eq!(ids.create_id("output"), "output-2");
        assert_eq!(ids.create_id("input"), "input-3");
    }
}

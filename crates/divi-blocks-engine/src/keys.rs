//! Block key generation.
//!
//! Keys only need to avoid collisions within one output document, so the
//! default generator uses a truncated random UUID. Below eight hex digits a
//! few hundred blocks already collide, so shorter keys are never produced.

use std::sync::atomic::{AtomicUsize, Ordering};

use uuid::Uuid;

/// Produces identifiers for newly built blocks.
pub trait KeyGenerator: Send + Sync {
    fn next_key(&self) -> String;
}

/// Random keys: the first `len` hex digits of a v4 UUID.
#[derive(Debug, Clone, Copy)]
pub struct UuidKeys {
    len: usize,
}

impl UuidKeys {
    pub const MIN_LEN: usize = 8;
    pub const DEFAULT_LEN: usize = 12;
    pub const MAX_LEN: usize = 32;

    /// `len` is clamped to `MIN_LEN..=MAX_LEN`.
    pub fn new(len: usize) -> Self {
        Self {
            len: len.clamp(Self::MIN_LEN, Self::MAX_LEN),
        }
    }
}

impl Default for UuidKeys {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LEN)
    }
}

impl KeyGenerator for UuidKeys {
    fn next_key(&self) -> String {
        let mut key = Uuid::new_v4().simple().to_string();
        key.truncate(self.len);
        key
    }
}

/// Deterministic keys `<prefix>0`, `<prefix>1`, ... for tests and diffs.
#[derive(Debug, Default)]
pub struct SequentialKeys {
    prefix: String,
    next: AtomicUsize,
}

impl SequentialKeys {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicUsize::new(0),
        }
    }
}

impl KeyGenerator for SequentialKeys {
    fn next_key(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{}{n}", self.prefix)
    }
}

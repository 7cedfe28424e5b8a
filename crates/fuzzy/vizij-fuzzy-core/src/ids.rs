//! Rule identifiers and their allocator.

use std::fmt;

use serde::{Deserialize, Serialize};

/// 1-based sequence number of a rule registered on a `FuzzyValue`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct RuleId(pub u32);

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonic allocator for RuleId. Never reset: rule numbers keep growing
/// across commits of the owning value and stick at `u32::MAX` instead of
/// wrapping back to 0.
#[derive(Default, Debug, Clone)]
pub struct RuleIdAllocator {
    issued: u32,
}

impl RuleIdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn alloc(&mut self) -> RuleId {
        self.issued = self.issued.saturating_add(1);
        RuleId(self.issued)
    }

    /// Number of ids handed out so far.
    #[inline]
    pub fn issued(&self) -> u32 {
        self.issued
    }
}

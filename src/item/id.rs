//! Id assignment for newly created items.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::types::Item;

/// How the store assigns ids on create.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdPolicy {
    /// Monotonic counter that never hands out an id twice.
    #[default]
    Counter,
    /// `(collection length + 1)`. Can collide with a live id after a delete.
    Length,
}

impl fmt::Display for IdPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdPolicy::Counter => write!(f, "counter"),
            IdPolicy::Length => write!(f, "length"),
        }
    }
}

impl FromStr for IdPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "counter" => Ok(IdPolicy::Counter),
            "length" => Ok(IdPolicy::Length),
            _ => Err(format!("Unknown id policy: {s} (expected 'counter' or 'length')")),
        }
    }
}

/// Hands out ids according to an [`IdPolicy`].
#[derive(Debug, Clone)]
pub struct IdAllocator {
    policy: IdPolicy,
    next: u64,
}

impl IdAllocator {
    /// Create an allocator whose counter starts after the largest numeric id in `existing`.
    #[must_use]
    pub fn new(policy: IdPolicy, existing: &[Item]) -> Self {
        let max = existing
            .iter()
            .filter_map(|item| item.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        Self {
            policy,
            next: max.saturating_add(1),
        }
    }

    #[must_use]
    pub fn policy(&self) -> IdPolicy {
        self.policy
    }

    /// Produce the id for the next item, given the current collection length.
    pub fn allocate(&mut self, current_len: usize) -> String {
        match self.policy {
            IdPolicy::Length => current_len.saturating_add(1).to_string(),
            IdPolicy::Counter => {
                let id = self.next;
                self.next = self.next.saturating_add(1);
                id.to_string()
            }
        }
    }
}

//! Process-lifetime memoization store for lookups
//!
//! Entries are write-once: no TTL, no eviction, no invalidation. A
//! stack is cached whole (all outputs together) under the name it was
//! requested by; the export set is cached whole under a single slot.
//! Racing first fetches may both store; last write wins, which is
//! accepted because both fetched equivalent data.

use crate::cfn::{Export, Stack};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::debug;

/// Shared in-memory cache for stack descriptions and the export set
///
/// Safe to share across tasks; all synchronization is internal and no
/// lock is held across an await point.
#[derive(Default)]
pub struct LookupCache {
    stacks: RwLock<HashMap<String, Arc<Stack>>>,
    exports: RwLock<Option<Arc<[Export]>>>,
}

impl LookupCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the cached description for a stack name
    pub fn stack(&self, name: &str) -> Option<Arc<Stack>> {
        self.stacks
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
    }

    /// Store a stack description under the name it was requested by
    pub fn store_stack(&self, name: &str, stack: Stack) -> Arc<Stack> {
        let stack = Arc::new(stack);
        self.stacks
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name.to_string(), Arc::clone(&stack));
        debug!("cached stack {}", name);
        stack
    }

    /// Get the cached export set
    pub fn exports(&self) -> Option<Arc<[Export]>> {
        self.exports
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Store the complete export set
    pub fn store_exports(&self, exports: Vec<Export>) -> Arc<[Export]> {
        let exports: Arc<[Export]> = exports.into();
        *self
            .exports
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(Arc::clone(&exports));
        debug!("cached {} exports", exports.len());
        exports
    }
}

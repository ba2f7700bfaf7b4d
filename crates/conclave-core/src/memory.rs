//! Per-agent bounded memory
//!
//! Each agent owns one memory instance for feedback and learning data. The
//! store is capacity-bounded with insertion-order FIFO eviction: when full,
//! storing a new key drops the entry inserted earliest. This is not an LRU
//! cache; `retrieve` and `has` never change eviction order.

use std::collections::{HashMap, VecDeque};

/// Default number of entries a memory holds before evicting
pub const DEFAULT_MEMORY_CAPACITY: usize = 1000;

/// Bounded key/value store scoped to one agent instance
#[derive(Debug, Clone)]
pub struct AgentMemory {
    entries: HashMap<String, serde_json::Value>,
    /// Keys in insertion order; front is the eviction candidate
    order: VecDeque<String>,
    capacity: usize,
}

impl Default for AgentMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl AgentMemory {
    /// Create a memory with the default capacity
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_MEMORY_CAPACITY)
    }

    /// Create a memory with a custom capacity
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            order: VecDeque::new(),
            capacity,
        }
    }

    /// Store a value, evicting the oldest-inserted entry when at capacity
    ///
    /// Overwriting an existing key updates the value in place and does not
    /// evict anything or change the key's position in the eviction order.
    pub fn store(&mut self, key: impl Into<String>, value: serde_json::Value) {
        let key = key.into();
        if self.entries.contains_key(&key) {
            self.entries.insert(key, value);
            return;
        }
        if self.order.len() >= self.capacity {
            if let Some(oldest) = self.order.pop_front() {
                tracing::debug!(key = %oldest, "memory at capacity, evicting oldest entry");
                self.entries.remove(&oldest);
            }
        }
        self.order.push_back(key.clone());
        self.entries.insert(key, value);
    }

    /// Look up a value
    #[must_use]
    pub fn retrieve(&self, key: &str) -> Option<&serde_json::Value> {
        self.entries.get(key)
    }

    /// Whether a key is present
    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Remove a key; returns whether it was present
    pub fn delete(&mut self, key: &str) -> bool {
        if self.entries.remove(key).is_some() {
            self.order.retain(|k| k != key);
            true
        } else {
            false
        }
    }

    /// Remove every entry
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    /// Snapshot of every entry; mutating the result does not affect the store
    #[must_use]
    pub fn get_all(&self) -> HashMap<String, serde_json::Value> {
        self.entries.clone()
    }

    /// Number of entries held
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the memory is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_store_and_retrieve() {
        let mut memory = AgentMemory::new();
        memory.store("feedback_1", json!({"helpful": true}));

        assert!(memory.has("feedback_1"));
        assert_eq!(memory.retrieve("feedback_1"), Some(&json!({"helpful": true})));
        assert_eq!(memory.retrieve("missing"), None);
    }

    #[test]
    fn test_eviction_drops_oldest_inserted() {
        let mut memory = AgentMemory::with_capacity(3);
        for i in 0..5 {
            memory.store(format!("k{}", i), json!(i));
        }

        assert_eq!(memory.len(), 3);
        assert!(!memory.has("k0"));
        assert!(!memory.has("k1"));
        assert!(memory.has("k2"));
        assert!(memory.has("k3"));
        assert!(memory.has("k4"));
    }

    #[test]
    fn test_retrieve_does_not_change_eviction_order() {
        let mut memory = AgentMemory::with_capacity(2);
        memory.store("oldest", json!(1));
        memory.store("newer", json!(2));

        // A read of the oldest entry must not save it from eviction.
        let _ = memory.retrieve("oldest");
        assert!(memory.has("oldest"));
        memory.store("newest", json!(3));

        assert!(!memory.has("oldest"));
        assert!(memory.has("newer"));
        assert!(memory.has("newest"));
    }

    #[test]
    fn test_overwrite_does_not_evict() {
        let mut memory = AgentMemory::with_capacity(2);
        memory.store("a", json!(1));
        memory.store("b", json!(2));
        memory.store("a", json!(10));

        assert_eq!(memory.len(), 2);
        assert_eq!(memory.retrieve("a"), Some(&json!(10)));
        assert!(memory.has("b"));
    }

    #[test]
    fn test_delete_and_clear() {
        let mut memory = AgentMemory::with_capacity(2);
        memory.store("a", json!(1));

        assert!(memory.delete("a"));
        assert!(!memory.delete("a"));
        assert!(memory.is_empty());

        // Deleted keys free their capacity slot.
        memory.store("b", json!(2));
        memory.store("c", json!(3));
        assert_eq!(memory.len(), 2);

        memory.clear();
        assert!(memory.is_empty());
    }

    #[test]
    fn test_get_all_is_a_snapshot() {
        let mut memory = AgentMemory::new();
        memory.store("a", json!(1));

        let mut snapshot = memory.get_all();
        snapshot.insert("b".to_string(), json!(2));

        assert!(!memory.has("b"));
        assert_eq!(memory.len(), 1);
    }
}

use std::sync::atomic::{AtomicU64, Ordering};

/// Global counter for auto-incrementing entity IDs (starts at 1, 0 is reserved).
static ENTITY_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Player identifier, assigned by the host server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerId(pub u64);

/// Unique entity identifier, monotonically increasing.
/// Never reused - a respawned or reloaded entity gets a new ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u64);

/// World identifier, index-based for efficiency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WorldId(pub u32);

impl PlayerId {
    /// Create a player ID from a specific value (for when you need explicit control).
    pub fn from_raw(id: u64) -> Self {
        Self(id)
    }
}

impl EntityId {
    /// Create a new entity ID with auto-incrementing counter.
    pub fn new() -> Self {
        Self(ENTITY_ID_COUNTER.fetch_add(1, Ordering::SeqCst))
    }

    /// Create an entity ID from a specific value (for when you need explicit control).
    pub fn from_raw(id: u64) -> Self {
        Self(id)
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl WorldId {
    /// Create a world ID from a specific index.
    pub fn from_index(index: u32) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

//! Cache Replacement Policies.
//!
//! Implements the victim selection used by the tag-only caches.
//!
//! # Policies
//!
//! - `Lru`: Least Recently Used, tracked with per-way recency counters.

/// Least Recently Used replacement policy.
pub mod lru;

pub use lru::LruPolicy;

/// Trait for cache replacement policies.
///
/// Defines the interface for updating usage state and selecting victim lines.
pub trait ReplacementPolicy: Send + Sync {
    /// Updates the policy state when a line is accessed or installed.
    ///
    /// # Arguments
    ///
    /// * `set` - The cache set index.
    /// * `way` - The way index within the set that was accessed.
    fn update(&mut self, set: usize, way: usize);

    /// Selects the way to fill in a specific set, preferring empty ways.
    ///
    /// # Arguments
    ///
    /// * `set` - The cache set index.
    ///
    /// # Returns
    ///
    /// The index of the way to fill.
    fn get_victim(&mut self, set: usize) -> usize;

    /// Returns the recency rank of a way (0 = empty, 1 = most recently used).
    fn rank(&self, set: usize, way: usize) -> u32;
}

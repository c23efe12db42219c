//! Like counts shared by every mounted copy of an item.
//!
//! The registry is keyed by item identity, so a like on a clone slot and a
//! like on the real slot land on the same counter. Hosts hold clones of one
//! registry and subscribe to refresh every copy they render.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;
use std::sync::{Arc, PoisonError, RwLock};

use tokio::sync::broadcast;
use tracing::debug;

use crate::carousel::{Identified, Track};

const EVENT_CAPACITY: usize = 64;

/// Published after every like
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LikeEvent<K> {
    pub id: K,
    pub count: u64,
}

#[derive(Debug)]
struct LikeState<K> {
    liked: HashSet<K>,
    counts: HashMap<K, u64>,
}

#[derive(Debug, Clone)]
pub struct LikeRegistry<K> {
    state: Arc<RwLock<LikeState<K>>>,
    events: broadcast::Sender<LikeEvent<K>>,
}

impl<K> Default for LikeRegistry<K>
where
    K: Clone + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> LikeRegistry<K>
where
    K: Clone + Eq + Hash,
{
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            state: Arc::new(RwLock::new(LikeState {
                liked: HashSet::new(),
                counts: HashMap::new(),
            })),
            events,
        }
    }

    /// Record a like; returns the new count
    pub fn like(&self, id: &K) -> u64 {
        let count = {
            let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
            state.liked.insert(id.clone());
            let count = state.counts.entry(id.clone()).or_insert(0);
            *count += 1;
            *count
        };

        // No subscribers is fine
        let _ = self.events.send(LikeEvent {
            id: id.clone(),
            count,
        });
        count
    }

    /// Like whatever real item sits behind a track slot.
    ///
    /// Clone slots forward to the item they copy.
    pub fn like_slot<T>(&self, track: &Track<T>, physical: usize) -> Option<u64>
    where
        T: Identified<Id = K>,
    {
        let slide = track.resolve(physical)?;
        debug!(physical, source = slide.source, "Like forwarded to real item");
        Some(self.like(&slide.item.id()))
    }

    pub fn count(&self, id: &K) -> u64 {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        state.counts.get(id).copied().unwrap_or(0)
    }

    pub fn is_liked(&self, id: &K) -> bool {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        state.liked.contains(id)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<LikeEvent<K>> {
        self.events.subscribe()
    }
}

/// Compact count: `999`, `1.2K`, `3.4M`
pub fn format_count(count: u64) -> String {
    if count >= 1_000_000 {
        format!("{:.1}M", count as f64 / 1_000_000.0)
    } else if count >= 1_000 {
        format!("{:.1}K", count as f64 / 1_000.0)
    } else {
        count.to_string()
    }
}

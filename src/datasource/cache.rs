//! Time-bounded memoization of fetch results, keyed by URL.

use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Per-URL payload cache owned by the fetcher.
///
/// Entries expire on read after `ttl`; nothing invalidates them earlier.
/// This is the only state shared across requests.
#[derive(Debug)]
pub struct FetchCache {
    ttl: Duration,
    entries: Mutex<HashMap<String, CacheEntry>>,
}

#[derive(Debug, Clone)]
struct CacheEntry {
    fetched_at: Instant,
    payload: Arc<Value>,
}

impl FetchCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Return the cached payload for `url` if it is still fresh.
    pub fn get(&self, url: &str) -> Option<Arc<Value>> {
        let mut entries = self.entries.lock().ok()?;
        match entries.get(url) {
            Some(entry) if entry.fetched_at.elapsed() < self.ttl => Some(entry.payload.clone()),
            Some(_) => {
                entries.remove(url);
                None
            }
            None => None,
        }
    }

    pub fn insert(&self, url: &str, payload: Arc<Value>) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(
                url.to_string(),
                CacheEntry {
                    fetched_at: Instant::now(),
                    payload,
                },
            );
        }
    }
}

//! Per-user command ratelimiting.
//!
//! Each user owns a fixed window bucket that allows `max_uses` commands per `window`. Buckets
//! live only in memory and are swept by the ratelimit scheduler once they have expired.

use serenity::all::UserId;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

/// Command usage of a single user within the current window.
struct Bucket {
    window_start: Instant,
    uses: u32,
}

impl Bucket {
    fn is_expired(&self, now: Instant, window: Duration) -> bool {
        now.saturating_duration_since(self.window_start) >= window
    }
}

#[derive(Clone)]
pub struct RatelimitService {
    max_uses: u32,
    window: Duration,
    buckets: Arc<Mutex<HashMap<UserId, Bucket>>>,
}

impl RatelimitService {
    pub fn new(max_uses: u32, window: Duration) -> Self {
        Self {
            max_uses,
            window,
            buckets: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Records one command use for `user_id`.
    ///
    /// # Returns
    /// - `None` - The use fits in the user's budget and was counted
    /// - `Some(retry_after)` - The budget is spent; the use was not counted
    pub async fn hit(&self, user_id: UserId, now: Instant) -> Option<Duration> {
        let mut buckets = self.buckets.lock().await;

        let bucket = buckets.entry(user_id).or_insert(Bucket {
            window_start: now,
            uses: 0,
        });

        if bucket.is_expired(now, self.window) {
            bucket.window_start = now;
            bucket.uses = 0;
        }

        if bucket.uses >= self.max_uses {
            let elapsed = now.saturating_duration_since(bucket.window_start);
            return Some(self.window.saturating_sub(elapsed));
        }

        bucket.uses += 1;
        None
    }

    /// Drops every bucket whose window has ended.
    ///
    /// # Returns
    /// - Number of buckets removed
    pub async fn purge_expired(&self, now: Instant) -> usize {
        let mut buckets = self.buckets.lock().await;
        let before = buckets.len();

        buckets.retain(|_, bucket| !bucket.is_expired(now, self.window));

        before - buckets.len()
    }

    pub async fn tracked_users(&self) -> usize {
        self.buckets.lock().await.len()
    }
}

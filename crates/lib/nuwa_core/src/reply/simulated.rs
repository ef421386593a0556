//! Simulated reply policy: random "thinking" delay, then a canned reply.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::canned::SIMULATED_REPLIES;
use super::{ReplyError, ReplyPolicy};

/// Lower bound of the default thinking delay.
pub const DEFAULT_MIN_DELAY: Duration = Duration::from_millis(1_000);

/// Upper bound of the default thinking delay.
pub const DEFAULT_MAX_DELAY: Duration = Duration::from_millis(3_000);

/// Picks a reply uniformly from a fixed set after a uniformly random delay.
///
/// The random source is an owned [`StdRng`]; construct with
/// [`SimulatedReplyPolicy::seeded`] for reproducible runs.
pub struct SimulatedReplyPolicy {
    replies: Vec<String>,
    min_delay: Duration,
    max_delay: Duration,
    rng: Mutex<StdRng>,
}

impl SimulatedReplyPolicy {
    /// Policy seeded from the OS random source.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Policy with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            replies: SIMULATED_REPLIES.iter().map(|s| s.to_string()).collect(),
            min_delay: DEFAULT_MIN_DELAY,
            max_delay: DEFAULT_MAX_DELAY,
            rng: Mutex::new(rng),
        }
    }

    /// Override the delay range. Bounds are swapped if given out of order.
    pub fn with_delay(mut self, min: Duration, max: Duration) -> Self {
        if min <= max {
            self.min_delay = min;
            self.max_delay = max;
        } else {
            self.min_delay = max;
            self.max_delay = min;
        }
        self
    }

    /// Override the reply set. An empty set keeps the current replies.
    pub fn with_replies<I, S>(mut self, replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let replies: Vec<String> = replies.into_iter().map(Into::into).collect();
        if !replies.is_empty() {
            self.replies = replies;
        }
        self
    }

    pub fn delay_range(&self) -> (Duration, Duration) {
        (self.min_delay, self.max_delay)
    }

    pub fn replies(&self) -> &[String] {
        &self.replies
    }

    /// Draw the delay and reply for the next turn.
    fn draw(&self) -> (Duration, String) {
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        let min_ms = self.min_delay.as_millis() as u64;
        let max_ms = self.max_delay.as_millis() as u64;
        let delay = Duration::from_millis(rng.random_range(min_ms..=max_ms));
        let reply = self
            .replies
            .choose(&mut *rng)
            .cloned()
            .unwrap_or_default();
        (delay, reply)
    }
}

impl Default for SimulatedReplyPolicy {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReplyPolicy for SimulatedReplyPolicy {
    fn name(&self) -> &'static str {
        "simulated"
    }

    async fn acquire(&self, text: &str) -> Result<String, ReplyError> {
        let (delay, reply) = self.draw();
        debug!(
            delay_ms = delay.as_millis() as u64,
            chars = text.chars().count(),
            "simulating reply"
        );
        tokio::time::sleep(delay).await;
        Ok(reply)
    }
}

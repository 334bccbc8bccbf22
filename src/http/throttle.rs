//! Optional cap on the request rate of a client
//!
//! Page launches are already spaced by the pacing delay. A quota adds a hard
//! ceiling on top of that, shared by every in-flight page fetch of one client.

use crate::error::{Error, Result};
use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};
use std::num::NonZeroU32;
use std::sync::Arc;

/// Requests allowed per second, with a burst allowance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestQuota {
    per_second: NonZeroU32,
    burst: NonZeroU32,
}

impl RequestQuota {
    /// Create a quota; both values must be nonzero
    pub fn new(per_second: u32, burst: u32) -> Result<Self> {
        let nonzero = |value: u32, name: &str| {
            NonZeroU32::new(value)
                .ok_or_else(|| Error::config(format!("{name} must be greater than zero")))
        };
        Ok(Self {
            per_second: nonzero(per_second, "requests_per_second")?,
            burst: nonzero(burst, "burst")?,
        })
    }

    /// Quota whose burst equals its per-second rate
    pub fn per_second(per_second: u32) -> Result<Self> {
        Self::new(per_second, per_second)
    }

    pub fn requests_per_second(&self) -> u32 {
        self.per_second.get()
    }

    pub fn burst(&self) -> u32 {
        self.burst.get()
    }
}

/// Shared token bucket enforcing a `RequestQuota`
#[derive(Clone)]
pub struct Throttle {
    bucket: Arc<DefaultDirectRateLimiter>,
}

impl Throttle {
    pub fn new(quota: RequestQuota) -> Self {
        let quota = Quota::per_second(quota.per_second).allow_burst(quota.burst);
        Self {
            bucket: Arc::new(RateLimiter::direct(quota)),
        }
    }

    /// Suspend until the next request fits the quota
    pub async fn acquire(&self) {
        self.bucket.until_ready().await;
    }

    /// Take a permit if one is free right now
    pub fn try_acquire(&self) -> bool {
        self.bucket.check().is_ok()
    }
}

impl std::fmt::Debug for Throttle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Throttle").finish_non_exhaustive()
    }
}

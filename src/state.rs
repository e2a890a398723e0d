use crate::config::AppConfig;
use portable_atomic::{AtomicU64, Ordering};
use std::sync::Arc;

// ── Request Counters (lock-free) ──

pub struct RequestCounters {
    pub requests_received: AtomicU64,
    pub analyses_completed: AtomicU64,
    pub requests_rejected: AtomicU64,
}

impl RequestCounters {
    pub fn new() -> Self {
        Self {
            requests_received: AtomicU64::new(0),
            analyses_completed: AtomicU64::new(0),
            requests_rejected: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn snapshot(&self) -> CounterSnapshot {
        CounterSnapshot {
            requests_received: self.requests_received.load(Ordering::Relaxed),
            analyses_completed: self.analyses_completed.load(Ordering::Relaxed),
            requests_rejected: self.requests_rejected.load(Ordering::Relaxed),
        }
    }
}

impl Default for RequestCounters {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct CounterSnapshot {
    pub requests_received: u64,
    pub analyses_completed: u64,
    pub requests_rejected: u64,
}

// ── Application shared state ──
// Analysis itself is pure; the only shared data is config and counters.

pub struct AppState {
    pub config: AppConfig,
    pub counters: RequestCounters,
}

impl AppState {
    pub fn new(config: AppConfig) -> Arc<Self> {
        Arc::new(Self {
            config,
            counters: RequestCounters::new(),
        })
    }
}

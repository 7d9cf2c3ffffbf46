use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::AppError;

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsData {
    pub replies: u64,
    /// Requests refused before reaching the provider (bad method, empty message).
    pub rejected: u64,
    pub upstream_failures: u64,
}

#[derive(Debug, Default)]
struct Counters {
    replies: AtomicU64,
    rejected: AtomicU64,
    upstream_failures: AtomicU64,
}

#[derive(Debug, Clone, Default)]
pub struct MetricsManager {
    inner: Arc<Counters>,
}

impl MetricsManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_reply(&self) {
        self.inner.replies.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_error(&self, err: &AppError) {
        let counter = match err {
            AppError::MethodNotAllowed | AppError::EmptyMessage => &self.inner.rejected,
            AppError::UpstreamInvalidResponse | AppError::Internal(_) => {
                &self.inner.upstream_failures
            }
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn get_metrics(&self) -> MetricsData {
        MetricsData {
            replies: self.inner.replies.load(Ordering::Relaxed),
            rejected: self.inner.rejected.load(Ordering::Relaxed),
            upstream_failures: self.inner.upstream_failures.load(Ordering::Relaxed),
        }
    }
}

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

//process-wide registry - plain relaxed atomics, the only contract is "monotonically non-decreasing"
#[derive(Default)]
pub struct Metrics {
    personalized_gets: AtomicU64,
    all_gets_count: AtomicU64,
    all_gets_nanos: AtomicU64,
}

impl Metrics {
    pub fn inc_personalized_gets(&self) {
        self.personalized_gets.fetch_add(1, Ordering::Relaxed);
    }

    //one timer sample = one call's duration folded into (count, cumulative nanos)
    pub fn record_get(&self, elapsed: Duration) {
        self.all_gets_count.fetch_add(1, Ordering::Relaxed);
        self.all_gets_nanos
            .fetch_add(elapsed.as_nanos() as u64, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            personalized_gets: self.personalized_gets.load(Ordering::Relaxed),
            all_gets: TimerSnapshot {
                count: self.all_gets_count.load(Ordering::Relaxed),
                elapsed_nanos: self.all_gets_nanos.load(Ordering::Relaxed),
            },
        }
    }
}

#[derive(serde::Serialize)]
pub struct MetricsSnapshot {
    #[serde(rename = "personalizedGets")]
    pub personalized_gets: u64,
    #[serde(rename = "allGets")]
    pub all_gets: TimerSnapshot,
}

#[derive(serde::Serialize)]
pub struct TimerSnapshot {
    pub count: u64,
    #[serde(rename = "elapsedNanos")]
    pub elapsed_nanos: u64,
}

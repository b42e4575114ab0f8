//! Источник времени для проводок и сессий.

use std::fmt::Debug;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::domain::Timestamp;

/// Откуда берём "сейчас".
pub trait Clock: Debug {
    fn now_millis(&self) -> Timestamp;
}

/// Системные часы.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> Timestamp {
        // Часы до 1970 года – считаем нулём, а не паникуем.
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as Timestamp)
            .unwrap_or(0)
    }
}

/// Детерминированные часы для тестов: каждый вызов сдвигает время на `step`.
#[derive(Debug)]
pub struct FixedClock {
    current: AtomicU64,
    step: u64,
}

impl FixedClock {
    pub fn new(start: Timestamp) -> Self {
        Self::with_step(start, 0)
    }

    pub fn with_step(start: Timestamp, step: u64) -> Self {
        Self {
            current: AtomicU64::new(start),
            step,
        }
    }
}

impl Clock for FixedClock {
    fn now_millis(&self) -> Timestamp {
        self.current.fetch_add(self.step, Ordering::Relaxed)
    }
}

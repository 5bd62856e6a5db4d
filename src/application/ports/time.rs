// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Source of "now" for timestamps written by the in-process providers.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

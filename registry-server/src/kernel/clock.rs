use {
    super::entities::UnixTimestampNanos,
    std::fmt::Debug,
    time::OffsetDateTime,
};

/// Source of the current time.
///
/// Injected into the service at construction so tests can run against a
/// deterministic clock instead of the wall clock.
pub trait Clock: Debug + Send + Sync + 'static {
    fn now(&self) -> UnixTimestampNanos;
}

#[derive(Clone, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> UnixTimestampNanos {
        OffsetDateTime::now_utc().unix_timestamp_nanos() as UnixTimestampNanos
    }
}

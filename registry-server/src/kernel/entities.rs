use uuid::Uuid;

/// The stable identity of a caller, as established by the gateway in front of
/// this service.
pub type CallerId = Uuid;

/// Nanoseconds since the Unix epoch.
pub type UnixTimestampNanos = u64;

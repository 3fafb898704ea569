mod datetime;
mod logs;
mod metrics;
mod otel;
mod shutdown;

pub use self::datetime::{iso8601, parse_datetime, to_iso8601};
pub use self::logs::init_logger;
pub use self::metrics::{Method, Metrics, Status};
pub use self::otel::{Telemetry, TelemetryProviders, TracingContext};
pub use self::shutdown::shutdown_signal;

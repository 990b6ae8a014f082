//! Shared constants and invariants

pub const DEFAULT_BIND: &str = ":8080";

pub const GREETING: &str = "Hello from example application.";
pub const NOT_FOUND_BODY: &str = "404 page not found\n";

// Metric names and help texts
pub const HTTP_REQUESTS_TOTAL: &str = "http_requests_total";
pub const HTTP_REQUESTS_TOTAL_HELP: &str = "Count of all HTTP requests";
pub const VERSION_METRIC: &str = "version";
pub const VERSION_METRIC_HELP: &str = "Version information about this binary";

/// Value of the constant `version` label; the gauge itself is never set.
pub const VERSION_LABEL: &str = "v0.1.0";

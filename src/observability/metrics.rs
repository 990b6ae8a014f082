use anyhow::Result;
use http::{Method, StatusCode};
use prometheus::core::Collector;
use prometheus::{Encoder, Gauge, IntCounterVec, Opts, Registry, TextEncoder, TEXT_FORMAT};
use tracing::info;

use crate::utils::constants::{
    HTTP_REQUESTS_TOTAL, HTTP_REQUESTS_TOTAL_HELP, VERSION_LABEL, VERSION_METRIC,
    VERSION_METRIC_HELP,
};

/// Registry plus the metrics served on the scrape route.
///
/// Built once by the bootstrap and shared through the router state, so every
/// test can start from a fresh registry.
#[derive(Clone)]
pub struct Metrics {
    pub registry: Registry,

    /// Served requests by `code` and `method`
    pub http_requests_total: IntCounterVec,
    /// Never set; the version only lives in the constant label
    pub version: Gauge,
}

impl Metrics {
    pub fn new() -> Result<Self> {
        info!("Initializing Metrics ...");
        let registry = Registry::new();

        let metrics = Self {
            http_requests_total: IntCounterVec::new(
                Opts::new(HTTP_REQUESTS_TOTAL, HTTP_REQUESTS_TOTAL_HELP),
                &["code", "method"],
            )?,
            version: Gauge::with_opts(
                Opts::new(VERSION_METRIC, VERSION_METRIC_HELP).const_label("version", VERSION_LABEL),
            )?,
            registry,
        };

        // Register all metrics in the registry
        let reg = &metrics.registry;
        reg.register(Box::new(metrics.http_requests_total.clone()))?;
        reg.register(Box::new(metrics.version.clone()))?;

        Ok(metrics)
    }

    /// Count one served request under the response status and request method.
    pub fn observe(&self, status: StatusCode, method: &Method) {
        self.http_requests_total
            .with_label_values(&[status.as_str(), method_label(method)])
            .inc();
    }

    /// Text exposition of every registered metric, families sorted by name.
    ///
    /// The registry drops families without samples when gathering; their
    /// HELP and TYPE lines are added back so a fresh counter stays visible.
    pub fn render(&self) -> Result<String> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;

        let mut families = split_families(&String::from_utf8(buffer)?);
        let declared = [
            (&self.http_requests_total as &dyn Collector, "counter"),
            (&self.version as &dyn Collector, "gauge"),
        ];
        for (collector, kind) in declared {
            for desc in collector.desc() {
                if families.iter().any(|(name, _)| *name == desc.fq_name) {
                    continue;
                }
                let header = format!(
                    "# HELP {name} {help}\n# TYPE {name} {kind}\n",
                    name = desc.fq_name,
                    help = escape_help(&desc.help),
                );
                families.push((desc.fq_name.clone(), header));
            }
        }
        families.sort_by(|a, b| a.0.cmp(&b.0));

        Ok(families.into_iter().map(|(_, block)| block).collect())
    }
}

/// `Content-Type` of the text exposition.
pub const SCRAPE_CONTENT_TYPE: &str = TEXT_FORMAT;

/// Lower-cased name of a standard method; every other method shares `unknown`
/// so clients cannot grow the label space.
fn method_label(method: &Method) -> &'static str {
    match method.as_str() {
        "GET" => "get",
        "HEAD" => "head",
        "POST" => "post",
        "PUT" => "put",
        "DELETE" => "delete",
        "CONNECT" => "connect",
        "OPTIONS" => "options",
        "TRACE" => "trace",
        "PATCH" => "patch",
        _ => "unknown",
    }
}

/// Split encoded text into `(family name, block)` pairs; every block opens with `# HELP`.
fn split_families(text: &str) -> Vec<(String, String)> {
    let mut families: Vec<(String, String)> = Vec::new();
    for line in text.lines() {
        if let Some(rest) = line.strip_prefix("# HELP ") {
            let name = rest.split(' ').next().unwrap_or_default();
            families.push((name.to_owned(), String::new()));
        }
        if let Some((_, block)) = families.last_mut() {
            block.push_str(line);
            block.push('\n');
        }
    }
    families
}

fn escape_help(help: &str) -> String {
    help.replace('\\', "\\\\").replace('\n', "\\n")
}

//! Global `tracing` subscriber setup shared by the server and the admin CLI.

use crate::config::Config;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

/// Installs the global subscriber: plain text or JSON per `LOG_FORMAT`,
/// filtered by `RUST_LOG`, written to `writer`.
///
/// An unparsable filter falls back to `info`.
pub fn init_tracing<W>(config: &Config, writer: W)
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let filter =
        EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer);

    if config.log_format == "json" {
        builder.json().with_target(false).init();
    } else {
        builder.init();
    }
}

use tracing_subscriber::EnvFilter;

use crate::report::Verbosity;

/// Log to stderr. Dependencies stay at `warn`; this crate logs at `info`, or
/// `debug` in verbose mode.
pub fn init_logging(verbosity: Verbosity) {
    let filter = EnvFilter::new(filter_directive(verbosity));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn filter_directive(verbosity: Verbosity) -> &'static str {
    match verbosity {
        Verbosity::Normal => "warn,petstore=info",
        Verbosity::Verbose => "warn,petstore=debug",
    }
}

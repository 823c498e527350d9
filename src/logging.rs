// src/logging.rs
// =============================================================================
// Diagnostic logging.
//
// Progress for the user is printed with println! in main.rs. This module sets
// up `tracing` for the extra detail behind it (request URL, status, section
// offsets, directory operations), written to stderr so it never mixes with
// `fetch --json` output on stdout.
//
// The filter comes from DUMP_EXAM_LOG when set, e.g.
//   DUMP_EXAM_LOG=dump_exam=trace dump-exam build
// =============================================================================

use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "DUMP_EXAM_LOG";

pub fn init_tracing(verbose: bool) {
    let filter = std::env::var(LOG_ENV).unwrap_or_else(|_| default_filter(verbose).to_string());

    // try_init: a second call (e.g. from tests) is not an error
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(EnvFilter::new(filter))
        .try_init();
}

fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "dump_exam=debug"
    } else {
        "dump_exam=info"
    }
}

use std::process::ExitCode;

use cpu_sched_sim::shell;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let status = shell::run_main(std::env::args().skip(1), &mut std::io::stdout().lock());
    ExitCode::from(status)
}

use atomicx_emoji::cli::{parse_args, run_cli_command};
use color_eyre::Result;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();

    let command = parse_args(std::env::args());
    let mut stdout = std::io::stdout().lock();
    run_cli_command(command, &mut stdout)
}

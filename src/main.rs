use anyhow::Result;

use endpoint_freq::cli::{run, Cli};
use endpoint_freq::logging::{init_logging, LoggingConfig};

fn main() -> Result<()> {
    let cli = Cli::from_args(std::env::args_os()).unwrap_or_else(|e| e.exit());

    init_logging(&LoggingConfig::default())?;

    let value = run(&cli)?;
    println!("{}", value);

    Ok(())
}

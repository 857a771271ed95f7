use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{error::ErrorKind, CommandFactory, Parser};
use tracing::info;

use crate::freq_table::TableScanner;
use crate::input::read_text_lossy;
use crate::logging::PerformanceTimer;

#[derive(Parser, Debug)]
#[command(name = "endpoint_freq")]
#[command(about = "Print the Freq(MHz) value of the first row of the Endpoint/Freq(MHz) table")]
#[command(disable_help_flag = true)]
pub struct Cli {
    /// Text report containing the table
    pub path: PathBuf,
}

impl Cli {
    /// Build from the process arguments, program name first.
    ///
    /// Every argument after the program name counts, `--` and `-h` included,
    /// and exactly one must remain. Anything else is a usage error (exit 2).
    pub fn from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut paths: Vec<OsString> = args.into_iter().skip(1).map(Into::into).collect();

        if paths.len() != 1 {
            let mut cmd = Self::command();
            return Err(cmd.error(
                ErrorKind::WrongNumberOfValues,
                format!("expected exactly one path, got {}", paths.len()),
            ));
        }

        Ok(Self {
            path: PathBuf::from(paths.remove(0)),
        })
    }
}

/// Read the report and return the value to print
pub fn run(cli: &Cli) -> Result<String> {
    let timer = PerformanceTimer::start(format!("extract {}", cli.path.display()));

    let input = read_text_lossy(&cli.path)?;
    timer.checkpoint("read");

    let reading = TableScanner::new()
        .scan(&input.text)
        .with_context(|| format!("No Freq(MHz) value in {}", cli.path.display()))?;
    timer.checkpoint("scan");

    info!(
        "✅ Freq(MHz) = {} (header line {}, row line {})",
        reading.value,
        reading.header_line + 1,
        reading.row.line_number + 1
    );
    Ok(reading.value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_exactly_one_path() {
        let cli = Cli::from_args(["endpoint_freq", "a.txt"]).unwrap();
        assert_eq!(cli.path, PathBuf::from("a.txt"));
    }

    #[test]
    fn test_usage_errors_exit_with_two() {
        for args in [
            vec!["endpoint_freq"],
            vec!["endpoint_freq", "a.txt", "b.txt"],
            vec!["endpoint_freq", "--", "a.txt"],
            vec!["endpoint_freq", "a.txt", "--"],
        ] {
            let err = Cli::from_args(args.clone()).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::WrongNumberOfValues, "{:?}", args);
            assert_eq!(err.exit_code(), 2, "{:?}", args);
        }
    }

    #[test]
    fn test_flags_are_paths() {
        for flag in ["--help", "-h", "--version", "-report.txt", "--"] {
            let cli = Cli::from_args(["endpoint_freq", flag]).unwrap();
            assert_eq!(cli.path, PathBuf::from(flag));
        }
    }

    #[test]
    fn test_usage_error_mentions_usage() {
        let err = Cli::from_args(["endpoint_freq"]).unwrap_err();
        let rendered = err.render().to_string();
        assert!(rendered.contains("expected exactly one path, got 0"));
        assert!(rendered.contains("Usage:"));
    }

    #[test]
    fn test_run_returns_value() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("report.txt");
        fs::write(
            &path,
            "+----+----+\n| Endpoint | Freq(MHz) |\n+----+----+\n| core0 | 2400 |\n",
        )
        .unwrap();

        let value = run(&Cli { path }).unwrap();
        assert_eq!(value, "2400");
    }

    #[test]
    fn test_run_reports_missing_header() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("report.txt");
        fs::write(&path, "| Endpoint | Latency |\n| core0 | 3 |\n").unwrap();

        let err = run(&Cli { path }).unwrap_err();
        let chain = format!("{:#}", err);
        assert!(chain.contains("No Freq(MHz) value"));
        assert!(chain.contains("Could not find a table header"));
    }
}

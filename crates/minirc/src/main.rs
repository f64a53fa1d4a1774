mod cmd;
mod exit;
mod logging;
mod output;

use clap::Parser;

use crate::cmd::Command;
use crate::logging::{init_logging, LogLevel};
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "minirc", version, about = "MINI RC control frame CLI")]
struct Cli {
    /// Output format.
    #[arg(long, value_name = "FORMAT", global = true)]
    format: Option<OutputFormat>,

    /// Minimum log level (stderr).
    #[arg(long, value_name = "LEVEL", default_value = "info", global = true)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Command,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    let format = cli.format.unwrap_or_else(OutputFormat::default_for_stdout);
    let result = cmd::run(cli.command, format);

    match result {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(err.code);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_checksum_subcommand() {
        let cli = Cli::try_parse_from(["minirc", "checksum", "--left-trim", "0x1f"])
            .expect("checksum args should parse");

        assert!(matches!(cli.command, Command::Checksum(_)));
    }

    #[test]
    fn rejects_oversized_byte_value() {
        let err = Cli::try_parse_from(["minirc", "checksum", "--yaw", "0x1ff"])
            .expect_err("three-digit byte should fail");

        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn parses_control_floats() {
        let cli = Cli::try_parse_from(["minirc", "control", "--throttle", "0.75", "--yaw", "0.5"])
            .expect("control args should parse");

        match cli.command {
            Command::Control(args) => assert_eq!(args.throttle, 0.75),
            other => panic!("expected control command, got {other:?}"),
        }
    }

    #[test]
    fn format_flag_is_global() {
        let cli = Cli::try_parse_from(["minirc", "frame", "--format", "raw"])
            .expect("trailing global flag should parse");

        assert!(matches!(cli.command, Command::Frame(_)));
    }
}

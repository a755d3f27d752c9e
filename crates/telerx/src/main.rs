mod cmd;
mod exit;
mod logging;
mod output;

use clap::Parser;

use crate::cmd::Command;
use crate::logging::{init_logging, LogFormat, LogLevel};

#[derive(Parser, Debug)]
#[command(
    name = "telerx",
    version,
    about = "Telemetry state receiver — stream, validate, capture, replay"
)]
struct Cli {
    /// Log output format (stderr).
    #[arg(long, value_name = "FORMAT", default_value = "text", global = true)]
    log_format: LogFormat,

    /// Minimum log level (stderr).
    #[arg(long, value_name = "LEVEL", default_value = "info", global = true)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Command,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_format, cli.log_level);

    match cmd::run(cli.command).await {
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
    fn parses_stream_subcommand() {
        let cli = Cli::try_parse_from(["telerx", "stream", "sych.local"])
            .expect("stream args should parse");
        assert!(matches!(cli.command, Command::Stream(_)));
    }

    #[test]
    fn parses_stream_with_capture_count() {
        let cli = Cli::try_parse_from(["telerx", "stream", "sych.local", "--capture", "10"])
            .expect("capture args should parse");
        match cli.command {
            Command::Stream(args) => assert_eq!(args.capture, Some(10)),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_replay_subcommand() {
        let cli = Cli::try_parse_from(["telerx", "replay", "dumps/state_0001.bin", "--compact"])
            .expect("replay args should parse");
        match cli.command {
            Command::Replay(args) => {
                assert!(args.compact);
                assert_eq!(args.file.to_string_lossy(), "dumps/state_0001.bin");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn rejects_non_numeric_capture_count() {
        let err = Cli::try_parse_from(["telerx", "stream", "host", "--capture", "lots"])
            .expect_err("bad capture count should fail");
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn replay_requires_a_file() {
        assert!(Cli::try_parse_from(["telerx", "replay"]).is_err());
    }
}

use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::exit::CliResult;

pub mod replay;
pub mod stream;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Connect and stream live state from a telemetry endpoint.
    Stream(StreamArgs),
    /// Read, validate and print a previously captured payload.
    Replay(ReplayArgs),
}

pub async fn run(command: Command) -> CliResult<i32> {
    match command {
        Command::Stream(args) => stream::run(args).await,
        Command::Replay(args) => replay::run(args),
    }
}

#[derive(Args, Debug)]
pub struct StreamArgs {
    /// Hostname or IP address of the telemetry endpoint.
    pub host: String,

    /// Endpoint port.
    #[arg(long, default_value_t = 443)]
    pub port: u16,

    /// WebSocket path of the state stream.
    #[arg(long, value_name = "PATH", default_value = "/ws/ws_state")]
    pub ws_path: String,

    /// Capture N raw payloads to the capture directory, then exit.
    #[arg(long, value_name = "N")]
    pub capture: Option<u32>,

    /// Directory for captured payloads.
    #[arg(long, value_name = "DIR", default_value = "dumps")]
    pub capture_dir: PathBuf,

    /// Render snapshots on one line instead of indented.
    #[arg(long)]
    pub compact: bool,
}

#[derive(Args, Debug)]
pub struct ReplayArgs {
    /// Captured payload file to validate.
    pub file: PathBuf,

    /// Render the snapshot on one line instead of indented.
    #[arg(long)]
    pub compact: bool,
}

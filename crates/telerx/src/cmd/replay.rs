use telerx_capture::CaptureStore;
use telerx_validate::StateValidator;

use crate::cmd::ReplayArgs;
use crate::exit::{capture_error, CliError, CliResult, DATA_INVALID, SUCCESS};
use crate::output;

/// Replay mode: one captured payload through the same validation path as
/// the live stream, no transport session.
pub fn run(args: ReplayArgs) -> CliResult<i32> {
    let data =
        CaptureStore::read(&args.file).map_err(|err| capture_error("replay failed", err))?;
    tracing::info!(path = %args.file.display(), bytes = data.len(), "replaying capture");

    let validator = StateValidator::new();
    let validation = validator.parse_and_validate(&data);
    output::print_outcome(&validation.outcome);

    match validation.snapshot {
        Some(snapshot) => {
            println!("{}", output::render_snapshot(&snapshot, args.compact));
            // Semantic findings are reported above; only a decode failure
            // makes the replay itself fail.
            Ok(SUCCESS)
        }
        None => {
            let message = validation
                .outcome
                .errors
                .first()
                .map(String::as_str)
                .unwrap_or("undecodable message");
            println!("{}", output::render_error(message, args.compact));
            Err(CliError::new(
                DATA_INVALID,
                format!("replay failed: {message}"),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::exit::FAILURE;

    fn make_temp_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "telerx-replay-{tag}-{}-{}",
            std::process::id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn replay_args(file: PathBuf) -> ReplayArgs {
        ReplayArgs {
            file,
            compact: true,
        }
    }

    #[test]
    fn undecodable_capture_fails_with_data_invalid() {
        let dir = make_temp_dir("bad-bytes");
        let path = dir.join("state_0001.bin");
        std::fs::write(&path, b"\x00\x01\x02 not a snapshot").unwrap();

        let err = run(replay_args(path)).expect_err("garbage should fail");
        assert_eq!(err.code, DATA_INVALID);
        assert!(err.message.contains("failed to parse message"));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn decodable_but_incomplete_capture_still_succeeds() {
        let dir = make_temp_dir("incomplete");
        let path = dir.join("state_0001.bin");
        std::fs::write(&path, br#"{"protocol_version": 1}"#).unwrap();

        // Missing structures are reported in the outcome, not the exit
        // status; only transport and decode errors fail a run.
        let code = run(replay_args(path)).expect("decoded capture should succeed");
        assert_eq!(code, SUCCESS);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_file_fails_before_validation() {
        let err = run(replay_args(PathBuf::from("/nonexistent/state_9999.bin")))
            .expect_err("missing file should fail");
        assert_eq!(err.code, FAILURE);
    }

    #[test]
    fn empty_file_is_invalid_data() {
        let dir = make_temp_dir("empty");
        let path = dir.join("state_0001.bin");
        std::fs::write(&path, b"").unwrap();

        let err = run(replay_args(path)).expect_err("empty capture should fail");
        assert_eq!(err.code, DATA_INVALID);

        let _ = std::fs::remove_dir_all(&dir);
    }
}

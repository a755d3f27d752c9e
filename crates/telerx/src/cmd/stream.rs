use telerx_capture::CaptureStore;
use telerx_transport::{Endpoint, SessionConfig, SessionEvent, SessionHandle, WsSession};
use telerx_validate::StateValidator;

use crate::cmd::StreamArgs;
use crate::exit::{transport_error, CliError, CliResult, SUCCESS, USAGE};
use crate::output;

pub async fn run(args: StreamArgs) -> CliResult<i32> {
    if args.capture == Some(0) {
        return Err(CliError::new(USAGE, "capture count must be positive"));
    }

    let endpoint = Endpoint::new(&args.host)
        .with_port(args.port)
        .with_path(&args.ws_path);
    println!("Connecting to {}", endpoint.url(true));

    let mut session = WsSession::with_config(endpoint, SessionConfig::default());
    let handle = session.handle();

    let mut controller = StreamController::new(
        StateValidator::new(),
        CaptureStore::new(&args.capture_dir),
        args.capture,
        handle.clone(),
        args.compact,
    );

    // Interactive interrupt requests graceful teardown; the session loop
    // observes the cancellation on its next iteration.
    let signal_handle = handle.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("interrupt received, shutting down");
            signal_handle.disconnect();
        }
    });

    session
        .connect()
        .map_err(|err| transport_error("connect failed", err))?;
    let result = session.run(|event| controller.on_event(event)).await;

    println!("Total messages received: {}", controller.message_count());

    match result {
        Ok(()) => Ok(SUCCESS),
        Err(err) => Err(transport_error("stream failed", err)),
    }
}

/// Live-stream policy: capture raw payloads while the quota is open, stop
/// the session when it is reached, validate and project otherwise.
///
/// Only this controller knows about the quota and mode selection; the
/// session and the validator are mode-agnostic.
struct StreamController {
    validator: StateValidator,
    store: CaptureStore,
    quota: Option<u32>,
    captured: u32,
    messages: u64,
    handle: SessionHandle,
    compact: bool,
}

impl StreamController {
    fn new(
        validator: StateValidator,
        store: CaptureStore,
        quota: Option<u32>,
        handle: SessionHandle,
        compact: bool,
    ) -> Self {
        Self {
            validator,
            store,
            quota,
            captured: 0,
            messages: 0,
            handle,
            compact,
        }
    }

    fn message_count(&self) -> u64 {
        self.messages
    }

    fn on_event(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::Connected => println!("Connected"),
            SessionEvent::Closed => println!("Disconnected"),
            SessionEvent::Error(message) => eprintln!("Error: {message}"),
            SessionEvent::Message(bytes) => self.on_message(&bytes),
        }
    }

    fn on_message(&mut self, bytes: &[u8]) {
        self.messages += 1;
        println!("\n=== Message #{} ({} bytes) ===", self.messages, bytes.len());

        if let Some(quota) = self.quota {
            if self.captured < quota {
                self.capture(bytes, quota);
                return;
            }
        }

        let validation = self.validator.parse_and_validate(bytes);
        output::print_outcome(&validation.outcome);
        match validation.snapshot {
            Some(snapshot) => println!("{}", output::render_snapshot(&snapshot, self.compact)),
            None => {
                let message = validation
                    .outcome
                    .errors
                    .first()
                    .map(String::as_str)
                    .unwrap_or("undecodable message");
                println!("{}", output::render_error(message, self.compact));
            }
        }
    }

    fn capture(&mut self, bytes: &[u8], quota: u32) {
        let sequence = self.captured + 1;
        match self.store.save(bytes, sequence) {
            Ok(path) => {
                self.captured = sequence;
                println!("Saved capture {sequence}/{quota} to {}", path.display());
                if self.captured >= quota {
                    println!("Capture complete.");
                    self.handle.disconnect();
                }
            }
            // A failed save is surfaced and the attempt abandoned; the
            // captured count stays put so the quota is still honest.
            Err(err) => eprintln!("Capture failed: {err}"),
        }
    }
}

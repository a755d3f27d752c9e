//! Integration tests against local servers: a stalled listener for the
//! handshake-failure path and a plaintext WebSocket server for the live
//! stream path.

use std::time::Duration;

use futures_util::SinkExt;
use telerx_transport::{Endpoint, SessionConfig, SessionEvent, TransportError, WsSession};
use tokio::net::TcpListener;
use tokio_tungstenite::tungstenite::protocol::Message;

fn local_config() -> SessionConfig {
    SessionConfig {
        connect_timeout: Duration::from_millis(500),
        use_tls: false,
        ..SessionConfig::default()
    }
}

fn local_session(port: u16, config: SessionConfig) -> WsSession {
    let endpoint = Endpoint::new("127.0.0.1").with_port(port);
    WsSession::with_config(endpoint, config)
}

#[tokio::test]
async fn stalled_handshake_reports_one_error_and_returns() {
    // A listener that accepts TCP but never answers the WebSocket
    // handshake; run() must give up within the configured bound.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    let server = tokio::spawn(async move {
        let (_socket, _addr) = listener.accept().await.unwrap();
        tokio::time::sleep(Duration::from_secs(5)).await;
    });

    let mut session = local_session(port, local_config());
    session.connect().unwrap();

    let mut events = Vec::new();
    let result = session.run(|event| events.push(event)).await;

    assert!(matches!(result, Err(TransportError::HandshakeTimeout(_))));
    let errors = events
        .iter()
        .filter(|e| matches!(e, SessionEvent::Error(_)))
        .count();
    assert_eq!(errors, 1);
    assert!(!events
        .iter()
        .any(|e| matches!(e, SessionEvent::Message(_) | SessionEvent::Connected)));

    server.abort();
}

#[tokio::test]
async fn refused_connection_fails_handshake() {
    // Bind then drop to get a port nothing listens on.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let mut session = local_session(port, local_config());
    session.connect().unwrap();

    let mut events = Vec::new();
    let result = session.run(|event| events.push(event)).await;

    assert!(matches!(result, Err(TransportError::Handshake { .. })));
    assert!(events
        .iter()
        .any(|e| matches!(e, SessionEvent::Error(_))));
}

#[tokio::test]
async fn live_stream_delivers_messages_in_order_then_closes() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();

    let server = tokio::spawn(async move {
        let (socket, _addr) = listener.accept().await.unwrap();
        let mut ws = tokio_tungstenite::accept_async(socket).await.unwrap();
        for index in 0u8..3 {
            ws.send(Message::Binary(vec![index, 0xAA])).await.unwrap();
        }
        ws.close(None).await.unwrap();
    });

    let mut session = local_session(port, local_config());
    session.connect().unwrap();

    let mut events = Vec::new();
    session.run(|event| events.push(event)).await.unwrap();

    assert!(matches!(events.first(), Some(SessionEvent::Connected)));
    assert!(matches!(events.last(), Some(SessionEvent::Closed)));

    let payloads: Vec<&[u8]> = events
        .iter()
        .filter_map(|e| match e {
            SessionEvent::Message(bytes) => Some(bytes.as_ref()),
            _ => None,
        })
        .collect();
    assert_eq!(payloads, vec![&[0u8, 0xAA][..], &[1, 0xAA], &[2, 0xAA]]);

    server.await.unwrap();
}

#[tokio::test]
async fn disconnect_from_handler_stops_the_stream() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();

    let server = tokio::spawn(async move {
        let (socket, _addr) = listener.accept().await.unwrap();
        let mut ws = tokio_tungstenite::accept_async(socket).await.unwrap();
        for _ in 0..50 {
            if ws.send(Message::Binary(vec![0x01])).await.is_err() {
                break;
            }
        }
    });

    let mut session = local_session(port, local_config());
    let handle = session.handle();
    session.connect().unwrap();

    let mut received = 0usize;
    let result = session
        .run(|event| {
            if matches!(event, SessionEvent::Message(_)) {
                received += 1;
                if received == 2 {
                    handle.disconnect();
                }
            }
        })
        .await;

    // Teardown from inside a handler is graceful, not an error.
    assert!(result.is_ok());
    assert_eq!(received, 2);

    server.abort();
}

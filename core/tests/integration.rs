//! End-to-end tests against the live mock server.
//!
//! # Design
//! Each test starts the mock server on a random port and drives the client
//! through the default `UreqTransport`, so query encoding, the identity
//! header, status mapping and JSON decoding are all exercised over real
//! HTTP.

use std::io::{Read, Write};
use std::net::SocketAddr;
use std::time::Duration;

use mock_server::Echo;
use retroachievements_core::{ClientConfig, Error, Params, RaClient, Transport, UreqTransport};

const KEY: &str = "abc123";

/// Start the mock server on a random port and return its address.
fn start_server() -> SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener, KEY).await
        })
        .unwrap();
    });

    addr
}

/// Answer a single connection with a canned status line and raw body.
fn serve_once(status_line: &'static str, body: &'static [u8]) -> SocketAddr {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    std::thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut buf = [0u8; 4096];
        let _ = stream.read(&mut buf);
        let head = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: text/html; charset=iso-8859-1\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            body.len()
        );
        stream.write_all(head.as_bytes()).unwrap();
        stream.write_all(body).unwrap();
    });
    addr
}

fn client_for(addr: SocketAddr, key: &str) -> RaClient {
    RaClient::from_config(ClientConfig::new(key).with_base_url(format!("http://{addr}/API/")))
}

fn echo(value: serde_json::Value) -> Echo {
    serde_json::from_value(value).unwrap()
}

#[test]
fn get_game_over_the_wire() {
    let client = client_for(start_server(), KEY);

    let echo = echo(client.get_game(10).unwrap());
    assert_eq!(echo.endpoint, "API_GetGame.php");
    assert_eq!(echo.query.len(), 2);
    assert_eq!(echo.query["i"], "10");
    assert_eq!(echo.query["y"], "abc123");

    let agent = echo.user_agent.unwrap();
    assert_eq!(agent, format!("RetroAchievements-api-rust/{}", env!("CARGO_PKG_VERSION")));
}

#[test]
fn comments_over_the_wire() {
    let client = client_for(start_server(), KEY);

    let echo = echo(client.get_comments(14402, 2, None, None, Some("submitted")).unwrap());
    assert_eq!(echo.endpoint, "API_GetComments.php");
    let query: Vec<(&str, &str)> = echo
        .query
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    assert_eq!(
        query,
        vec![
            ("c", "100"),
            ("i", "14402"),
            ("o", "0"),
            ("sort", "submitted"),
            ("t", "2"),
            ("y", "abc123"),
        ]
    );
}

#[test]
fn values_are_percent_encoded() {
    let client = client_for(start_server(), KEY);

    let echo = echo(client.get_user_progress("Some User&y=forged", "1, 14402").unwrap());
    assert_eq!(echo.endpoint, "API_GetUserProgress.php");
    assert_eq!(echo.query["u"], "Some User&y=forged");
    assert_eq!(echo.query["i"], "1, 14402");
    assert_eq!(echo.query["y"], "abc123");
}

#[test]
fn caller_supplied_key_is_overridden() {
    let client = client_for(start_server(), KEY);

    let value = client
        .dispatch("API_GetGame.php", Params::new().with("i", 1).with("y", "forged"))
        .unwrap();
    assert_eq!(echo(value).query["y"], "abc123");
}

#[test]
fn date_defaults_reach_the_server() {
    let client = client_for(start_server(), KEY);
    let today = chrono::Local::now().date_naive().format("%Y-%m-%d").to_string();

    let echo = echo(client.get_recent_game_awards(None, None, None, None).unwrap());
    assert_eq!(echo.query["d"], today);
    assert!(!echo.query.contains_key("k"));
}

#[test]
fn wrong_key_is_an_http_status_error() {
    let client = client_for(start_server(), "not-the-key");

    match client.get_game(10).unwrap_err() {
        Error::HttpStatus { status, body } => {
            assert_eq!(status, 401);
            assert!(body.contains("Unauthenticated."));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn unknown_endpoint_is_an_http_status_error() {
    let client = client_for(start_server(), KEY);

    let err = client.dispatch("index.html", Params::new()).unwrap_err();
    assert!(matches!(err, Error::HttpStatus { status: 404, .. }));
}

#[test]
fn response_headers_are_surfaced() {
    let client = client_for(start_server(), KEY);
    let request = client.build_request("API_GetGame.php", Params::new().with("i", 1));

    let response = UreqTransport::new().execute(&request).unwrap();
    assert_eq!(response.status, 200);
    assert_eq!(response.header("Content-Type"), Some("application/json"));
}

#[test]
fn latin1_success_body_is_a_deserialization_error() {
    let client = client_for(serve_once("200 OK", b"<html>\xe9t\xe9</html>"), KEY);

    let err = client.get_game(1).unwrap_err();
    assert!(matches!(err, Error::Deserialization(_)), "{err:?}");
}

#[test]
fn latin1_error_page_is_an_http_status_error() {
    let client = client_for(
        serve_once("500 Internal Server Error", b"<html>erreur interne \xe9</html>"),
        KEY,
    );

    match client.get_game(1).unwrap_err() {
        Error::HttpStatus { status, body } => {
            assert_eq!(status, 500);
            assert!(body.starts_with("<html>erreur interne "), "{body}");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn refused_connection_is_a_transport_error() {
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let client = client_for(addr, KEY);

    let err = client.get_game(10).unwrap_err();
    assert!(matches!(err, Error::Transport(_)), "{err:?}");
}

#[test]
fn slow_server_times_out() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    std::thread::spawn(move || {
        // Accept and hold the connection without ever answering.
        let _held: Vec<_> = listener.incoming().take(1).collect();
        std::thread::sleep(Duration::from_secs(10));
    });

    let config = ClientConfig::new(KEY)
        .with_base_url(format!("http://{addr}/API/"))
        .with_timeout(Duration::from_millis(200));
    let client = RaClient::from_config(config);

    let err = client.get_game(10).unwrap_err();
    assert!(matches!(err, Error::Transport(_)), "{err:?}");
}

#[test]
fn invalid_arguments_fail_before_connecting() {
    // Nothing listens on this address; a validation error proves no
    // connection was attempted.
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let client = client_for(addr, KEY);

    assert!(client.get_game_info_and_user_progress("Jamiras", 1, 2).unwrap_err().is_invalid_argument());
    assert!(client.get_comments(1, 4, None, None, None).unwrap_err().is_invalid_argument());
    assert!(client.get_user_progress("Jamiras", "123a").unwrap_err().is_invalid_argument());
}

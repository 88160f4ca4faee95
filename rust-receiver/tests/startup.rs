//! Process-level startup checks for `slackhook-web`.

use std::net::{Ipv4Addr, SocketAddr, TcpListener, TcpStream};
use std::time::Duration;

use assert_cmd::Command;
use predicates::str::contains;

/// A port that was free a moment ago.
fn free_port() -> u16 {
    TcpListener::bind((Ipv4Addr::LOCALHOST, 0))
        .unwrap()
        .local_addr()
        .unwrap()
        .port()
}

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("slackhook-web").unwrap();
    cmd.env_remove("SLACK_SIGNING_SECRET")
        .env("RUST_LOG", "info")
        .timeout(Duration::from_secs(10));
    cmd
}

#[test]
fn missing_secret_exits_without_listening() {
    let port = free_port();

    cmd()
        .env("PORT", port.to_string())
        .assert()
        .failure()
        .stdout(contains("config_invalid"))
        .stderr(contains("SLACK_SIGNING_SECRET environment variable not specified"));

    let addr = SocketAddr::from((Ipv4Addr::LOCALHOST, port));
    assert!(TcpStream::connect_timeout(&addr, Duration::from_millis(500)).is_err());
}

#[test]
fn empty_secret_exits_without_listening() {
    let port = free_port();

    cmd()
        .env("SLACK_SIGNING_SECRET", "")
        .env("PORT", port.to_string())
        .assert()
        .failure()
        .stderr(contains("Failed to load configuration"));

    let addr = SocketAddr::from((Ipv4Addr::LOCALHOST, port));
    assert!(TcpStream::connect_timeout(&addr, Duration::from_millis(500)).is_err());
}

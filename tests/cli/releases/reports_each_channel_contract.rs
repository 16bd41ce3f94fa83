use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn releases_reports_versions_and_failures_per_channel() {
    let mut server = mockito::Server::new();
    let _production = server
        .mock("GET", "/master/config/dev.php")
        .with_status(200)
        .with_body("<?php return ['version' => '0.8.21'];")
        .create();
    let _development = server
        .mock("GET", "/dev/config/dev.php")
        .with_status(200)
        .with_body("<?php return [];")
        .create();
    let _experimental = server.mock("GET", "/experimental/config/dev.php").with_status(404).create();

    let ctx = TestContext::new();
    let stdout = ctx.stdout_of(&["releases", "--base-url", &server.url()]);
    let line_for = |channel: &str| {
        stdout.lines().find(|line| line.starts_with(channel)).unwrap_or_default().to_string()
    };

    assert!(line_for("Production").contains("v0.8.21"));
    assert!(line_for("Development").contains("N/A"));
    assert!(line_for("Experimental").contains("N/A"));
}

#[test]
fn releases_base_url_comes_from_environment() {
    let mut server = mockito::Server::new();
    let mock = server.mock("GET", mockito::Matcher::Any).with_status(200).with_body("").expect(3).create();

    let ctx = TestContext::new();
    ctx.cli()
        .arg("releases")
        .env("M3U_COMPOSE_RELEASE_BASE_URL", server.url())
        .assert()
        .success()
        .stdout(predicate::str::contains("N/A"));
    mock.assert();
}

#[test]
fn releases_unreachable_channels_show_error() {
    let ctx = TestContext::new();
    ctx.cli()
        .args(["releases", "--base-url", "http://127.0.0.1:9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Error"));
}

#[test]
fn releases_rejects_invalid_base_url() {
    let ctx = TestContext::new();
    ctx.cli()
        .args(["releases", "--base-url", "not a url"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid release base URL"));
}

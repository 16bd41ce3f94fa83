use crate::harness::{TestContext, yaml_lint::assert_yaml_lints_clean};
use predicates::prelude::*;

#[test]
fn generate_writes_manifest_without_env_when_no_secrets() {
    let ctx = TestContext::new();
    ctx.cli()
        .args(["generate", "-o", "deploy"])
        .assert()
        .success()
        .stdout(predicate::str::contains("docker-compose.yml"));

    assert!(ctx.work_dir().join("deploy/docker-compose.yml").exists());
    assert!(!ctx.work_dir().join("deploy/.env").exists());
}

#[test]
fn generate_writes_env_file_with_secrets() {
    let ctx = TestContext::new();
    ctx.cli()
        .args(["generate", "-o", "deploy", "--set", "M3U_PROXY_TOKEN=tok", "--set", "PG_PASSWORD=pw"])
        .assert()
        .success();

    let env = ctx.read_file("deploy/.env");
    assert!(env.contains("M3U_PROXY_TOKEN=tok\n"));
    assert!(env.contains("PG_PASSWORD=pw\n"));
}

#[test]
fn generate_writes_reverse_proxy_config_next_to_manifest() {
    let ctx = TestContext::new();
    ctx.cli().args(["generate", "-d", "external-nginx", "-o", "nginx"]).assert().success();
    assert!(ctx.read_file("nginx/nginx.conf").contains("fastcgi_pass php-fpm;"));

    ctx.cli()
        .args(["generate", "-d", "external-caddy", "-o", "caddy", "--set", "APP_URL=https://tv.example.org/"])
        .assert()
        .success();
    assert!(ctx.read_file("caddy/Caddyfile").starts_with("tv.example.org {\n"));
}

#[test]
fn written_manifests_are_valid_yaml() {
    let ctx = TestContext::new();
    for deployment in ["modular", "aio", "vpn", "external-nginx", "external-caddy"] {
        ctx.cli()
            .args([
                "generate",
                "-d",
                deployment,
                "-o",
                deployment,
                "--set",
                "REDIS_MODE=external",
                "--set",
                "REDIS_PASSWORD=pw",
            ])
            .assert()
            .success();
        let manifest = ctx.work_dir().join(deployment).join("docker-compose.yml");
        assert_yaml_lints_clean(&manifest);
    }
}

#[test]
fn printed_and_written_manifests_are_identical() {
    let ctx = TestContext::new();
    let printed = ctx.stdout_of(&["generate", "-d", "vpn"]);
    ctx.cli().args(["generate", "-d", "vpn", "-o", "vpn"]).assert().success();

    let written = ctx.read_file("vpn/docker-compose.yml");
    assert_eq!(printed, written);
    assert!(written.ends_with("gluetun-data:\n"), "{written}");
}

use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn generate_prints_modular_manifest_by_default() {
    let ctx = TestContext::new();
    ctx.cli()
        .arg("generate")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# Docker Compose - Modular Deployment\n"))
        .stdout(predicate::str::contains("  m3u-editor:\n"))
        .stdout(predicate::str::contains("  m3u-proxy:\n"))
        .stdout(predicate::str::contains("      - APP_URL=http://localhost\n"));
}

#[test]
fn generate_all_in_one_has_no_side_services() {
    let ctx = TestContext::new();
    ctx.cli()
        .args(["generate", "-d", "aio"])
        .assert()
        .success()
        .stdout(predicate::str::contains("m3u-proxy:").not())
        .stdout(predicate::str::contains("m3u-redis:").not());
}

#[test]
fn generate_secrets_flag_prints_env_file() {
    let ctx = TestContext::new();
    ctx.cli()
        .args(["generate", "--secrets", "--set", "REDIS_MODE=external", "--set", "REDIS_PASSWORD=s3cret"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# M3U Editor Environment Configuration\n"))
        .stdout(predicate::str::contains("REDIS_PASSWORD=s3cret"));
}

#[test]
fn generate_values_file_and_overrides_combine() {
    let ctx = TestContext::new();
    ctx.write_file("values.toml", "APP_PORT = 8080\nTZ = \"Europe/Berlin\"\n");

    let stdout = ctx.stdout_of(&["generate", "--values", "values.toml", "--set", "APP_PORT=9090"]);
    assert!(stdout.contains("      - \"9090:9090\""));
    assert!(stdout.contains("      - TZ=Europe/Berlin"));
}

#[test]
fn generate_never_emits_empty_assignments() {
    let ctx = TestContext::new();
    for deployment in ["modular", "aio", "vpn", "external-nginx", "external-caddy"] {
        let stdout = ctx.stdout_of(&["generate", "-d", deployment, "--set", "TZ="]);
        for line in stdout.lines() {
            let line = line.trim_start();
            if let Some(entry) = line.strip_prefix("- ") {
                assert!(!entry.ends_with('='), "{deployment}: {line}");
            }
        }
    }
}

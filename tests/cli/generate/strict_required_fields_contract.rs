use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn generate_warns_about_empty_required_fields() {
    let ctx = TestContext::new();
    ctx.cli()
        .args(["generate", "--set", "APP_URL="])
        .assert()
        .success()
        .stderr(predicate::str::contains("APP_URL"))
        .stdout(predicate::str::contains("APP_URL=").not());
}

#[test]
fn generate_strict_fails_on_empty_required_fields() {
    let ctx = TestContext::new();
    ctx.cli()
        .args(["generate", "--strict", "--set", "APP_URL=", "--set", "APP_PORT="])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("APP_URL, APP_PORT"));
}

#[test]
fn quiet_flag_silences_warnings() {
    let ctx = TestContext::new();
    ctx.cli()
        .args(["-q", "generate", "--set", "APP_URL="])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

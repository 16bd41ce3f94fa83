use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn generate_rejects_unknown_deployment_type() {
    let ctx = TestContext::new();
    ctx.cli()
        .args(["generate", "-d", "kubernetes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("kubernetes"));
}

#[test]
fn generate_rejects_unknown_field() {
    let ctx = TestContext::new();
    ctx.cli()
        .args(["generate", "--set", "APP_PROT=1"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("Error: "))
        .stderr(predicate::str::contains("APP_PROT"));
}

#[test]
fn generate_rejects_value_outside_options() {
    let ctx = TestContext::new();
    ctx.cli()
        .args(["generate", "--set", "DB_CONNECTION=oracle"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("oracle"));
}

#[test]
fn generate_rejects_malformed_override() {
    let ctx = TestContext::new();
    ctx.cli()
        .args(["generate", "--set", "APP_URL"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("APP_URL"));
}

#[test]
fn generate_rejects_unparseable_values_file() {
    let ctx = TestContext::new();
    ctx.write_file("values.json", "{ not json");
    ctx.cli()
        .args(["generate", "--values", "values.json"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("values.json"));
}

#[test]
fn generate_rejects_unsupported_values_extension() {
    let ctx = TestContext::new();
    ctx.write_file("values.ini", "APP_PORT=1\n");
    ctx.cli().args(["generate", "--values", "values.ini"]).assert().failure().code(1);
}

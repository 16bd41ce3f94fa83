use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn schema_shows_vpn_section_only_for_vpn() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["schema", "-d", "vpn"])
        .assert()
        .success()
        .stdout(predicate::str::contains("VPN Configuration [vpn]"))
        .stdout(predicate::str::contains("VPN_SERVICE_PROVIDER"));

    ctx.cli()
        .args(["schema", "-d", "modular"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[vpn]").not());
}

#[test]
fn schema_hides_fields_switched_off_by_overrides() {
    let ctx = TestContext::new();

    let pgsql = ctx.stdout_of(&["schema"]);
    assert!(pgsql.contains("PG_DATABASE"));

    let sqlite = ctx.stdout_of(&["schema", "--set", "DB_CONNECTION=sqlite"]);
    assert!(!sqlite.contains("PG_DATABASE"));
    assert!(sqlite.contains("DB_CONNECTION"));
}

#[test]
fn schema_marks_required_fields() {
    let ctx = TestContext::new();
    let stdout = ctx.stdout_of(&["schema"]);
    let app_url = stdout.lines().find(|line| line.contains("APP_URL")).unwrap();
    assert!(app_url.trim_start().starts_with("*APP_URL"), "{app_url}");
}

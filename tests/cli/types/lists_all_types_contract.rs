use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn types_lists_every_deployment_id_in_order() {
    let ctx = TestContext::new();
    let stdout = ctx.stdout_of(&["types"]);

    let ids: Vec<&str> = stdout
        .lines()
        .filter(|line| !line.starts_with(' '))
        .filter_map(|line| line.split_whitespace().next())
        .collect();
    assert_eq!(ids, vec!["modular", "aio", "vpn", "external-nginx", "external-caddy"]);
    assert!(stdout.contains("Modular (Recommended)"));
}

#[test]
fn types_detail_shows_features_and_limitations() {
    let ctx = TestContext::new();
    ctx.cli()
        .args(["types", "--detail"])
        .assert()
        .success()
        .stdout(predicate::str::contains("  + "))
        .stdout(predicate::str::contains("  - "));
}

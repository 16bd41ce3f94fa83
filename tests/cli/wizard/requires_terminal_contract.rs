use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn wizard_refuses_to_run_without_a_terminal() {
    let ctx = TestContext::new();
    ctx.cli()
        .args(["wizard", "-d", "modular"])
        .write_stdin("")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("interactive terminal"));
}

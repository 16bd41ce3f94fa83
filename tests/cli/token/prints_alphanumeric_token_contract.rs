use crate::harness::TestContext;

#[test]
fn token_defaults_to_32_alphanumeric_characters() {
    let ctx = TestContext::new();
    let first = ctx.stdout_of(&["token"]);
    let second = ctx.stdout_of(&["token"]);

    let first = first.trim_end();
    assert_eq!(first.len(), 32);
    assert!(first.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_ne!(first, second.trim_end());
}

#[test]
fn token_honours_length_and_rejects_zero() {
    let ctx = TestContext::new();
    assert_eq!(ctx.stdout_of(&["token", "--length", "64"]).trim_end().len(), 64);
    ctx.cli().args(["token", "--length", "0"]).assert().failure();
}

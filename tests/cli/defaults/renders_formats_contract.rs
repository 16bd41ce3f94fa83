use crate::harness::TestContext;

#[test]
fn defaults_toml_resolves_hosts_per_type() {
    let ctx = TestContext::new();

    let vpn = ctx.stdout_of(&["defaults", "-d", "vpn"]);
    assert!(vpn.contains("M3U_PROXY_HOST = \"127.0.0.1\""));
    assert!(vpn.contains("REDIS_HOST = \"127.0.0.1\""));

    let modular = ctx.stdout_of(&["defaults"]);
    assert!(modular.contains("M3U_PROXY_HOST = \"m3u-proxy\""));
    assert!(modular.contains("REDIS_HOST = \"m3u-redis\""));
}

#[test]
fn defaults_json_is_a_flat_object() {
    let ctx = TestContext::new();
    let stdout = ctx.stdout_of(&["defaults", "-d", "aio", "--format", "json"]);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let object = parsed.as_object().unwrap();
    assert!(object.values().all(|v| v.is_string() || v.is_boolean()));
    assert_eq!(object["IMAGE_TAG"], "latest");
}

#[test]
fn defaults_output_feeds_back_into_generate() {
    let ctx = TestContext::new();
    let yaml = ctx.stdout_of(&["defaults", "-d", "external-caddy", "--format", "yaml"]);
    ctx.write_file("values.yaml", &yaml);

    let from_file = ctx.stdout_of(&["generate", "-d", "external-caddy", "--values", "values.yaml"]);
    let from_defaults = ctx.stdout_of(&["generate", "-d", "external-caddy"]);
    assert_eq!(from_file, from_defaults);
}

use m3u_compose::app::api::{self, GenerateOptions, ValuesFormat};
use m3u_compose::{DeploymentType, WizardSession};
use tempfile::TempDir;

use crate::harness::yaml_lint::assert_yaml_lints_clean;

#[test]
fn session_lifecycle_through_public_api() {
    let mut session = WizardSession::new(DeploymentType::Modular);
    session.set("M3U_PROXY_ENABLED", "embedded").unwrap();
    session.set("REDIS_MODE", "external").unwrap();
    session.set("REDIS_PASSWORD", "pw").unwrap();

    let output = session.output();
    assert!(!output.manifest.contains("  m3u-proxy:\n"));
    assert!(output.manifest.contains("  m3u-redis:\n"));
    assert!(output.secrets.contains("REDIS_PASSWORD=pw"));

    session.switch_deployment(DeploymentType::Vpn);
    assert!(session.values().text_equals("REDIS_HOST", "127.0.0.1"));
    assert!(!session.output().has_secrets());
}

#[test]
fn generated_files_lint_clean_for_every_type() {
    let temp = TempDir::new().unwrap();
    for deployment in api::deployment_types() {
        let outcome = api::generate(&GenerateOptions {
            deployment: *deployment,
            overrides: vec!["XTREAM_ONLY_ENABLED=true".to_string(), "M3U_PROXY_TOKEN=t".to_string()],
            ..GenerateOptions::default()
        })
        .unwrap();
        let dir = temp.path().join(deployment.id());
        let written = api::write_outputs(&outcome, &dir).unwrap();
        assert!(written.contains(&dir.join(".env")));
        assert_yaml_lints_clean(&dir.join("docker-compose.yml"));
    }
}

#[test]
fn defaults_render_in_every_format() {
    for format in [ValuesFormat::Toml, ValuesFormat::Yaml, ValuesFormat::Json] {
        let rendered = api::defaults(DeploymentType::Vpn, format).unwrap();
        assert!(rendered.contains("VPN_TYPE"));
    }
}

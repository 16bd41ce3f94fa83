//! One composer per deployment type, assembling the fragments into a manifest.

use super::editor::{editor_dependencies, editor_environment, editor_ports, editor_volumes};
use super::reverse_proxy::{caddyfile, commented, nginx_config};
use super::services::{
    Network, caddy_service, gluetun_service, nginx_service, proxy_service, redis_service,
};
use super::view::ConfigView;
use crate::domain::DeploymentType;

const GENERATED_BY: &str =
    "# Generated by M3U Editor Compose Wizard\n# https://m3u-editor.com/compose-wizard\n";

const BRIDGE_NETWORK: &str = "\n\nnetworks:\n  m3u-network:\n    driver: bridge";

pub(super) fn compose(deployment: DeploymentType, view: ConfigView<'_>) -> String {
    match deployment {
        DeploymentType::Modular => modular(view),
        DeploymentType::AllInOne => all_in_one(view),
        DeploymentType::Vpn => vpn(view),
        DeploymentType::ExternalNginx => external_nginx(view),
        DeploymentType::ExternalCaddy => external_caddy(view),
    }
}

fn header(title: &str) -> String {
    format!("# Docker Compose - {title}\n{GENERATED_BY}")
}

/// The editor service up to (not including) its `ports:` block.
fn editor_head(view: ConfigView<'_>, deployment: DeploymentType) -> String {
    format!(
        "\nservices:\n  m3u-editor:\n    image: sparkison/m3u-editor:{}\n    container_name: m3u-editor\n    environment:\n{}\n    volumes:\n{}",
        view.image_tag(),
        editor_environment(view, deployment),
        editor_volumes(view),
    )
}

/// `depends_on` and `networks` of an editor on the bridge network.
fn editor_tail(view: ConfigView<'_>) -> String {
    let mut tail = String::new();
    let deps = editor_dependencies(view);
    if !deps.is_empty() {
        let entries: Vec<String> = deps.iter().map(|d| format!("      - {d}")).collect();
        tail.push_str(&format!("\n    depends_on:\n{}", entries.join("\n")));
    }
    tail.push_str("\n    networks:\n      - m3u-network");
    tail
}

/// Proxy and redis containers for the services that run outside the editor.
fn side_services(view: ConfigView<'_>, network: Network) -> String {
    let mut services = String::new();
    if view.proxy_external() {
        services.push_str(&proxy_service(view, network));
    }
    if view.redis_external() {
        services.push_str(&redis_service(view));
    }
    services
}

fn modular(view: ConfigView<'_>) -> String {
    let mut out = header("Modular Deployment");
    match (view.proxy_external(), view.redis_external()) {
        (false, false) => {
            out.push_str("#\n# Note: Proxy and Redis are running embedded in the editor container.\n")
        }
        (false, true) => out.push_str("#\n# Note: Proxy is running embedded in the editor container.\n"),
        (true, false) => out.push_str("#\n# Note: Redis is running embedded in the editor container.\n"),
        (true, true) => {}
    }

    out.push_str(&editor_head(view, DeploymentType::Modular));
    out.push_str(&format!("\n    ports:\n{}\n    restart: unless-stopped", editor_ports(view)));
    out.push_str(&editor_tail(view));
    out.push_str(&side_services(view, Network::Bridge));
    out.push_str(BRIDGE_NETWORK);
    if view.redis_external() {
        out.push_str("\n\nvolumes:\n  redis-data:");
    }
    out.push('\n');
    out
}

fn all_in_one(view: ConfigView<'_>) -> String {
    let mut out = header("All-in-One Deployment");
    out.push_str(
        "#\n# Note: This configuration does NOT support hardware acceleration.\n# Proxy and Redis run embedded in the editor container.\n# For hardware acceleration, use the Modular deployment with external proxy.\n",
    );
    out.push_str(&editor_head(view, DeploymentType::AllInOne));
    out.push_str(&format!("\n    ports:\n{}\n    restart: unless-stopped\n", editor_ports(view)));
    out
}

fn vpn(view: ConfigView<'_>) -> String {
    let mut out = header("VPN Deployment (Gluetun)");
    out.push_str(
        "#\n# IMPORTANT: Configure your VPN provider settings below.\n# See https://github.com/qdm12/gluetun for provider-specific configuration.\n",
    );
    if !view.proxy_external() {
        out.push_str(
            "#\n# Note: Proxy is running embedded in the editor container (not through VPN).\n# For VPN protection on proxy traffic, use External proxy mode.\n",
        );
    }

    out.push_str("\nservices:");
    out.push_str(&gluetun_service(view));
    out.push('\n');
    out.push_str(&format!(
        "\n  m3u-editor:\n    image: sparkison/m3u-editor:{}\n    container_name: m3u-editor\n    network_mode: \"service:gluetun\"\n    environment:\n{}\n    volumes:\n{}\n    restart: unless-stopped\n    depends_on:\n      - gluetun",
        view.image_tag(),
        editor_environment(view, DeploymentType::Vpn),
        editor_volumes(view),
    ));
    if view.redis_external() {
        out.push_str("\n      - m3u-redis");
    }

    out.push_str(&side_services(view, Network::Gateway));
    out.push_str(BRIDGE_NETWORK);
    out.push_str("\n\nvolumes:\n  gluetun-data:");
    if view.redis_external() {
        out.push_str("\n  redis-data:");
    }
    out.push('\n');
    out
}

fn external_nginx(view: ConfigView<'_>) -> String {
    let mut out = header("External Nginx Deployment");
    out.push_str(
        "#\n# This configuration uses an external Nginx reverse proxy.\n# See the Nginx configuration section below.\n",
    );
    out.push_str(&editor_head(view, DeploymentType::ExternalNginx));
    out.push_str("\n    restart: unless-stopped");
    out.push_str(&editor_tail(view));
    out.push_str(&side_services(view, Network::Bridge));
    out.push('\n');
    out.push_str(&nginx_service(view));
    out.push_str(BRIDGE_NETWORK);
    if view.redis_external() {
        out.push_str("\n\nvolumes:\n  redis-data:");
    }
    out.push_str("\n\n");
    out.push_str(&commented(&nginx_config(view)));
    out
}

fn external_caddy(view: ConfigView<'_>) -> String {
    let mut out = header("External Caddy Deployment");
    out.push_str("#\n# This configuration uses Caddy reverse proxy with automatic HTTPS.\n");
    out.push_str(&editor_head(view, DeploymentType::ExternalCaddy));
    out.push_str("\n    restart: unless-stopped");
    out.push_str(&editor_tail(view));
    out.push_str(&side_services(view, Network::Bridge));
    out.push('\n');
    out.push_str(&caddy_service(view));
    out.push_str(BRIDGE_NETWORK);
    out.push_str("\n\nvolumes:\n  caddy-data:\n  caddy-config:");
    if view.redis_external() {
        out.push_str("\n  redis-data:");
    }
    out.push_str("\n\n");
    out.push_str(&commented(&caddyfile(view)));
    out
}

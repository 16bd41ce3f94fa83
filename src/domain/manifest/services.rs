//! Side services: proxy, redis, the VPN gateway and the reverse proxies.

use super::view::{ConfigView, PROXY_CONTAINER_PORT};
use crate::domain::schema::LOOPBACK_HOST;

/// How a service reaches the rest of the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Network {
    /// Own container on the shared bridge network.
    Bridge,
    /// Shares the gluetun container's network namespace.
    Gateway,
}

pub(super) fn proxy_service(view: ConfigView<'_>, network: Network) -> String {
    let redis_external = view.redis_external();
    let redis_host = if redis_external {
        view.or("REDIS_HOST", "m3u-redis")
    } else if network == Network::Gateway {
        LOOPBACK_HOST.to_string()
    } else {
        "m3u-editor".to_string()
    };

    let mut service = format!(
        "\n  m3u-proxy:\n    image: sparkison/m3u-proxy:{}\n    container_name: m3u-proxy",
        view.image_tag()
    );
    if network == Network::Gateway {
        service.push_str("\n    network_mode: \"service:gluetun\"");
    }

    service.push_str(&format!(
        "\n    environment:\n      - API_TOKEN=${{M3U_PROXY_TOKEN:-{}}}\n      - REDIS_ENABLED=true\n      - REDIS_HOST={}\n      - REDIS_SERVER_PORT={}\n      - REDIS_DB=6",
        view.slot("M3U_PROXY_TOKEN"),
        redis_host,
        view.redis_port(),
    ));
    if redis_external && view.truthy("REDIS_PASSWORD") {
        service.push_str(&format!(
            "\n      - REDIS_PASSWORD=${{REDIS_PASSWORD:-{}}}",
            view.slot("REDIS_PASSWORD")
        ));
    }
    if view.not_disabled("ENABLE_TRANSCODING_POOLING") {
        service.push_str("\n      - ENABLE_TRANSCODING_POOLING=true");
    }
    service.push_str(&format!("\n      - LOG_LEVEL={}", view.proxy_log_level()));

    if network == Network::Bridge {
        service.push_str(&format!(
            "\n    ports:\n      - \"{}:{}\"",
            view.proxy_published_port(),
            PROXY_CONTAINER_PORT
        ));
    }
    service.push_str("\n    restart: unless-stopped");

    let upstream = if redis_external { "m3u-redis" } else { "m3u-editor" };
    match network {
        Network::Gateway => {
            service.push_str(&format!("\n    depends_on:\n      - gluetun\n      - {upstream}"));
        }
        Network::Bridge => {
            service.push_str(&format!(
                "\n    depends_on:\n      - {upstream}\n    networks:\n      - m3u-network"
            ));
        }
    }

    service
}

pub(super) fn redis_service(view: ConfigView<'_>) -> String {
    let command = if view.truthy("REDIS_PASSWORD") {
        format!(
            "redis-server --appendonly yes --requirepass \"${{REDIS_PASSWORD:-{}}}\"",
            view.slot("REDIS_PASSWORD")
        )
    } else {
        "redis-server --appendonly yes".to_string()
    };

    format!(
        "\n  m3u-redis:\n    image: redis:alpine\n    container_name: m3u-redis\n    command: {command}\n    volumes:\n      - redis-data:/data\n    restart: unless-stopped\n    networks:\n      - m3u-network"
    )
}

/// Environment of the gluetun container. Credential entries follow the VPN type.
pub(super) fn gluetun_environment(view: ConfigView<'_>) -> String {
    let mut lines = Vec::new();
    let mut push = |name: &str, value: Option<String>| {
        if let Some(value) = value {
            lines.push(format!("      - {name}={value}"));
        }
    };

    push("VPN_SERVICE_PROVIDER", view.value("VPN_SERVICE_PROVIDER"));
    push("VPN_TYPE", view.value("VPN_TYPE"));
    if view.is("VPN_TYPE", "openvpn") {
        push("OPENVPN_USER", view.value("OPENVPN_USER"));
        push("OPENVPN_PASSWORD", view.value("OPENVPN_PASSWORD"));
    } else if view.is("VPN_TYPE", "wireguard") {
        push("WIREGUARD_PRIVATE_KEY", view.value("WIREGUARD_PRIVATE_KEY"));
    }
    push("SERVER_COUNTRIES", view.value("SERVER_COUNTRIES"));

    lines.join("\n")
}

/// The VPN gateway. It publishes the ports of every service routed through it.
pub(super) fn gluetun_service(view: ConfigView<'_>) -> String {
    let app_port = view.slot("APP_PORT");
    let mut service = format!(
        "\n  gluetun:\n    image: qmcgaw/gluetun:latest\n    container_name: gluetun\n    cap_add:\n      - NET_ADMIN\n    devices:\n      - /dev/net/tun:/dev/net/tun\n    environment:\n{}\n    ports:\n      - \"{app_port}:{app_port}\"  # m3u-editor",
        gluetun_environment(view)
    );
    if view.xtream_enabled() {
        let xtream_port = view.slot("XTREAM_PORT");
        service.push_str(&format!("\n      - \"{xtream_port}:{xtream_port}\"  # xtream-only"));
    }
    if view.proxy_external() {
        service.push_str(&format!(
            "\n      - \"{}:{}\"  # m3u-proxy",
            view.proxy_published_port(),
            PROXY_CONTAINER_PORT
        ));
    }
    service.push_str(
        "\n    volumes:\n      - gluetun-data:/gluetun\n    restart: unless-stopped\n    networks:\n      - m3u-network",
    );
    service
}

pub(super) fn nginx_service(view: ConfigView<'_>) -> String {
    format!(
        "\n  nginx:\n    image: nginx:alpine\n    container_name: m3u-nginx\n    ports:\n      - \"{}:80\"\n    volumes:\n      - ./nginx.conf:/etc/nginx/nginx.conf:ro\n      - {}:/var/www/html:ro\n    restart: unless-stopped\n    depends_on:\n      - m3u-editor\n    networks:\n      - m3u-network",
        view.slot("APP_PORT"),
        view.config_path(),
    )
}

pub(super) fn caddy_service(view: ConfigView<'_>) -> String {
    format!(
        "\n  caddy:\n    image: caddy:alpine\n    container_name: m3u-caddy\n    ports:\n      - \"80:80\"\n      - \"443:443\"\n    volumes:\n      - ./Caddyfile:/etc/caddy/Caddyfile:ro\n      - caddy-data:/data\n      - caddy-config:/config\n      - {}:/var/www/html:ro\n    restart: unless-stopped\n    depends_on:\n      - m3u-editor\n    networks:\n      - m3u-network",
        view.config_path(),
    )
}

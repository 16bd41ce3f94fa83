//! Fragments of the `m3u-editor` service.

use super::view::{ConfigView, EnvLines, PROXY_CONTAINER_PORT};
use crate::domain::DeploymentType;

/// The editor's environment list, in its fixed group order: application,
/// database, proxy, redis, web server, xtream, websocket, playlist, HLS, auth.
pub(super) fn editor_environment(view: ConfigView<'_>, deployment: DeploymentType) -> String {
    let mut env = EnvLines::default();
    let embedded_only = deployment == DeploymentType::AllInOne;

    env.add("APP_URL", view.value("APP_URL"));
    env.add("APP_PORT", view.value("APP_PORT"));
    env.add("TZ", view.value("TZ"));
    env.add_if("APP_DEBUG", view.value("APP_DEBUG"), view.truthy("APP_DEBUG"));

    env.add("DB_CONNECTION", view.value("DB_CONNECTION"));
    if view.is("DB_CONNECTION", "pgsql") {
        env.add_if("ENABLE_POSTGRES", view.value("ENABLE_POSTGRES"), view.truthy("ENABLE_POSTGRES"));
        env.add("PG_DATABASE", view.value("PG_DATABASE"));
        env.add("PG_USER", view.value("PG_USER"));
        env.add("PG_PASSWORD", view.value("PG_PASSWORD"));
        env.add("DB_HOST", view.value("DB_HOST"));
        env.add("DB_PORT", view.value("DB_PORT"));
    }

    if !embedded_only {
        let proxy_external = view.proxy_external();
        // The editor reads this as "proxy runs embedded".
        env.add_flag("M3U_PROXY_ENABLED", !proxy_external);
        if proxy_external {
            env.add_text("M3U_PROXY_HOST", &view.or("M3U_PROXY_HOST", "m3u-proxy"));
            env.add_text("M3U_PROXY_PORT", PROXY_CONTAINER_PORT);
        } else {
            env.add_text("M3U_PROXY_HOST", "localhost");
            env.add_text("M3U_PROXY_PORT", &view.or("M3U_PROXY_PORT", PROXY_CONTAINER_PORT));
        }
        env.add("M3U_PROXY_TOKEN", view.value("M3U_PROXY_TOKEN"));
        env.add_if(
            "M3U_PROXY_LOG_LEVEL",
            view.value("M3U_PROXY_LOG_LEVEL"),
            view.truthy("M3U_PROXY_LOG_LEVEL"),
        );

        if view.redis_external() {
            env.add_flag("REDIS_ENABLED", false);
            env.add_text("REDIS_HOST", &view.or("REDIS_HOST", "m3u-redis"));
            env.add_text("REDIS_SERVER_PORT", &view.redis_port());
            env.add("REDIS_PASSWORD", view.value("REDIS_PASSWORD"));
        } else {
            env.add_flag("REDIS_ENABLED", true);
            env.add_text("REDIS_HOST", "localhost");
            env.add_text("REDIS_SERVER_PORT", &view.redis_port());
        }
    }

    if deployment.uses_external_web_server() {
        env.add_flag("NGINX_ENABLED", false);
        env.add_text("FPMPORT", &view.fpm_port());
    }

    let xtream = view.xtream_enabled();
    env.add_if("XTREAM_ONLY_ENABLED", view.value("XTREAM_ONLY_ENABLED"), xtream);
    env.add_if("XTREAM_PORT", view.value("XTREAM_PORT"), xtream);

    env.add("REVERB_PORT", view.value("REVERB_PORT"));
    env.add_if("REVERB_VERIFY", view.value("REVERB_VERIFY"), !view.truthy("REVERB_VERIFY"));

    env.add_if("MAX_CHANNELS", view.value("MAX_CHANNELS"), view.differs("MAX_CHANNELS", "50000"));
    env.add_if(
        "DISABLE_SYNC_LOGS",
        view.value("DISABLE_SYNC_LOGS"),
        view.truthy("DISABLE_SYNC_LOGS"),
    );
    let invalidate = view.truthy("INVALIDATE_IMPORT");
    env.add_if("INVALIDATE_IMPORT", view.value("INVALIDATE_IMPORT"), invalidate);
    env.add_if(
        "INVALIDATE_IMPORT_THRESHOLD",
        view.value("INVALIDATE_IMPORT_THRESHOLD"),
        invalidate,
    );

    if !embedded_only {
        env.add_if("HLS_TEMP_DIR", view.value("HLS_TEMP_DIR"), view.differs("HLS_TEMP_DIR", "/tmp/hls"));
        env.add_if("HLS_GC_ENABLED", view.value("HLS_GC_ENABLED"), !view.truthy("HLS_GC_ENABLED"));
        env.add_if(
            "HLS_GC_INTERVAL",
            view.value("HLS_GC_INTERVAL"),
            view.differs("HLS_GC_INTERVAL", "60"),
        );
        env.add_if(
            "HLS_GC_AGE_THRESHOLD",
            view.value("HLS_GC_AGE_THRESHOLD"),
            view.differs("HLS_GC_AGE_THRESHOLD", "300"),
        );
    }

    env.add_if("AUTO_LOGIN", view.value("AUTO_LOGIN"), view.truthy("AUTO_LOGIN"));
    env.add_if("LOGIN_PATH", view.value("LOGIN_PATH"), view.differs("LOGIN_PATH", "login"));
    env.add_if(
        "REDIRECT_GUEST_TO_LOGIN",
        view.value("REDIRECT_GUEST_TO_LOGIN"),
        !view.truthy("REDIRECT_GUEST_TO_LOGIN"),
    );

    env.render()
}

/// Bind mounts of the editor container.
pub(super) fn editor_volumes(view: ConfigView<'_>) -> String {
    let mut volumes = vec![format!("      - {}:/config", view.config_path())];
    if let Some(strm) = view.value("STRM_PATH") {
        volumes.push(format!("      - {}:/strm", strm));
    }
    volumes.join("\n")
}

/// Published ports of the editor when it owns its network.
pub(super) fn editor_ports(view: ConfigView<'_>) -> String {
    let app_port = view.slot("APP_PORT");
    let mut ports = format!("      - \"{app_port}:{app_port}\"");
    if view.xtream_enabled() {
        let xtream_port = view.slot("XTREAM_PORT");
        ports.push_str(&format!("\n      - \"{xtream_port}:{xtream_port}\""));
    }
    ports
}

/// The editor's `depends_on` entries: whichever side services run externally.
pub(super) fn editor_dependencies(view: ConfigView<'_>) -> Vec<&'static str> {
    let mut deps = Vec::new();
    if view.proxy_external() {
        deps.push("m3u-proxy");
    }
    if view.redis_external() {
        deps.push("m3u-redis");
    }
    deps
}

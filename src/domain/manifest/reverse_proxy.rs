//! Configuration files for the external reverse proxies.

use super::view::{ConfigView, PROXY_CONTAINER_PORT};

pub const NGINX_CONFIG_FILE_NAME: &str = "nginx.conf";
pub const CADDYFILE_FILE_NAME: &str = "Caddyfile";

const RULE: &str = "# -----------------------------------------------------------";

/// A reverse-proxy configuration file the manifest mounts from its directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReverseProxyConfig {
    pub file_name: &'static str,
    pub contents: String,
}

pub(super) fn nginx_config(view: ConfigView<'_>) -> ReverseProxyConfig {
    let contents = format!(
        r#"worker_processes auto;
events {{ worker_connections 1024; }}

http {{
    include /etc/nginx/mime.types;
    default_type application/octet-stream;

    upstream php-fpm {{
        server m3u-editor:{fpm_port};
    }}

    server {{
        listen 80;
        server_name _;
        root /var/www/html/public;
        index index.php;

        location / {{
            try_files $uri $uri/ /index.php?$query_string;
        }}

        location ~ \.php$ {{
            fastcgi_pass php-fpm;
            fastcgi_index index.php;
            fastcgi_param SCRIPT_FILENAME $document_root$fastcgi_script_name;
            include fastcgi_params;
        }}
    }}
}}
"#,
        fpm_port = view.fpm_port()
    );
    ReverseProxyConfig { file_name: NGINX_CONFIG_FILE_NAME, contents }
}

pub(super) fn caddyfile(view: ConfigView<'_>) -> ReverseProxyConfig {
    let contents = format!(
        "{domain} {{\n    root * /var/www/html/public\n    php_fastcgi m3u-editor:{fpm_port}\n    file_server\n    encode gzip\n\n    @proxy path /proxy/*\n    reverse_proxy @proxy m3u-proxy:{proxy_port}\n}}\n",
        domain = site_address(view),
        fpm_port = view.fpm_port(),
        proxy_port = PROXY_CONTAINER_PORT,
    );
    ReverseProxyConfig { file_name: CADDYFILE_FILE_NAME, contents }
}

/// Site address for Caddy: the application URL without its scheme and one
/// trailing slash, or `localhost` when nothing is left.
pub(super) fn site_address(view: ConfigView<'_>) -> String {
    let url = view.value("APP_URL").unwrap_or_default();
    let without_scheme = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(&url);
    let host = without_scheme.strip_suffix('/').unwrap_or(without_scheme);
    if host.is_empty() { "localhost".to_string() } else { host.to_string() }
}

/// The configuration as a comment block appended to the manifest.
pub(super) fn commented(config: &ReverseProxyConfig) -> String {
    let title = match config.file_name {
        NGINX_CONFIG_FILE_NAME => "NGINX CONFIGURATION",
        _ => "CADDYFILE CONFIGURATION",
    };
    let mut block = format!(
        "{RULE}\n# {title}\n# Save the following as {} in the same directory\n{RULE}\n#\n",
        config.file_name
    );
    for line in config.contents.lines() {
        if line.is_empty() {
            block.push_str("#\n");
        } else {
            block.push_str("# ");
            block.push_str(line);
            block.push('\n');
        }
    }
    block
}

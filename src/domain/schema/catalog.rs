use super::{FieldKind, FieldSpec, Literal, SectionSpec, SelectOption, VisibilityRule};
use crate::domain::DeploymentType;

const WITHOUT_AIO: &[DeploymentType] = &[
    DeploymentType::Modular,
    DeploymentType::Vpn,
    DeploymentType::ExternalNginx,
    DeploymentType::ExternalCaddy,
];

const VPN_ONLY: &[DeploymentType] = &[DeploymentType::Vpn];

const EMBEDDED_WEB_SERVER: &[DeploymentType] =
    &[DeploymentType::Modular, DeploymentType::AllInOne, DeploymentType::Vpn];

const EXTERNAL_WEB_SERVER: &[DeploymentType] =
    &[DeploymentType::ExternalNginx, DeploymentType::ExternalCaddy];

const fn text(name: &'static str, label: &'static str, default: &'static str) -> FieldSpec {
    FieldSpec::new(name, label, FieldKind::Text, Literal::Text(default))
}

const fn number(name: &'static str, label: &'static str, default: &'static str) -> FieldSpec {
    FieldSpec::new(name, label, FieldKind::Number, Literal::Text(default))
}

const fn select(name: &'static str, label: &'static str, default: &'static str) -> FieldSpec {
    FieldSpec::new(name, label, FieldKind::Select, Literal::Text(default))
}

const fn boolean(name: &'static str, label: &'static str, default: bool) -> FieldSpec {
    FieldSpec::new(name, label, FieldKind::Boolean, Literal::Flag(default))
}

const fn password(name: &'static str, label: &'static str) -> FieldSpec {
    FieldSpec::new(name, label, FieldKind::Password, Literal::Text(""))
}

const fn equals(field: &'static str, value: &'static str) -> VisibilityRule {
    VisibilityRule::Equals { field, literal: Literal::Text(value) }
}

const fn flag_is(field: &'static str, value: bool) -> VisibilityRule {
    VisibilityRule::Equals { field, literal: Literal::Flag(value) }
}

/// The wizard's sections, in display order.
pub static SECTIONS: &[SectionSpec] = &[
    SectionSpec {
        id: "application",
        title: "Application Settings",
        description: "Core application configuration",
        icon: "⚙️",
        collapsed: false,
        deployment_types: None,
        fields: &[
            select("IMAGE_TAG", "Version", "latest")
                .describe("Docker image version tag for editor and proxy")
                .options(&[
                    SelectOption { value: "latest", label: "Latest (Stable)" },
                    SelectOption { value: "dev", label: "Dev (Development)" },
                    SelectOption { value: "experimental", label: "Experimental (Bleeding edge)" },
                ]),
            text("APP_URL", "Application URL", "http://localhost")
                .describe("The base URL where your application will be accessible")
                .placeholder("https://m3u.example.com")
                .required(),
            number("APP_PORT", "Application Port", "36400")
                .describe("Port number for the application")
                .required(),
            text("TZ", "Timezone", "UTC")
                .describe("Default timezone for the application")
                .placeholder("America/New_York"),
            boolean("APP_DEBUG", "Debug Mode", false)
                .describe("Enable debug mode (only for development)"),
            boolean("NETWORK_BROADCAST_ENABLED", "Network Broadcast", false).describe(
                "Enable broadcasting for local media server content. Requires media server integration.",
            ),
        ],
    },
    SectionSpec {
        id: "database",
        title: "Database Configuration",
        description: "Database connection settings",
        icon: "🗄️",
        collapsed: true,
        deployment_types: None,
        fields: &[
            select("DB_CONNECTION", "Database Type", "pgsql")
                .describe("Select your database driver")
                .options(&[
                    SelectOption { value: "sqlite", label: "SQLite (Simple, no setup)" },
                    SelectOption { value: "pgsql", label: "PostgreSQL (Recommended for production)" },
                ]),
            boolean("ENABLE_POSTGRES", "Enable Embedded PostgreSQL", true)
                .describe("Use the embedded PostgreSQL container")
                .when(equals("DB_CONNECTION", "pgsql")),
            text("PG_DATABASE", "Database Name", "m3ue")
                .describe("PostgreSQL database name")
                .when(equals("DB_CONNECTION", "pgsql")),
            text("PG_USER", "Database Username", "m3ue")
                .describe("PostgreSQL username")
                .when(equals("DB_CONNECTION", "pgsql")),
            password("PG_PASSWORD", "Database Password")
                .describe("PostgreSQL password")
                .placeholder("Enter a secure password")
                .when(equals("DB_CONNECTION", "pgsql"))
                .secret(),
            text("DB_HOST", "Database Host", "127.0.0.1")
                .describe("Database server hostname")
                .when(VisibilityRule::OneOf { field: "DB_CONNECTION", values: &["pgsql", "mysql"] }),
            number("DB_PORT", "Database Port", "5432")
                .describe("Database server port")
                .when(VisibilityRule::OneOf { field: "DB_CONNECTION", values: &["pgsql", "mysql"] }),
        ],
    },
    SectionSpec {
        id: "proxy",
        title: "M3U Proxy Configuration",
        description: "Streaming proxy settings",
        icon: "📡",
        collapsed: true,
        deployment_types: None,
        fields: &[
            select("M3U_PROXY_ENABLED", "Proxy Mode", "external")
                .describe("Choose between embedded or external proxy")
                .options(&[
                    SelectOption { value: "external", label: "External (Separate container)" },
                    SelectOption { value: "embedded", label: "Embedded (Same container)" },
                ])
                .only(WITHOUT_AIO),
            number("M3U_PROXY_PORT", "Proxy Port", "38085")
                .describe("Port for the proxy service"),
            text("M3U_PROXY_HOST", "Proxy Host", "m3u-proxy")
                .describe("Hostname for the proxy service")
                .when(equals("M3U_PROXY_ENABLED", "external"))
                .only(WITHOUT_AIO),
            password("M3U_PROXY_TOKEN", "Proxy Token")
                .describe("Authentication token for proxy communication")
                .placeholder("Auto-generated if empty")
                .secret(),
            select("M3U_PROXY_LOG_LEVEL", "Proxy Log Level", "")
                .describe("Logging verbosity for proxy")
                .options(&[
                    SelectOption { value: "", label: "Disabled" },
                    SelectOption { value: "DEBUG", label: "Debug" },
                    SelectOption { value: "INFO", label: "Info" },
                    SelectOption { value: "WARN", label: "Warning" },
                    SelectOption { value: "ERROR", label: "Error" },
                ]),
            boolean("ENABLE_TRANSCODING_POOLING", "Enable Transcoding Pooling", true)
                .describe("Enable connection pooling for transcoding streams (requires Redis)")
                .when(equals("M3U_PROXY_ENABLED", "external"))
                .only(WITHOUT_AIO),
        ],
    },
    SectionSpec {
        id: "redis",
        title: "Redis Configuration",
        description: "Cache and stream pooling settings",
        icon: "🔴",
        collapsed: true,
        deployment_types: None,
        fields: &[
            select("REDIS_MODE", "Redis Mode", "internal")
                .describe(
                    "Internal runs inside the editor container, External uses a separate Redis container",
                )
                .options(&[
                    SelectOption { value: "internal", label: "Internal (Embedded in editor)" },
                    SelectOption { value: "external", label: "External (Separate container)" },
                ])
                .only(WITHOUT_AIO),
            text("REDIS_HOST", "Redis Host", "m3u-redis")
                .describe("Hostname for the Redis service (auto-set based on deployment type)")
                .when(equals("REDIS_MODE", "external"))
                .only(WITHOUT_AIO),
            number("REDIS_SERVER_PORT", "Redis Port", "63790")
                .describe("Redis server port"),
            password("REDIS_PASSWORD", "Redis Password")
                .describe("Password for Redis authentication (required for external mode)")
                .placeholder("Generate a secure password")
                .when(equals("REDIS_MODE", "external"))
                .only(WITHOUT_AIO)
                .secret(),
        ],
    },
    SectionSpec {
        id: "vpn",
        title: "VPN Configuration",
        description: "Gluetun VPN settings",
        icon: "🔒",
        collapsed: true,
        deployment_types: Some(VPN_ONLY),
        fields: &[
            select("VPN_SERVICE_PROVIDER", "VPN Provider", "nordvpn")
                .describe("Select your VPN provider")
                .options(&[
                    SelectOption { value: "nordvpn", label: "NordVPN" },
                    SelectOption { value: "protonvpn", label: "ProtonVPN" },
                    SelectOption { value: "expressvpn", label: "ExpressVPN" },
                    SelectOption { value: "mullvad", label: "Mullvad" },
                    SelectOption { value: "surfshark", label: "Surfshark" },
                    SelectOption { value: "private_internet_access", label: "Private Internet Access" },
                    SelectOption { value: "custom", label: "Custom/OpenVPN" },
                ])
                .only(VPN_ONLY),
            select("VPN_TYPE", "VPN Type", "openvpn")
                .describe("VPN connection protocol")
                .options(&[
                    SelectOption { value: "openvpn", label: "OpenVPN" },
                    SelectOption { value: "wireguard", label: "WireGuard" },
                ])
                .only(VPN_ONLY),
            text("OPENVPN_USER", "VPN Username", "")
                .describe("Your VPN service username")
                .placeholder("VPN username")
                .when(equals("VPN_TYPE", "openvpn"))
                .only(VPN_ONLY),
            password("OPENVPN_PASSWORD", "VPN Password")
                .describe("Your VPN service password")
                .placeholder("VPN password")
                .when(equals("VPN_TYPE", "openvpn"))
                .only(VPN_ONLY),
            password("WIREGUARD_PRIVATE_KEY", "WireGuard Private Key")
                .describe("Your WireGuard private key")
                .placeholder("WireGuard private key")
                .when(equals("VPN_TYPE", "wireguard"))
                .only(VPN_ONLY),
            text("SERVER_COUNTRIES", "Server Countries", "")
                .describe("Comma-separated list of countries")
                .placeholder("USA,Canada,UK")
                .only(VPN_ONLY),
        ],
    },
    SectionSpec {
        id: "webserver",
        title: "Web Server Configuration",
        description: "Nginx/Caddy and PHP-FPM settings",
        icon: "🌐",
        collapsed: true,
        deployment_types: None,
        fields: &[
            boolean("NGINX_ENABLED", "Enable Embedded Nginx", true)
                .describe("Use the built-in Nginx web server")
                .only(EMBEDDED_WEB_SERVER),
            number("FPMPORT", "PHP-FPM Port", "9000")
                .describe("Port for PHP-FPM (for external web server)")
                .when(flag_is("NGINX_ENABLED", false))
                .only(EXTERNAL_WEB_SERVER),
            boolean("XTREAM_ONLY_ENABLED", "Enable Xtream-Only Endpoint", false)
                .describe("Enable separate Nginx instance for Xtream API only"),
            number("XTREAM_PORT", "Xtream API Port", "36401")
                .describe("Port for Xtream-only endpoint")
                .when(flag_is("XTREAM_ONLY_ENABLED", true)),
        ],
    },
    SectionSpec {
        id: "websocket",
        title: "WebSocket Configuration",
        description: "Real-time notification settings",
        icon: "🔌",
        collapsed: true,
        deployment_types: None,
        fields: &[
            number("REVERB_PORT", "WebSocket Port", "36800")
                .describe("Port for WebSocket server"),
            boolean("REVERB_VERIFY", "SSL Verification", true)
                .describe("Enable SSL verification for WebSocket connections"),
        ],
    },
    SectionSpec {
        id: "playlist",
        title: "Playlist Settings",
        description: "Channel and sync configuration",
        icon: "📋",
        collapsed: true,
        deployment_types: None,
        fields: &[
            number("MAX_CHANNELS", "Max Channels", "50000")
                .describe("Maximum channels to import from M3U playlists"),
            boolean("DISABLE_SYNC_LOGS", "Disable Sync Logs", false)
                .describe("Disable sync log creation (improves SQLite performance)"),
            boolean("INVALIDATE_IMPORT", "Enable Import Validation", false)
                .describe("Cancel sync if channel count drops significantly"),
            number("INVALIDATE_IMPORT_THRESHOLD", "Validation Threshold", "100")
                .describe("Minimum channel difference before canceling sync")
                .when(flag_is("INVALIDATE_IMPORT", true)),
        ],
    },
    SectionSpec {
        id: "hls",
        title: "HLS Storage",
        description: "HLS segment storage and cleanup",
        icon: "💾",
        collapsed: true,
        deployment_types: None,
        fields: &[
            text("HLS_TEMP_DIR", "HLS Directory", "/tmp/hls")
                .describe("Directory for storing HLS segments"),
            boolean("HLS_GC_ENABLED", "Enable Garbage Collection", true)
                .describe("Automatically clean up old HLS segments"),
            number("HLS_GC_INTERVAL", "GC Interval (seconds)", "60")
                .describe("How often to run garbage collection")
                .when(flag_is("HLS_GC_ENABLED", true)),
            number("HLS_GC_AGE_THRESHOLD", "GC Age Threshold (seconds)", "300")
                .describe("Delete segments older than this value")
                .when(flag_is("HLS_GC_ENABLED", true)),
        ],
    },
    SectionSpec {
        id: "auth",
        title: "Authentication",
        description: "Login and access control settings",
        icon: "🔐",
        collapsed: true,
        deployment_types: None,
        fields: &[
            boolean("AUTO_LOGIN", "Auto Login", false)
                .describe("Enable auto-login (development only)"),
            text("LOGIN_PATH", "Login Path", "login").describe("Custom path for login page"),
            boolean("REDIRECT_GUEST_TO_LOGIN", "Redirect Guests to Login", true)
                .describe("Redirect unauthenticated users to login page"),
        ],
    },
    SectionSpec {
        id: "volumes",
        title: "Volume Paths",
        description: "Data persistence configuration",
        icon: "📁",
        collapsed: true,
        deployment_types: None,
        fields: &[
            text("CONFIG_PATH", "Config Volume", "./data")
                .describe("Host path for config data")
                .placeholder("/path/to/data"),
            text("STRM_PATH", "STRM Volume", "")
                .describe("Host path for STRM files (optional)")
                .placeholder("/path/to/strm"),
        ],
    },
];

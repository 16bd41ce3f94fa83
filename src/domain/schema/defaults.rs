use super::fields;
use crate::domain::DeploymentType;
use crate::domain::values::ConfigurationState;

/// Host used when every service shares the VPN gateway's network namespace.
pub const LOOPBACK_HOST: &str = "127.0.0.1";
/// Compose service name of the proxy container.
pub const PROXY_SERVICE_HOST: &str = "m3u-proxy";
/// Compose service name of the Redis container.
pub const REDIS_SERVICE_HOST: &str = "m3u-redis";

/// Initial configuration for a deployment type.
///
/// Collects the default of every applicable field, then pins the proxy and
/// Redis hosts for the topology. The host pass runs for every type, including
/// those where the host fields are not shown.
pub fn defaults_for(deployment: DeploymentType) -> ConfigurationState {
    let mut values: ConfigurationState = fields()
        .filter(|f| f.applies_to(deployment))
        .map(|f| (f.name, f.default.to_value()))
        .collect();

    let (proxy_host, redis_host) = match deployment {
        DeploymentType::Vpn => (LOOPBACK_HOST, LOOPBACK_HOST),
        _ => (PROXY_SERVICE_HOST, REDIS_SERVICE_HOST),
    };
    values.set("M3U_PROXY_HOST", proxy_host);
    values.set("REDIS_HOST", redis_host);

    values
}

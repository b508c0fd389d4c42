//! Gateway configuration.

use std::env;

use common::ServiceConfig;
use customer_service_lib::config::CustomerServiceConfig;

/// Default log filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info,tower_http=debug";

/// Gateway configuration.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// HTTP listener settings
    pub server: ServiceConfig,
    /// In-process customer module settings
    pub customers: CustomerServiceConfig,
}

impl GatewayConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = ServiceConfig::default();

        Self {
            server: ServiceConfig {
                service_name: "gateway".to_string(),
                host: env::var("GATEWAY_HOST").unwrap_or(defaults.host),
                port: env::var("GATEWAY_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(defaults.port),
                log_level: DEFAULT_LOG_FILTER.to_string(),
            },
            customers: CustomerServiceConfig::from_env(),
        }
    }

    /// Override the listener address, e.g. from CLI flags.
    pub fn with_addr(mut self, host: Option<String>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.server.host = host;
        }
        if let Some(port) = port {
            self.server.port = port;
        }
        self
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            server: ServiceConfig {
                service_name: "gateway".to_string(),
                log_level: DEFAULT_LOG_FILTER.to_string(),
                ..ServiceConfig::default()
            },
            customers: CustomerServiceConfig::in_memory(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_listens_on_port_3000_in_memory() {
        let config = GatewayConfig::default();

        assert_eq!(config.server.addr(), "0.0.0.0:3000");
        assert!(config.customers.database.is_in_memory());
    }

    #[test]
    fn test_cli_flags_override_address() {
        let config = GatewayConfig::default().with_addr(Some("127.0.0.1".to_string()), None);

        assert_eq!(config.server.addr(), "127.0.0.1:3000");

        let config = config.with_addr(None, Some(8080));
        assert_eq!(config.server.addr(), "127.0.0.1:8080");
    }
}

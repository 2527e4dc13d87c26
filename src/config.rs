use anyhow::{Context, Result};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;

/// Path suffixes of the console's backend endpoints
#[derive(Debug, Clone, Serialize)]
pub struct Endpoints {
    pub health: &'static str,
    pub connect: &'static str,
    pub users: &'static str,
    pub groups: &'static str,
    pub computers: &'static str,
    pub organizational_units: &'static str,
    pub group_policies: &'static str,
}

/// Logical endpoint names
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Health,
    Connect,
    Users,
    Groups,
    Computers,
    OrganizationalUnits,
    GroupPolicies,
}

/// Static backend API configuration
#[derive(Debug, Clone, Serialize)]
pub struct ApiConfig {
    // Backend
    pub api_base_url: &'static str,
    /// Alias of `api_base_url`
    pub base_url: &'static str,
    pub cors_proxy_url: &'static str,

    // Requests
    pub timeout_ms: u64,
    pub endpoints: Endpoints,

    // Verbose request logging
    pub debug: bool,
}

pub const API_CONFIG: ApiConfig = ApiConfig {
    api_base_url: "http://localhost:5000/api",
    base_url: "http://localhost:5000/api",
    cors_proxy_url: "https://corsproxy.io/?",

    timeout_ms: 15000,
    endpoints: Endpoints {
        health: "/health",
        connect: "/connect",
        users: "/users",
        groups: "/groups",
        computers: "/computers",
        organizational_units: "/ous",
        group_policies: "/gpos",
    },

    debug: true,
};

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn path(&self, endpoint: Endpoint) -> &'static str {
        match endpoint {
            Endpoint::Health => self.endpoints.health,
            Endpoint::Connect => self.endpoints.connect,
            Endpoint::Users => self.endpoints.users,
            Endpoint::Groups => self.endpoints.groups,
            Endpoint::Computers => self.endpoints.computers,
            Endpoint::OrganizationalUnits => self.endpoints.organizational_units,
            Endpoint::GroupPolicies => self.endpoints.group_policies,
        }
    }

    /// Direct URL of an endpoint
    pub fn endpoint_url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.api_base_url.trim_end_matches('/'), self.path(endpoint))
    }

    /// Endpoint URL routed through the CORS proxy
    pub fn proxied_url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.cors_proxy_url, self.endpoint_url(endpoint))
    }
}

/// Runtime settings of the console binary
#[derive(Debug, Clone)]
pub struct AppConfig {
    // Persistent key-value storage file
    pub storage_path: PathBuf,

    pub api: ApiConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let mut api = API_CONFIG;
        if let Ok(value) = std::env::var("AD_CONSOLE_API_DEBUG") {
            api.debug = parse_bool(&value)
                .with_context(|| format!("AD_CONSOLE_API_DEBUG has invalid value '{}'", value))?;
        }

        Ok(Self {
            storage_path: std::env::var("AD_CONSOLE_STORAGE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("ad-console-storage.json")),
            api,
        })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

use config::{Config, ConfigError};
use serde::Deserialize;
use std::time::Duration;

/// Delegated permissions requested by the interactive sign-in.
pub const DEFAULT_SCOPES: &str = "https://graph.microsoft.com/DeviceManagementServiceConfig.ReadWrite.All \
     https://graph.microsoft.com/DeviceManagementManagedDevices.ReadWrite.All \
     https://graph.microsoft.com/Group.ReadWrite.All \
     https://graph.microsoft.com/Organization.Read.All";

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    graph: Graph,
    auth: Auth,
    import: Import,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("graph.url", "https://graph.microsoft.com")?
            .set_default("graph.api_version", "beta")?
            .set_default("auth.authority_url", "https://login.microsoftonline.com")?
            .set_default("auth.scopes", DEFAULT_SCOPES)?
            .set_default("import.poll_interval", "15s")?
            .set_default("import.timeout", "2h")?
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::with_prefix("AUTOPILOT").separator("__"))
            .build()?
            .try_deserialize()
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn auth(&self) -> &Auth {
        &self.auth
    }

    pub fn auth_mut(&mut self) -> &mut Auth {
        &mut self.auth
    }

    pub fn import(&self) -> &Import {
        &self.import
    }
}

#[derive(Debug, Deserialize)]
pub struct Graph {
    url: String,
    api_version: String,
}

impl Graph {
    /// Root every resource path is resolved against, e.g. `https://graph.microsoft.com/beta`.
    pub fn base_url(&self) -> String {
        format!("{}/{}", self.url.trim_end_matches('/'), self.api_version.trim_matches('/'))
    }
}

#[derive(Debug, Deserialize)]
pub struct Auth {
    authority_url: String,
    tenant_id: Option<String>,
    client_id: Option<String>,
    client_secret: Option<String>,
    scopes: String,
}

impl Auth {
    pub fn authority_url(&self) -> &str {
        self.authority_url.trim_end_matches('/')
    }

    pub fn tenant_id(&self) -> Option<&str> {
        self.tenant_id.as_deref().filter(|tenant| !tenant.is_empty())
    }

    pub fn client_id(&self) -> Option<&str> {
        self.client_id.as_deref().filter(|client_id| !client_id.is_empty())
    }

    pub fn client_secret(&self) -> Option<&str> {
        self.client_secret.as_deref().filter(|secret| !secret.is_empty())
    }

    pub fn scopes(&self) -> &str {
        &self.scopes
    }

    /// Command line values win over anything loaded from files or the environment.
    pub fn apply_overrides(&mut self, tenant_id: Option<String>, client_id: Option<String>, client_secret: Option<String>) {
        if tenant_id.is_some() {
            self.tenant_id = tenant_id;
        }
        if client_id.is_some() {
            self.client_id = client_id;
        }
        if client_secret.is_some() {
            self.client_secret = client_secret;
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Import {
    #[serde(with = "humantime_serde")]
    poll_interval: Duration,
    #[serde(with = "humantime_serde")]
    timeout: Duration,
}

impl Import {
    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                graph: Graph {
                    url: "https://graph.url".to_string(),
                    api_version: "beta".to_string(),
                },
                auth: Auth {
                    authority_url: "https://login.url".to_string(),
                    tenant_id: Some("tenant".to_string()),
                    client_id: Some("client".to_string()),
                    client_secret: Some("secret".to_string()),
                    scopes: "scope.read".to_string(),
                },
                import: Import {
                    poll_interval: Duration::from_millis(10),
                    timeout: Duration::from_secs(5),
                },
            },
        }
    }

    pub fn graph_url(mut self, url: String) -> Self {
        self.config.graph.url = url;
        self
    }

    pub fn authority_url(mut self, url: String) -> Self {
        self.config.auth.authority_url = url;
        self
    }

    pub fn client_secret(mut self, secret: Option<String>) -> Self {
        self.config.auth.client_secret = secret;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}

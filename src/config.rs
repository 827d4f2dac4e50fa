use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub panel: PanelConfig,
    pub polling: PollingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PanelConfig {
    /// Base URL of the panel, e.g. "http://127.0.0.1:5000".
    pub base_url: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_request_timeout_secs() -> u64 {
    5
}

#[derive(Debug, Clone, Deserialize)]
pub struct PollingConfig {
    /// Dashboard cadence: rows plus the aggregate resource gauges.
    #[serde(default = "default_dashboard_interval_secs")]
    pub dashboard_interval_secs: u64,
    /// List-view cadence: container/service rows only.
    #[serde(default = "default_resource_interval_secs")]
    pub resource_interval_secs: u64,
}

fn default_dashboard_interval_secs() -> u64 {
    10
}

fn default_resource_interval_secs() -> u64 {
    30
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".into());
        let s = std::fs::read_to_string(&path)?;
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            !self.panel.base_url.is_empty(),
            "panel.base_url must be non-empty"
        );
        anyhow::ensure!(
            self.panel.base_url.starts_with("http://") || self.panel.base_url.starts_with("https://"),
            "panel.base_url must start with http:// or https://, got {}",
            self.panel.base_url
        );
        anyhow::ensure!(
            self.panel.request_timeout_secs > 0,
            "panel.request_timeout_secs must be > 0, got {}",
            self.panel.request_timeout_secs
        );
        anyhow::ensure!(
            self.polling.dashboard_interval_secs > 0,
            "polling.dashboard_interval_secs must be > 0, got {}",
            self.polling.dashboard_interval_secs
        );
        anyhow::ensure!(
            self.polling.resource_interval_secs > 0,
            "polling.resource_interval_secs must be > 0, got {}",
            self.polling.resource_interval_secs
        );
        Ok(())
    }
}

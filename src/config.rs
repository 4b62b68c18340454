use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub engine: EngineConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Upper bound on the daemon liveness probe used by /health and /api/system/status.
    #[serde(default = "default_ping_timeout_ms")]
    pub ping_timeout_ms: u64,
    /// Grace period before the daemon kills a container on stop/restart.
    #[serde(default = "default_stop_timeout_secs")]
    pub stop_timeout_secs: i32,
}

fn default_ping_timeout_ms() -> u64 {
    2000
}

fn default_stop_timeout_secs() -> i32 {
    10
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
            self.server.port > 0,
            "server.port must be between 1 and 65535, got {}",
            self.server.port
        );
        anyhow::ensure!(!self.server.host.is_empty(), "server.host must be non-empty");
        anyhow::ensure!(
            self.engine.ping_timeout_ms > 0,
            "engine.ping_timeout_ms must be > 0, got {}",
            self.engine.ping_timeout_ms
        );
        anyhow::ensure!(
            self.engine.stop_timeout_secs > 0,
            "engine.stop_timeout_secs must be > 0, got {}",
            self.engine.stop_timeout_secs
        );
        Ok(())
    }
}

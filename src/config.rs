use serde::Deserialize;

/// Application configuration.
///
/// Loaded from a YAML file when one is present, with the `LISTEN`
/// environment variable taking precedence over the file for the bind
/// address. Everything defaults so the demo runs with no setup.
#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
        }
    }
}

impl Config {
    /// Loads configuration for the current process.
    ///
    /// Order of precedence: `LISTEN` env var, then the YAML file named by
    /// `PIXEL_DEMO_CONFIG` (default `pixel-demo.yaml`), then built-in
    /// defaults. A missing file is fine; a malformed one is reported and
    /// ignored rather than taking the demo down.
    pub fn load() -> Self {
        let path = std::env::var("PIXEL_DEMO_CONFIG")
            .unwrap_or_else(|_| "pixel-demo.yaml".to_string());

        let mut cfg = match std::fs::read_to_string(&path) {
            Ok(raw) => match serde_yaml::from_str::<Config>(&raw) {
                Ok(cfg) => cfg,
                Err(e) => {
                    tracing::warn!(path = %path, error = %e, "Ignoring malformed config file");
                    Config::default()
                }
            },
            Err(_) => Config::default(),
        };

        if let Ok(addr) = std::env::var("LISTEN") {
            cfg.server.listen_addr = addr;
        }

        cfg
    }
}

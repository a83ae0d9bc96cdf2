use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    pub api: ApiConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Scheme, host and port of the production API, without trailing slash
    pub base_url: String,
}

/// Default configuration embedded in the binary
pub const DEFAULT_CONFIG: &str = r#"
[api]
base_url = "http://localhost:8080"
"#;

/// Load configuration from TOML text, falling back to the embedded default
pub fn load_config(contents: Option<&str>) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents.unwrap_or(DEFAULT_CONFIG))?;
    Ok(config.normalized())
}

impl Config {
    /// Replace the base URL, e.g. from a value saved in the browser
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        if !base_url.trim().is_empty() {
            self.api.base_url = base_url.trim().to_string();
        }
        self.normalized()
    }

    fn normalized(mut self) -> Self {
        let trimmed = self.api.base_url.trim_end_matches('/').to_string();
        self.api.base_url = trimmed;
        self
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.api.base_url, path)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "http://localhost:8080".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = load_config(None).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:8080");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_custom_config_strips_trailing_slash() {
        let config = load_config(Some("[api]\nbase_url = \"http://10.0.0.5:9090/\"\n")).unwrap();
        assert_eq!(config.url("/produccion/materiales"), "http://10.0.0.5:9090/produccion/materiales");
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        assert!(load_config(Some("[api]\n")).is_err());
    }

    #[test]
    fn test_with_base_url_ignores_blank() {
        let config = Config::default().with_base_url("   ");
        assert_eq!(config.api.base_url, "http://localhost:8080");
        let config = Config::default().with_base_url(" https://api.example.com/ ");
        assert_eq!(config.api.base_url, "https://api.example.com");
    }
}

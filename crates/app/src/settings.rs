//! Handles settings for the application.
//!
//! Values are read, in order of precedence, from `RATEIO__*` environment
//! variables (e.g. `RATEIO__SERVER__PORT=8080`), then from an optional
//! `settings.toml`, then from the defaults below.
use chrono::TimeDelta;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct App {
    pub level: String,
}

impl Default for App {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Server {
    pub bind: String,
    pub port: u16,
    /// Origin used when building share links.
    pub public_base_url: String,
}

impl Default for Server {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1".to_string(),
            port: 3000,
            public_base_url: "http://127.0.0.1:3000".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct MinimumWage {
    /// Rate used when no source is configured or the source fails.
    pub default_cents: i64,
    /// Series returning `[{"data": "...", "valor": "1518.00"}, ...]`.
    pub source_url: Option<String>,
    pub max_age_hours: i64,
    /// How long a failed lookup keeps serving the default before retrying.
    pub retry_after_secs: i64,
}

impl Default for MinimumWage {
    fn default() -> Self {
        Self {
            default_cents: 151_800,
            source_url: None,
            max_age_hours: 24,
            retry_after_secs: 60,
        }
    }
}

impl MinimumWage {
    pub fn max_age(&self) -> Result<TimeDelta, ConfigError> {
        TimeDelta::try_hours(self.max_age_hours)
            .filter(|age| *age >= TimeDelta::zero())
            .ok_or_else(|| {
                ConfigError::Message(format!(
                    "minimum_wage.max_age_hours out of range: {}",
                    self.max_age_hours
                ))
            })
    }

    pub fn retry_after(&self) -> Result<TimeDelta, ConfigError> {
        TimeDelta::try_seconds(self.retry_after_secs)
            .filter(|delay| *delay >= TimeDelta::zero())
            .ok_or_else(|| {
                ConfigError::Message(format!(
                    "minimum_wage.retry_after_secs out of range: {}",
                    self.retry_after_secs
                ))
            })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub app: App,
    pub server: Server,
    pub minimum_wage: MinimumWage,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("settings").required(false))
            .add_source(
                Environment::with_prefix("RATEIO")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let settings: Settings = Config::builder()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.app.level, "info");
        assert_eq!(settings.server.port, 3000);
        assert_eq!(settings.minimum_wage.default_cents, 151_800);
        assert!(settings.minimum_wage.source_url.is_none());
    }

    #[test]
    fn toml_overrides_defaults() {
        let settings: Settings = Config::builder()
            .add_source(File::from_str(
                r#"
                [server]
                port = 8080
                public_base_url = "https://rateio.app"

                [minimum_wage]
                source_url = "https://api.bcb.gov.br/dados/serie/bcdata.sgs.1619/dados/ultimos/1?formato=json"
                "#,
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.server.bind, "127.0.0.1");
        assert_eq!(settings.server.public_base_url, "https://rateio.app");
        assert!(settings.minimum_wage.source_url.is_some());
        assert_eq!(settings.minimum_wage.max_age_hours, 24);
    }

    #[test]
    fn durations_reject_out_of_range_values() {
        let wage = MinimumWage::default();
        assert_eq!(wage.max_age().unwrap(), TimeDelta::hours(24));
        assert_eq!(wage.retry_after().unwrap(), TimeDelta::seconds(60));

        let wage = MinimumWage {
            max_age_hours: i64::MAX,
            retry_after_secs: -1,
            ..Default::default()
        };
        assert!(wage.max_age().is_err());
        assert!(wage.retry_after().is_err());
    }
}

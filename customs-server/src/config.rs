//! Application configuration, merged from defaults, an optional file and the
//! environment.

use crate::Cli;
use serde::{Deserialize, Serialize};

/// The main application configuration that composes all component configs
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct AppConfig {
    /// Web server configuration (bind address, body limit)
    #[serde(default)]
    pub server: customs_axum::config::AxumConfig,

    /// Database configuration (file location, pool size)
    #[serde(default)]
    pub database: customs_sqlite::config::SqliteConfig,

    /// Fixed values written into exported documents
    #[serde(default)]
    pub export: customs_export::ExportSettings,
}

impl AppConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Environment variables (highest priority)
    /// 2. Config file given by the CLI
    /// 3. Default values (lowest priority)
    ///
    /// Environment variables are mapped using the pattern
    /// `APP_<SECTION>__<KEY>` to `<section>.<key>`, for example
    /// `APP_DATABASE__DATABASE_PATH=/var/lib/customs.db` or
    /// `APP_EXPORT__DECLARANT__NAME="Example Broker LLC"`.
    pub fn load(cli: &Cli) -> anyhow::Result<Self> {
        let file = match &cli.config {
            Some(path) if path.exists() => Some(config::File::from(path.as_path())),
            Some(path) => anyhow::bail!("Config file {} does not exist", path.display()),
            None => None,
        };
        Self::layered(file, config::Environment::with_prefix("APP"))
    }

    fn layered<S>(file: Option<S>, environment: config::Environment) -> anyhow::Result<Self>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let mut config =
            config::Config::builder().add_source(config::Config::try_from(&Self::default())?);

        if let Some(file) = file {
            config = config.add_source(file);
        }

        // APP_SERVER__BIND_ADDRESS maps to server.bind_address
        config = config.add_source(
            environment
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        config.build()?.try_deserialize().map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::{Environment, File, FileFormat, FileSourceFile, Map};

    #[test]
    fn defaults_only() {
        let environment = Environment::with_prefix("APP").source(Some(Map::new()));
        let config =
            AppConfig::layered(None::<File<FileSourceFile, FileFormat>>, environment).unwrap();
        assert_eq!(config.server.bind_address.port(), 8080);
        assert!(config.database.database_path.is_none());
        assert_eq!(config.export.declaration_type, "EX");
    }

    #[test]
    fn environment_beats_file() {
        let file = File::from_str(
            r#"
            [server]
            bind_address = "127.0.0.1:3000"

            [database]
            database_path = "customs.db"

            [export.declarant]
            name = "Example Broker LLC"
            "#,
            FileFormat::Toml,
        );
        let environment = Environment::with_prefix("APP").source(Some(Map::from([(
            "APP_SERVER__BIND_ADDRESS".to_owned(),
            "127.0.0.1:9000".to_owned(),
        )])));

        let config = AppConfig::layered(Some(file), environment).unwrap();
        assert_eq!(config.server.bind_address.port(), 9000);
        assert_eq!(
            config.database.database_path.as_deref(),
            Some(std::path::Path::new("customs.db"))
        );
        assert_eq!(config.export.declarant.name, "Example Broker LLC");
        // Untouched keys keep their defaults
        assert_eq!(config.export.mrn, "00XX00000000000000");
    }
}

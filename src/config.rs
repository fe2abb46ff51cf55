//! Persistence settings, built programmatically or read from the environment.

use std::env;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

pub const DEFAULT_DATABASE_URL: &str = "app.db";
pub const DEFAULT_POOL_SIZE: u32 = 10;

/// Errors raised while reading configuration values.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown schema action `{0}`, expected one of: none, create, drop-and-create")]
    UnknownSchemaAction(String),
    #[error("invalid value `{value}` for {key}")]
    InvalidValue { key: &'static str, value: String },
}

/// What to do with the database schema when the pool is bootstrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SchemaAction {
    /// Leave the schema untouched.
    None,
    /// Apply any pending migrations.
    #[default]
    Create,
    /// Revert every applied migration, then apply them all again.
    DropAndCreate,
}

impl FromStr for SchemaAction {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "create" => Ok(Self::Create),
            "drop-and-create" => Ok(Self::DropAndCreate),
            other => Err(ConfigError::UnknownSchemaAction(other.to_string())),
        }
    }
}

impl fmt::Display for SchemaAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            Self::None => "none",
            Self::Create => "create",
            Self::DropAndCreate => "drop-and-create",
        };
        f.write_str(value)
    }
}

/// Connection and schema settings for the product store.
#[derive(Debug, Clone, PartialEq)]
pub struct PersistenceConfig {
    pub database_url: String,
    pub schema_action: SchemaAction,
    /// Echo every executed statement through the `product_store::sql` log target.
    pub show_sql: bool,
    pub pool_size: u32,
}

impl PersistenceConfig {
    /// Build a configuration for `database_url` with default settings.
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            schema_action: SchemaAction::default(),
            show_sql: false,
            pool_size: DEFAULT_POOL_SIZE,
        }
    }

    pub fn schema_action(mut self, action: SchemaAction) -> Self {
        self.schema_action = action;
        self
    }

    pub fn show_sql(mut self, show_sql: bool) -> Self {
        self.show_sql = show_sql;
        self
    }

    pub fn pool_size(mut self, pool_size: u32) -> Self {
        self.pool_size = pool_size;
        self
    }

    /// Read the configuration from process environment variables.
    ///
    /// Recognised keys are `DATABASE_URL`, `SCHEMA_ACTION`, `SHOW_SQL` and
    /// `DB_POOL_SIZE`; any of them may be omitted.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read the configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
        let mut config = Self::new(database_url);

        if let Some(action) = lookup("SCHEMA_ACTION") {
            config.schema_action = action.parse()?;
        }

        if let Some(show_sql) = lookup("SHOW_SQL") {
            config.show_sql = parse_bool("SHOW_SQL", &show_sql)?;
        }

        if let Some(pool_size) = lookup("DB_POOL_SIZE") {
            config.pool_size = match pool_size.trim().parse::<u32>() {
                Ok(size) if size > 0 => size,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: "DB_POOL_SIZE",
                        value: pool_size,
                    });
                }
            };
        }

        Ok(config)
    }
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = PersistenceConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, PersistenceConfig::new(DEFAULT_DATABASE_URL));
        assert_eq!(config.schema_action, SchemaAction::Create);
        assert!(!config.show_sql);
        assert_eq!(config.pool_size, DEFAULT_POOL_SIZE);
    }

    #[test]
    fn reads_every_key() {
        let config = PersistenceConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "products.db"),
            ("SCHEMA_ACTION", "Drop-And-Create"),
            ("SHOW_SQL", "true"),
            ("DB_POOL_SIZE", "3"),
        ]))
        .unwrap();

        assert_eq!(
            config,
            PersistenceConfig::new("products.db")
                .schema_action(SchemaAction::DropAndCreate)
                .show_sql(true)
                .pool_size(3)
        );
    }

    #[test]
    fn rejects_unknown_schema_action() {
        let err = PersistenceConfig::from_lookup(lookup_from(&[("SCHEMA_ACTION", "update")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::UnknownSchemaAction(value) if value == "update"));
    }

    #[test]
    fn rejects_zero_pool_size() {
        let err =
            PersistenceConfig::from_lookup(lookup_from(&[("DB_POOL_SIZE", "0")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "DB_POOL_SIZE", .. }));
    }

    #[test]
    fn schema_action_display_round_trips() {
        for action in [
            SchemaAction::None,
            SchemaAction::Create,
            SchemaAction::DropAndCreate,
        ] {
            assert_eq!(action.to_string().parse::<SchemaAction>().unwrap(), action);
        }
    }
}

use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::api_server_config::ApiServerConfig;
use crate::config::structs::cache_config::CacheConfig;
use crate::config::structs::cache_ttl_config::CacheTtlConfig;
use crate::config::structs::catalog_config::CatalogConfig;
use crate::config::structs::circuit_breaker_config::CircuitBreakerConfig;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::database_config::DatabaseConfig;
use regex::Regex;
use std::fs::File;
use std::io::Write;

const LOG_LEVELS: [&str; 6] = ["off", "trace", "debug", "info", "warn", "error"];

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            database: DatabaseConfig::default(),
            cache: CacheConfig::default(),
            circuit_breaker: CircuitBreakerConfig::default(),
            cache_ttl: CacheTtlConfig::default(),
            catalog: CatalogConfig::default(),
            api_server: ApiServerConfig::default(),
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => Self::load(data.as_slice()).map_err(ConfigurationError::ParseError),
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        match File::create(path) {
            Ok(mut file) => {
                match file.write_all(data.as_ref()) {
                    Ok(_) => Ok(()),
                    Err(e) => Err(ConfigurationError::IOError(e))
                }
            }
            Err(e) => Err(ConfigurationError::IOError(e))
        }
    }

    pub fn save_from_config(path: &str, config: &Configuration) -> Result<(), ConfigurationError> {
        let data = toml::to_string(config).map_err(ConfigurationError::EncodeError)?;
        Self::save_file(path, data)
    }

    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, CustomError> {
        let mut config = match Configuration::load_file(path) {
            Ok(c) => c,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {}", error);

                if !create {
                    eprintln!("You can either create your own {} file, or start this app using '--create-config' as parameter.", path);
                    return Err(CustomError::new("will not create config file automatically"));
                }
                eprintln!("Creating config file..");

                return match Configuration::save_from_config(path, &Configuration::init()) {
                    Ok(_) => {
                        eprintln!("Please edit {} and start again, exiting now...", path);
                        Err(CustomError::new("created config file"))
                    }
                    Err(e) => {
                        eprintln!("{} could not be created, check permissions...", path);
                        eprintln!("{e}");
                        Err(CustomError::new("could not create config file"))
                    }
                };
            }
        };

        config.apply_env_overrides();

        println!("[VALIDATE] Validating configuration...");
        if let Err(error) = config.validate() {
            eprintln!("[VALIDATE] {}", error);
            return Err(CustomError::new(&error.to_string()));
        }
        Ok(config)
    }

    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    pub(crate) fn apply_overrides<F: Fn(&str) -> Option<String>>(&mut self, lookup: F) {
        if let Some(path) = lookup("CATALOG_DATABASE_PATH") {
            self.database.path = path;
        }
        if let Some(address) = lookup("CATALOG_CACHE_ADDRESS") {
            self.cache.address = address;
        }
        if let Some(api_key) = lookup("CATALOG_API_KEY") {
            self.api_server.api_key = api_key;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(Self::invalid(format!("log_level '{}' is not one of {:?}", self.log_level, LOG_LEVELS)));
        }
        if self.database.max_connections == 0 {
            return Err(Self::invalid("database.max_connections must be at least 1".to_string()));
        }
        Self::validate_value("cache.prefix", &self.cache.prefix, r"^[A-Za-z0-9_:.\-]{0,64}$")?;

        let breaker = &self.circuit_breaker;
        if breaker.call_timeout_ms == 0 {
            return Err(Self::invalid("circuit_breaker.call_timeout_ms must be positive".to_string()));
        }
        if !(breaker.failure_rate_threshold > 0.0 && breaker.failure_rate_threshold <= 1.0) {
            return Err(Self::invalid(format!(
                "circuit_breaker.failure_rate_threshold {} must be in (0, 1]",
                breaker.failure_rate_threshold
            )));
        }
        if breaker.minimum_calls == 0 {
            return Err(Self::invalid("circuit_breaker.minimum_calls must be at least 1".to_string()));
        }
        if self.catalog.max_page_size < 1 {
            return Err(Self::invalid("catalog.max_page_size must be at least 1".to_string()));
        }
        Ok(())
    }

    pub fn validate_value(name: &str, value: &str, regex: &str) -> Result<(), ConfigurationError> {
        let regex_check = Regex::new(regex)
            .map_err(|e| Self::invalid(format!("bad pattern for {}: {}", name, e)))?;
        if !regex_check.is_match(value) {
            return Err(Self::invalid(format!("{} \"{}\" does not match \"{}\"", name, value, regex_check)));
        }
        Ok(())
    }

    fn invalid(message: String) -> ConfigurationError {
        ConfigurationError::ValidationError(message)
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::init()
    }
}

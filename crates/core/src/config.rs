//! Configuration loading for the quotations app.
//!
//! Configuration is optional. It lives in a YAML file that can define action
//! aliases and replace any of the user-facing messages:
//!
//! ```yaml
//! aliases:
//!   등록: register
//!   목록: list
//! messages:
//!   prompt: "명령) "
//! ```

use std::fs::File;
use std::io::Read;
use std::path::Path;

use indexmap::IndexMap;
use log::{debug, info};
use serde::Deserialize;

use crate::action::{Action, ActionTable};
use crate::error::Error::{AliasWithDelimiter, AliasWithWhitespace, EmptyAlias, UnknownAction};
use crate::error::{Error, Result};
use crate::messages::Messages;
use crate::request::ACTION_DELIMITER;

/// Default path for the configuration file
const DEFAULT_CONFIG_PATH: &str = "~/.quotes/config.yml";

#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Alias token mapped to a canonical action name
    pub aliases: IndexMap<String, String>,
    pub messages: Messages,
}

impl Config {
    /// Builds the action table described by the configured aliases.
    ///
    /// # Errors
    ///
    /// Returns an error if an alias is empty, contains the action delimiter,
    /// has surrounding whitespace, or names an unknown action.
    pub fn action_table(&self) -> Result<ActionTable> {
        let mut table = ActionTable::new();

        for (alias, target) in &self.aliases {
            validate_alias(alias)?;

            let action = Action::from_canonical(target.trim())
                .ok_or_else(|| UnknownAction(alias.clone(), target.clone()))?;
            table.insert_alias(alias.clone(), action);
        }

        Ok(table)
    }

    /// # Errors
    ///
    /// Returns the first problem found in the aliases or message templates.
    pub fn validate(&self) -> Result<()> {
        self.action_table()?;
        self.messages.validate()
    }
}

fn validate_alias(alias: &str) -> Result<()> {
    if alias.is_empty() {
        return Err(EmptyAlias);
    }

    // Actions are cut at the delimiter, so such an alias could never match
    if alias.contains(ACTION_DELIMITER) {
        return Err(AliasWithDelimiter(alias.to_string()));
    }

    if alias.trim() != alias {
        return Err(AliasWithWhitespace(alias.to_string()));
    }

    Ok(())
}

/// Resolves the configuration file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// configuration path. Shell expansions like `~` are resolved.
///
/// # Examples
///
/// ```
/// use quotes_core::config::get_config_path;
///
/// let custom_path = get_config_path(&Some("/path/to/config.yml".to_string()));
/// assert_eq!(custom_path, "/path/to/config.yml");
/// ```
#[must_use]
pub fn get_config_path(config_path_arg: &Option<String>) -> String {
    let config_path = match config_path_arg {
        Some(config_path) => config_path,
        None => DEFAULT_CONFIG_PATH,
    };

    shellexpand::tilde(config_path).to_string()
}

/// Reads and validates configuration from YAML.
///
/// `path` is only used in error messages.
///
/// # Errors
///
/// Returns an error if the YAML is invalid or the configuration fails
/// validation.
pub fn read_config<R: Read>(reader: R, path: &str) -> Result<Config> {
    let config: Config = serde_yaml::from_reader(reader).map_err(|e| {
        Error::yaml_error(
            "reading".to_string(),
            "config".to_string(),
            path.to_string(),
            e,
        )
    })?;

    config.validate()?;
    Ok(config)
}

/// Loads the configuration for a session.
///
/// When no path is given and the default file does not exist, the built-in
/// defaults are used. A path given explicitly must exist.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read, or if its
/// contents are invalid.
pub fn load_config(config_path_arg: &Option<String>) -> Result<Config> {
    let config_path = get_config_path(config_path_arg);
    debug!("Config path: `{config_path}`");

    if config_path_arg.is_none() && !Path::new(&config_path).exists() {
        info!("No config file at `{config_path}`, using defaults");
        return Ok(Config::default());
    }

    let reader = File::open(&config_path)
        .map_err(|e| Error::io_error("config".to_string(), config_path.clone(), e))?;

    read_config(reader, &config_path)
}

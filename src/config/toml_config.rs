use super::LeadConfig;
use crate::utils::error::{LeadError, Result};
use regex::Regex;
use std::io::ErrorKind;
use std::path::Path;

impl LeadConfig {
    /// Loads configuration from a TOML file. Sections missing from the file
    /// keep their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => LeadError::ConfigNotFoundError {
                path: path.display().to_string(),
            },
            _ => LeadError::IoError(e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::from_toml_str_with_env(content, |name| std::env::var(name).ok())
    }

    /// Parses TOML after `${VAR}` substitution. A value still holding a
    /// placeholder after substitution is dropped, so the field keeps its
    /// default.
    pub fn from_toml_str_with_env<F>(content: &str, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let processed_content = Self::substitute_env_vars(content, lookup)?;

        let mut table: toml::Table =
            toml::from_str(&processed_content).map_err(|e| LeadError::ConfigParseError {
                message: format!("TOML parsing error: {}", e),
            })?;
        drop_unresolved(&mut table, &placeholder_pattern()?, "");

        toml::Value::Table(table)
            .try_into()
            .map_err(|e| LeadError::ConfigParseError {
                message: format!("TOML parsing error: {}", e),
            })
    }

    /// Replaces `${VAR_NAME}` placeholders. Unknown variables are left as
    /// written.
    pub fn substitute_env_vars<F>(content: &str, lookup: F) -> Result<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let re = placeholder_pattern()?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            lookup(var_name).unwrap_or_else(|| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

fn placeholder_pattern() -> Result<Regex> {
    Regex::new(r"\$\{([^}]+)\}").map_err(|e| LeadError::ConfigParseError {
        message: format!("placeholder pattern: {}", e),
    })
}

fn drop_unresolved(table: &mut toml::Table, re: &Regex, prefix: &str) {
    let mut unresolved = Vec::new();

    for (key, value) in table.iter_mut() {
        let field = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };

        match value {
            toml::Value::String(s) if re.is_match(s) => {
                tracing::debug!("{} has an unset placeholder, keeping the default", field);
                unresolved.push(key.clone());
            }
            toml::Value::Table(inner) => drop_unresolved(inner, re, &field),
            toml::Value::Array(items) => items.retain(|item| match item {
                toml::Value::String(s) if re.is_match(s) => {
                    tracing::debug!("Dropping unresolved entry '{}' from {}", s, field);
                    false
                }
                _ => true,
            }),
            _ => {}
        }
    }

    for key in unresolved {
        table.remove(&key);
    }
}

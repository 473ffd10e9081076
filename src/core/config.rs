use std::env;

use crate::core::command::{Convention, RenderOptions};

pub const ENV_CONVENTION: &str = "SAGE_VISU_CONVENTION";
pub const ENV_TRAILING_COMMA: &str = "SAGE_VISU_TRAILING_COMMA";
pub const ENV_PLOT: &str = "SAGE_VISU_PLOT";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub render: RenderOptions,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{key}: invalid value '{value}' ({expected})")]
    InvalidValue {
        key: &'static str,
        value: String,
        expected: &'static str,
    },
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key,
            value: value.to_string(),
            expected: "expected true or false",
        }),
    }
}

/// Build configuration from a variable lookup. Unset or empty variables keep the defaults.
pub fn load_from<F>(lookup: F) -> Result<Config, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
    let mut render = RenderOptions::default();

    if let Some(v) = get(ENV_CONVENTION) {
        render.convention = v
            .parse::<Convention>()
            .map_err(|_| ConfigError::InvalidValue {
                key: ENV_CONVENTION,
                value: v.clone(),
                expected: "expected bound or offset",
            })?;
    }
    if let Some(v) = get(ENV_TRAILING_COMMA) {
        render.trailing_comma = parse_bool(ENV_TRAILING_COMMA, &v)?;
    }
    if let Some(v) = get(ENV_PLOT) {
        render.plot = parse_bool(ENV_PLOT, &v)?;
    }

    Ok(Config { render })
}

/// Load configuration from the environment.
pub fn load() -> Result<Config, ConfigError> {
    load_from(|key| env::var(key).ok())
}

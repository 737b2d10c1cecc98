//! Utilities
use log::*;
use std::{env, fs, collections::{BTreeMap, HashMap}, io::Write};
use anyhow::{anyhow, Context, Result};
use serde_json::{Map, Value};

pub const PATRONI_IP: &str = "PATRONI_IP";
pub const PATRONI_NAME: &str = "PATRONI_NAME";

/// Resolve an option: the argument if set, otherwise the environment variable
/// (which can be set via `.env`), otherwise none.
/// An option given as argument is added to `changed_options` so it can be written to `.env`.
fn set_option(
    option: &Option<String>,
    variable: &'static str,
    changed_options: &mut HashMap<&str, String>,
) -> Option<String>
{
    match option {
        Some(value) => {
            info!("{} argument set: using: {}", variable, value);
            changed_options.insert(variable, value.to_string());
            Some(value.to_string())
        }
        None => match env::var(variable) {
            Ok(set_var) => {
                info!("{} argument not set: set via .env: {}: {}", variable, variable, set_var);
                Some(set_var)
            }
            Err(_e) => {
                info!("{} argument not set: and not set via .env", variable);
                None
            }
        },
    }
}

pub fn set_member_ip(
    option: &Option<String>,
    changed_options: &mut HashMap<&str, String>,
) -> Result<String>
{
    set_option(option, PATRONI_IP, changed_options)
        .ok_or_else(|| anyhow!("No member ip address: use --ip or set {} in .env", PATRONI_IP))
}

/// The member name is only used as payload, such as the current leader of a switchover.
pub fn set_member_name(
    option: &Option<String>,
    changed_options: &mut HashMap<&str, String>,
) -> String
{
    set_option(option, PATRONI_NAME, changed_options).unwrap_or_default()
}

pub fn dotenv_writer(
    write_dotenv: bool,
    changed_options: HashMap<&str, String>,
) -> Result<()>
{
    if !changed_options.is_empty() && write_dotenv {
        info!("Writing .env file");
        let mut file = fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(".env")
            .with_context(|| "Error writing .env file: .env")?;

        for (key, value) in changed_options {
            file.write_all(format!("{}={}\n", key, value).as_bytes())?;
            info!("{}={}", key, value);
        }
    }
    Ok(())
}

/// Parse `name=value` pairs into PostgreSQL parameters.
pub fn parse_parameters(
    parameters: &[String],
) -> Result<BTreeMap<String, String>>
{
    let mut result = BTreeMap::new();
    for parameter in parameters {
        let (name, value) = parameter.split_once('=')
            .with_context(|| format!("Parameter {} is not in the form name=value", parameter))?;
        if name.trim().is_empty() {
            return Err(anyhow!("Parameter {} has no name", parameter));
        }
        result.insert(name.trim().to_string(), value.trim().to_string());
    }
    Ok(result)
}

/// Parse a json object to patch the configuration with.
pub fn parse_config(
    config: &str,
) -> Result<Map<String, Value>>
{
    let value: Value = serde_json::from_str(config)
        .with_context(|| format!("Error parsing configuration: {}", config))?;
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(anyhow!("Configuration must be a json object: {}", config)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_set_option_argument_wins() {
        env::set_var("PATRONI_CTL_TEST_ARGUMENT", "10.0.0.2");
        let mut changed_options = HashMap::new();
        let result = set_option(&Some("10.0.0.1".to_string()), "PATRONI_CTL_TEST_ARGUMENT", &mut changed_options);
        assert_eq!(result.unwrap(), "10.0.0.1");
        assert_eq!(changed_options["PATRONI_CTL_TEST_ARGUMENT"], "10.0.0.1");
    }

    #[test]
    fn unit_set_option_from_environment() {
        env::set_var("PATRONI_CTL_TEST_ENVIRONMENT", "10.0.0.2");
        let mut changed_options = HashMap::new();
        let result = set_option(&None, "PATRONI_CTL_TEST_ENVIRONMENT", &mut changed_options);
        assert_eq!(result.unwrap(), "10.0.0.2");
        assert!(changed_options.is_empty());
    }

    #[test]
    fn unit_set_option_not_set() {
        let mut changed_options = HashMap::new();
        assert!(set_option(&None, "PATRONI_CTL_TEST_NOT_SET", &mut changed_options).is_none());
    }

    #[test]
    fn unit_parse_parameters() {
        let result = parse_parameters(&["max_connections=200".to_string(), "shared_preload_libraries = pg_stat_statements,auto_explain".to_string()]).unwrap();
        assert_eq!(result["max_connections"], "200");
        assert_eq!(result["shared_preload_libraries"], "pg_stat_statements,auto_explain");
        assert!(parse_parameters(&["max_connections".to_string()]).is_err());
        assert!(parse_parameters(&["=200".to_string()]).is_err());
    }

    #[test]
    fn unit_parse_config() {
        let result = parse_config(r#"{"ttl":30,"postgresql":{"use_pg_rewind":true}}"#).unwrap();
        assert_eq!(result["ttl"], 30);
        assert!(parse_config("[1,2]").is_err());
        assert!(parse_config("ttl=30").is_err());
    }
}

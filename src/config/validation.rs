//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the access prefix shape
//! - Check upstream bases are absolute http(s) URLs
//! - Check socket addresses parse
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ProxyConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;
use thiserror::Error;
use url::Url;

use crate::config::schema::ProxyConfig;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field}: invalid socket address {value:?}")]
    InvalidAddress { field: &'static str, value: String },

    #[error("routing.access_prefix: {0}")]
    InvalidAccessPrefix(&'static str),

    #[error("{field}: {reason} ({value:?})")]
    InvalidBase {
        field: &'static str,
        value: String,
        reason: &'static str,
    },
}

pub fn validate_config(config: &ProxyConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    check_address(&mut errors, "listener.bind_address", &config.listener.bind_address);
    if config.observability.metrics_enabled {
        check_address(
            &mut errors,
            "observability.metrics_address",
            &config.observability.metrics_address,
        );
    }

    if let Err(reason) = check_access_prefix(&config.routing.access_prefix) {
        errors.push(ValidationError::InvalidAccessPrefix(reason));
    }

    check_base(&mut errors, "upstream.github_base", &config.upstream.github_base);
    check_base(&mut errors, "upstream.raw_base", &config.upstream.raw_base);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_address(errors: &mut Vec<ValidationError>, field: &'static str, value: &str) {
    if value.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field,
            value: value.to_string(),
        });
    }
}

fn check_access_prefix(prefix: &str) -> Result<(), &'static str> {
    if !prefix.starts_with('/') {
        return Err("must start with '/'");
    }
    if prefix.len() < 2 {
        return Err("must not be empty");
    }
    if prefix.ends_with('/') {
        return Err("must not end with '/'");
    }
    if prefix.chars().any(char::is_whitespace) {
        return Err("must not contain whitespace");
    }
    Ok(())
}

fn check_base(errors: &mut Vec<ValidationError>, field: &'static str, value: &str) {
    let reason = match Url::parse(value) {
        Err(_) => Some("not a valid URL"),
        Ok(url) if !matches!(url.scheme(), "http" | "https") => Some("scheme must be http or https"),
        Ok(_) if value.ends_with('/') => Some("must not end with '/'"),
        Ok(_) => None,
    };
    if let Some(reason) = reason {
        errors.push(ValidationError::InvalidBase {
            field,
            value: value.to_string(),
            reason,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&ProxyConfig::default()).is_ok());
    }

    #[test]
    fn test_access_prefix_rules() {
        assert!(check_access_prefix("/abc").is_ok());
        assert!(check_access_prefix("/a/b").is_ok());
        assert!(check_access_prefix("abc").is_err());
        assert!(check_access_prefix("/").is_err());
        assert!(check_access_prefix("/abc/").is_err());
        assert!(check_access_prefix("/a b").is_err());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = ProxyConfig::default();
        config.listener.bind_address = "not-an-address".into();
        config.routing.access_prefix = "nope".into();
        config.upstream.github_base = "ftp://github.com".into();
        config.upstream.raw_base = "https://raw.githubusercontent.com/".into();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(errors.contains(&ValidationError::InvalidAccessPrefix("must start with '/'")));
    }

    #[test]
    fn test_metrics_address_only_checked_when_enabled() {
        let mut config = ProxyConfig::default();
        config.observability.metrics_address = "bogus".into();
        assert!(validate_config(&config).is_ok());

        config.observability.metrics_enabled = true;
        assert_eq!(validate_config(&config).unwrap_err().len(), 1);
    }
}

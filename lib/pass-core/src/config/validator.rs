use std::path::PathBuf;

use secrecy::ExposeSecret;
use url::Url;

use super::ConfigValidationError;
use super::core_config::{IssuerConfig, SessionConfig, WalletApiConfig};
use crate::model::pass::PassClassRef;

/// Issuer identity after all required entries have been checked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuerSettings {
    pub class: PassClassRef,
    pub service_account_email: String,
    pub service_account_key_path: PathBuf,
    pub origins: Vec<String>,
    pub save_url_base: String,
}

pub fn validate_issuer_config(config: &IssuerConfig) -> Result<IssuerSettings, ConfigValidationError> {
    let issuer_id = required("issuer.issuerId", config.issuer_id.as_deref())?;
    validate_identifier_segment("issuer.issuerId", issuer_id)?;

    let class_suffix = required("issuer.classSuffix", config.class_suffix.as_deref())?;
    validate_identifier_segment("issuer.classSuffix", class_suffix)?;

    let service_account_email = required(
        "issuer.serviceAccountEmail",
        config.service_account_email.as_deref(),
    )?;
    if !service_account_email.contains('@') {
        return Err(ConfigValidationError::InvalidEntry {
            entry: "issuer.serviceAccountEmail",
            reason: "not an email address".to_owned(),
        });
    }

    let service_account_key_path = config
        .service_account_key_path
        .clone()
        .filter(|path| !path.as_os_str().is_empty())
        .ok_or(ConfigValidationError::MissingEntry(
            "issuer.serviceAccountKeyPath",
        ))?;

    if config.origins.is_empty() {
        return Err(ConfigValidationError::MissingEntry("issuer.origins"));
    }
    for origin in &config.origins {
        validate_http_url("issuer.origins", origin)?;
    }

    validate_http_url("issuer.saveUrlBase", &config.save_url_base)?;
    if !config.save_url_base.ends_with('/') {
        return Err(ConfigValidationError::InvalidEntry {
            entry: "issuer.saveUrlBase",
            reason: "must end with `/`".to_owned(),
        });
    }

    Ok(IssuerSettings {
        class: PassClassRef {
            issuer_id: issuer_id.to_owned(),
            class_suffix: class_suffix.to_owned(),
        },
        service_account_email: service_account_email.to_owned(),
        service_account_key_path,
        origins: config.origins.clone(),
        save_url_base: config.save_url_base.clone(),
    })
}

pub fn validate_session_config(config: &SessionConfig) -> Result<(), ConfigValidationError> {
    match &config.secret {
        Some(secret) if !secret.expose_secret().is_empty() => {}
        _ => return Err(ConfigValidationError::MissingEntry("session.secret")),
    }

    if config.cookie_name.is_empty() {
        return Err(ConfigValidationError::MissingEntry("session.cookieName"));
    }

    Ok(())
}

pub fn validate_wallet_api_config(config: &WalletApiConfig) -> Result<(), ConfigValidationError> {
    for (entry, url) in [
        ("walletApi.baseUrl", &config.base_url),
        ("walletApi.tokenUri", &config.token_uri),
    ] {
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigValidationError::InvalidEntry {
                entry,
                reason: format!("unsupported scheme `{}`", url.scheme()),
            });
        }
    }

    if config.timeout.is_zero() {
        return Err(ConfigValidationError::InvalidEntry {
            entry: "walletApi.timeout",
            reason: "must be greater than zero".to_owned(),
        });
    }

    Ok(())
}

fn required<'a>(
    entry: &'static str,
    value: Option<&'a str>,
) -> Result<&'a str, ConfigValidationError> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or(ConfigValidationError::MissingEntry(entry))
}

fn validate_identifier_segment(entry: &'static str, value: &str) -> Result<(), ConfigValidationError> {
    if let Some(invalid) = value
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-')))
    {
        return Err(ConfigValidationError::InvalidEntry {
            entry,
            reason: format!("invalid character `{invalid}`"),
        });
    }

    Ok(())
}

fn validate_http_url(entry: &'static str, value: &str) -> Result<(), ConfigValidationError> {
    let url = Url::parse(value).map_err(|err| ConfigValidationError::InvalidEntry {
        entry,
        reason: format!("`{value}`: {err}"),
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigValidationError::InvalidEntry {
            entry,
            reason: format!("`{value}`: unsupported scheme"),
        });
    }

    Ok(())
}

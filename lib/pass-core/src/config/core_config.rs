use std::path::{Path, PathBuf};
use std::time::Duration;

use figment::Figment;
#[cfg(feature = "config_env")]
use figment::providers::Env;
#[cfg(feature = "config_json")]
use figment::providers::Json;
#[cfg(feature = "config_yaml")]
use figment::providers::Yaml;
use figment::providers::{Data, Format};
use secrecy::SecretString;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_with::{DurationSeconds, serde_as};
use url::Url;

use super::ConfigParsingError;

#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
pub struct NoCustomConfig;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppCustomConfigSerdeDTO<Custom> {
    #[serde(default)]
    app: Custom,
}

#[derive(Debug, Clone)]
pub struct AppConfig<Custom> {
    pub core: CoreConfig,
    pub app: Custom,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoreConfig {
    #[serde(default)]
    pub issuer: IssuerConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub wallet_api: WalletApiConfig,
    #[serde(default)]
    pub pass: PassTemplateConfig,
}

/// Issuer identity. Every field is optional here, completeness is checked by
/// [`super::validator::validate_issuer_config`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssuerConfig {
    pub issuer_id: Option<String>,
    pub class_suffix: Option<String>,
    pub service_account_email: Option<String>,
    pub service_account_key_path: Option<PathBuf>,
    #[serde(default)]
    pub origins: Vec<String>,
    #[serde(default = "default_save_url_base")]
    pub save_url_base: String,
}

impl Default for IssuerConfig {
    fn default() -> Self {
        Self {
            issuer_id: None,
            class_suffix: None,
            service_account_email: None,
            service_account_key_path: None,
            origins: vec![],
            save_url_base: default_save_url_base(),
        }
    }
}

fn default_save_url_base() -> String {
    "https://pay.google.com/gp/v/save/".to_owned()
}

#[serde_as]
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionConfig {
    pub secret: Option<SecretString>,
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    #[serde_as(as = "DurationSeconds<u64>")]
    #[serde(default = "default_leeway")]
    pub leeway: Duration,
    pub issuer: Option<String>,
    pub audience: Option<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            secret: None,
            cookie_name: default_cookie_name(),
            leeway: default_leeway(),
            issuer: None,
            audience: None,
        }
    }
}

fn default_cookie_name() -> String {
    "session".to_owned()
}

fn default_leeway() -> Duration {
    Duration::from_secs(60)
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: Url,
    #[serde(default = "default_token_uri")]
    pub token_uri: Url,
    #[serde(default = "default_scope")]
    pub scope: String,
    #[serde_as(as = "DurationSeconds<u64>")]
    #[serde(default = "default_timeout")]
    pub timeout: Duration,
}

impl Default for WalletApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            token_uri: default_token_uri(),
            scope: default_scope(),
            timeout: default_timeout(),
        }
    }
}

#[allow(clippy::expect_used)]
fn default_base_url() -> Url {
    Url::parse("https://walletobjects.googleapis.com/walletobjects/v1")
        .expect("static URL is valid")
}

#[allow(clippy::expect_used)]
fn default_token_uri() -> Url {
    Url::parse("https://oauth2.googleapis.com/token").expect("static URL is valid")
}

fn default_scope() -> String {
    "https://www.googleapis.com/auth/wallet_object.issuer".to_owned()
}

fn default_timeout() -> Duration {
    Duration::from_secs(10)
}

/// Static content of the issued pass, profile fields are filled in per user
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PassTemplateConfig {
    #[serde(default = "default_card_title")]
    pub card_title: String,
    #[serde(default = "default_background_color")]
    pub hex_background_color: String,
    pub logo_uri: Option<Url>,
    pub hero_image_uri: Option<Url>,
    #[serde(default)]
    pub text_modules: Vec<TextModuleConfig>,
    #[serde(default)]
    pub links: Vec<LinkConfig>,
}

impl Default for PassTemplateConfig {
    fn default() -> Self {
        Self {
            card_title: default_card_title(),
            hex_background_color: default_background_color(),
            logo_uri: None,
            hero_image_uri: None,
            text_modules: vec![],
            links: vec![],
        }
    }
}

fn default_card_title() -> String {
    "Hack Western".to_owned()
}

fn default_background_color() -> String {
    "#4f2e91".to_owned()
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextModuleConfig {
    pub id: String,
    pub header: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkConfig {
    pub id: Option<String>,
    pub uri: Url,
    pub description: String,
}

pub enum InputFormat {
    #[cfg(feature = "config_yaml")]
    Yaml(Data<Yaml>),
    #[cfg(feature = "config_json")]
    Json(Data<Json>),
}

impl InputFormat {
    #[cfg(feature = "config_yaml")]
    pub fn yaml_file(p: impl AsRef<Path>) -> InputFormat {
        InputFormat::Yaml(Yaml::file(p))
    }

    #[cfg(feature = "config_yaml")]
    pub fn yaml_str(s: impl AsRef<str>) -> InputFormat {
        InputFormat::Yaml(Yaml::string(s.as_ref()))
    }

    #[cfg(feature = "config_json")]
    pub fn json_file(p: impl AsRef<Path>) -> InputFormat {
        InputFormat::Json(Json::file(p))
    }

    #[cfg(feature = "config_json")]
    pub fn json_str(s: impl AsRef<str>) -> InputFormat {
        InputFormat::Json(Json::string(s.as_ref()))
    }
}

impl<Custom> AppConfig<Custom>
where
    Custom: DeserializeOwned + Default,
{
    pub fn from_files(files: &[impl AsRef<Path>]) -> Result<Self, ConfigParsingError> {
        let mut inputs: Vec<InputFormat> = Vec::with_capacity(files.len());

        for path in files {
            #[cfg(feature = "config_yaml")]
            if path
                .as_ref()
                .extension()
                .is_some_and(|ext| ext == "yml" || ext == "yaml")
            {
                inputs.push(InputFormat::yaml_file(path));
                continue;
            }

            #[cfg(feature = "config_json")]
            if path.as_ref().extension() == Some("json".as_ref()) {
                inputs.push(InputFormat::json_file(path));
                continue;
            }

            return Err(ConfigParsingError::GeneralParsingError(format!(
                "Unsupported file or missing file extension: {:?}",
                path.as_ref().to_str()
            )));
        }

        AppConfig::parse(inputs)
    }

    #[cfg(feature = "config_yaml")]
    pub fn from_yaml(
        configs: impl IntoIterator<Item = impl AsRef<str>>,
    ) -> Result<Self, ConfigParsingError> {
        let inputs = configs.into_iter().map(InputFormat::yaml_str);

        AppConfig::parse(inputs)
    }

    pub fn parse(
        inputs: impl IntoIterator<Item = InputFormat>,
    ) -> Result<Self, ConfigParsingError> {
        let mut figment = Figment::new();

        for data in inputs {
            figment = match data {
                #[cfg(feature = "config_yaml")]
                InputFormat::Yaml(content) => figment.merge(content),
                #[cfg(feature = "config_json")]
                InputFormat::Json(content) => figment.merge(content),
            };
        }

        #[cfg(feature = "config_env")]
        {
            figment = figment.merge(Env::prefixed("PASS_").split("__").lowercase(false));
        }

        let core = figment
            .extract::<CoreConfig>()
            .map_err(|e| ConfigParsingError::GeneralParsingError(e.to_string()))?;
        let custom = figment
            .extract::<AppCustomConfigSerdeDTO<Custom>>()
            .map_err(|e| ConfigParsingError::GeneralParsingError(e.to_string()))?;

        Ok(Self {
            core,
            app: custom.app,
        })
    }
}

use std::sync::LazyLock;

use config::{Config, ConfigError, Environment, File};
use secrecy::Secret;
use serde::Deserialize;

use super::constants;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub app: AppSettings,
    pub mailbox_provider: MailboxProviderSettings,
    pub identity_backend: IdentityBackendSettings,
    pub postgres: PostgresSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub address: String,
    pub assets_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MailboxProviderSettings {
    pub base_url: String,
    pub timeout_in_millis: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct IdentityBackendSettings {
    pub base_url: String,
    pub anon_key: Secret<String>,
    pub redirect_to: String,
    pub timeout_in_millis: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PostgresSettings {
    pub url: Secret<String>,
}

impl Settings {
    /// Load the settings once; subsequent calls return the cached instance.
    ///
    /// # Panics
    /// Panics if a required value (identity backend URL and key, database
    /// URL) is missing from both the config file and the environment.
    pub fn load() -> &'static Settings {
        static SETTINGS: LazyLock<Settings> =
            LazyLock::new(|| Settings::build().expect("Failed to load configuration"));
        &SETTINGS
    }

    fn build() -> Result<Settings, ConfigError> {
        dotenvy::dotenv().ok();

        Config::builder()
            .set_default("app.address", constants::prod::APP_ADDRESS)?
            .set_default("app.assets_dir", constants::prod::ASSETS_DIR)?
            .set_default(
                "mailbox_provider.base_url",
                constants::prod::mailbox_provider::BASE_URL,
            )?
            .set_default(
                "mailbox_provider.timeout_in_millis",
                constants::prod::mailbox_provider::TIMEOUT_IN_MILLIS,
            )?
            .set_default("identity_backend.redirect_to", constants::prod::REDIRECT_TO)?
            .set_default(
                "identity_backend.timeout_in_millis",
                constants::prod::identity_backend::TIMEOUT_IN_MILLIS,
            )?
            .add_source(File::with_name("config/driftmail").required(false))
            .add_source(
                Environment::with_prefix("DRIFTMAIL")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
    }
}

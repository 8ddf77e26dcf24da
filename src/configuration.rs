use {
    crate::activation_client::ActivationClient,
    secrecy::Secret,
    serde_aux::field_attributes::deserialize_number_from_string,
    std::time::Duration,
};

#[derive(serde::Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub backend: BackendSettings,
}

#[derive(serde::Deserialize, Clone)]
pub struct ApplicationSettings {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    /// Signs the flash message cookies, must be at least 64 bytes long
    pub hmac_secret: Secret<String>,
}

/// Where the activation endpoint lives
#[derive(serde::Deserialize, Clone)]
pub struct BackendSettings {
    pub base_url: String,
    /// No timeout unless one is configured
    pub timeout_milliseconds: Option<u64>,
}

impl BackendSettings {
    pub fn client(self) -> Result<ActivationClient, reqwest::Error> {
        let timeout = self.timeout();
        ActivationClient::new(self.base_url, timeout)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_milliseconds.map(Duration::from_millis)
    }
}

/// Read `base` settings, then the environment specific file, then `APP_*` variables.
pub fn get_config() -> Result<Settings, config::ConfigError> {
    let mut settings = config::Config::default();
    let base_path =
        std::env::current_dir().map_err(|e| config::ConfigError::Message(e.to_string()))?;
    let config_dir = base_path.join("configuration");

    settings.merge(config::File::from(config_dir.join("base")).required(true))?;

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(config::ConfigError::Message)?;

    settings.merge(config::File::from(config_dir.join(environment.as_str())).required(true))?;

    // e.g. `APP_APPLICATION__PORT=5001` sets `Settings.application.port`
    settings.merge(config::Environment::with_prefix("app").separator("__"))?;

    settings.try_into()
}

/// Runtime environment of the application
#[derive(Debug)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. Use either `local` or `production`.",
                other
            )),
        }
    }
}

use serde_aux::field_attributes::deserialize_number_from_string;
use std::convert::{TryFrom, TryInto};

#[derive(serde::Deserialize, Clone, Debug)]
pub struct Settings {
    pub app: AppSettings,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct AppSettings {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    //normal serde will fail to deserialize numbers into string
    pub port: u16,
    //initial greeting text - the runtime-updatable state starts from this
    pub greeting: String,
}

#[derive(Debug, Clone)]
pub enum Environment {
    Local,
    Prod,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Prod => "prod",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "prod" => Ok(Self::Prod),
            _ => Err(format!("{} is not a supported environment", s)),
        }
    }
}

pub fn get_config() -> Result<Settings, config::ConfigError> {
    //create path for config folder
    let base_path = std::env::current_dir().expect("failed to get cur dir");
    let config_dir = base_path.join("config");

    //use the config crate to create an instance of settings
    let mut settings = config::Config::default();

    //merge in base config
    let base_config = config::File::from(config_dir.join("base")).required(true);
    settings.merge(base_config)?;

    //get the env variable
    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into()) //gives us a string one way or another
        .try_into() //try to convert the string to enum
        .expect("failed to load environment");

    let env_config = config::File::from(config_dir.join(environment.as_str())).required(true);
    settings.merge(env_config)?;

    // Add in settings from environment variables (with a prefix of APP and '__' as separator)
    // E.g. `APP_APP__GREETING=Howdy` would set `Settings.app.greeting`
    settings.merge(config::Environment::with_prefix("app").separator("__"))?;

    //try to convert the above file into the above struct
    settings.try_into()
}

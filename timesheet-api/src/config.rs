use std::str::FromStr;

use serde::Deserialize;
use serde_with::serde_as;
use strum::{Display, EnumString};

#[derive(Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub auth: AuthSettings,
    pub timesheet: TimesheetSettings,
}

#[serde_as]
#[derive(Deserialize, Clone)]
pub struct ApplicationSettings {
    #[serde_as(as = "serde_with::DisplayFromStr")]
    pub port: u16,
    pub host: String,
    pub app_url: String,
    pub disable_auth: bool,
}

#[derive(Deserialize, Clone)]
pub struct AuthSettings {
    /// Compare stored passwords as plaintext instead of argon2 hashes.
    /// Insecure, local demo only.
    #[serde(default)]
    pub insecure_plaintext_passwords: bool,
    pub session_inactivity_days: i64,
    #[serde(default)]
    pub users: Vec<UserSettings>,
}

#[derive(Deserialize, Clone)]
pub struct UserSettings {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Argon2 PHC string, or the raw password in plaintext mode.
    pub password: String,
}

#[derive(Deserialize, Clone, Debug)]
pub struct TimesheetSettings {
    pub weekly_target_hours: f64,
    pub seed_demo_entries: bool,
}

pub fn read_config() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().expect("Failed to determine the current directory");
    let config_directory = base_path.join("config");

    let environment = Environment::from_str(
        std::env::var("APP_ENVIRONMENT")
            .unwrap_or_else(|_| "local".into())
            .as_str(),
    )
    .expect("Failed to parse APP_ENVIRONMENT");
    let environment_filename = format!("{}.yaml", environment);

    let settings = config::Config::builder()
        .add_source(config::File::from(config_directory.join("base.yaml")))
        .add_source(config::File::from(
            config_directory.join(environment_filename),
        ))
        .add_source(
            config::Environment::with_prefix("TIMESHEET")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}

#[derive(Display, Debug, EnumString)]
pub enum Environment {
    #[strum(ascii_case_insensitive, serialize = "local")]
    Local,
    #[strum(ascii_case_insensitive, serialize = "production")]
    Production,
}

/// Filesystem adapters for job configuration and collector settings
mod job_config_file;
mod settings_file;

pub use job_config_file::{JobConfigFile, JOB_CONFIG_FILENAME};
pub use settings_file::{SettingsFile, SETTINGS_FILENAME};

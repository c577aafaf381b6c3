use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::models::schedule::WeeklySchedule;
use crate::schedule::store::save_schedule;
use crate::utils::path::is_absolute;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub schedule_file: String,
    #[serde(default = "default_time_format")]
    pub time_format: String,
    #[serde(default = "default_show_icons")]
    pub show_icons: bool,
}

fn default_time_format() -> String {
    "12h".to_string()
}
fn default_show_icons() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            schedule_file: Self::schedule_file().to_string_lossy().to_string(),
            time_format: default_time_format(),
            show_icons: default_show_icons(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("praxishours")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".praxishours")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("praxishours.conf")
    }

    /// Return the full path of the schedule JSON file
    pub fn schedule_file() -> PathBuf {
        Self::config_dir().join("schedule.json")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).expect("❌ Failed to read configuration file");
            serde_yaml::from_str(&content).expect("❌ Failed to parse configuration file")
        } else {
            Config::default()
        }
    }

    /// Initialize configuration and schedule files
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // Schedule file: user provided or default
        let schedule_path = if let Some(name) = custom_name {
            if is_absolute(&name) {
                PathBuf::from(name)
            } else {
                dir.join(name)
            }
        } else {
            Self::schedule_file()
        };

        let config = Config {
            schedule_file: schedule_path.to_string_lossy().to_string(),
            time_format: default_time_format(),
            show_icons: default_show_icons(),
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config).unwrap();
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Seed the default schedule if the file does not exist yet
        if !schedule_path.exists() {
            let schedule = WeeklySchedule::default();
            save_schedule(&schedule_path.to_string_lossy(), &schedule)
                .map_err(|e| io::Error::other(e.to_string()))?;
        }

        println!("✅ Schedule:    {:?}", schedule_path);

        Ok(())
    }
}

use platform_dirs::AppDirs;
use serde::Deserialize;
use ron::de::from_reader;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    /// longest accepted input line, in bytes
    #[serde(default = "defaults::max_input_len")]
    pub max_input_len: usize,
    /// tracing filter used when RUST_LOG is not set
    #[serde(default = "defaults::log_level")]
    pub log_level: String,
}

macro_rules! default_ {
    ($name:ident, $type:ident) => {
        pub fn $name() -> $type {
            Config::default().$name
        }
    };
}

mod defaults {
    use super::Config;
    default_!(max_input_len, usize);
    default_!(log_level, String);
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_input_len: 100_000,
            log_level: "warn".to_owned(),
        }
    }
}

impl Config {
    pub fn default_path() -> Option<PathBuf> {
        let dirs = AppDirs::new(Some("rpncalc"), false)?;
        Some(dirs.config_dir.join("rpncalc.cfg"))
    }

    pub fn load() -> Self {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Reads `path` if it exists. Nothing is ever written back.
    pub fn load_from(path: &Path) -> Self {
        let file = match fs::File::open(path) {
            Ok(file) => file,
            Err(_) => return Self::default(),
        };
        // missing fields take their defaults, a broken file is ignored
        from_reader::<fs::File, Self>(file).unwrap_or_default()
    }
}

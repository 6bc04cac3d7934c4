use dirs::home_dir;
use serde::{Deserialize, Serialize};
use std::{
    env,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};
use tracing::debug;

use crate::errors::{RegisterError, RegisterResult};
use crate::register::{CursorHeights, DisplayMode};

const DEFAULT_DIR_NAME: &str = ".split_register";
const HOME_ENV: &str = "SPLIT_REGISTER_HOME";
const CONFIG_FILE: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";

pub const DEFAULT_SPLIT_MARKER: &str = "-- Split Transaction --";
pub const DEFAULT_COLUMN_COUNT: usize = 9;

/// Per-register presentation and editing preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegisterConfig {
    pub display_mode: DisplayMode,
    /// File a split appended on an empty row under the account of the
    /// split above it.
    pub force_double_entry_awareness: bool,
    pub cursor_heights: CursorHeights,
    /// Shown as the other account of transactions with three or more splits.
    pub split_marker: String,
    pub column_count: usize,
}

impl Default for RegisterConfig {
    fn default() -> Self {
        Self {
            display_mode: DisplayMode::default(),
            force_double_entry_awareness: false,
            cursor_heights: CursorHeights::default(),
            split_marker: DEFAULT_SPLIT_MARKER.into(),
            column_count: DEFAULT_COLUMN_COUNT,
        }
    }
}

impl RegisterConfig {
    pub fn with_mode(mut self, mode: DisplayMode) -> Self {
        self.display_mode = mode;
        self
    }

    /// Rejects layouts that cannot place a cursor.
    pub fn validate(&self) -> RegisterResult<()> {
        let heights = &self.cursor_heights;
        if [heights.single, heights.double, heights.transaction, heights.split].contains(&0) {
            return Err(RegisterError::InvalidConfig(
                "entry cursors must be at least one row tall".into(),
            ));
        }
        if self.column_count == 0 {
            return Err(RegisterError::InvalidConfig(
                "column_count must be positive".into(),
            ));
        }
        Ok(())
    }
}

/// Returns the configuration directory, defaulting to `~/.split_register`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> RegisterResult<Self> {
        Self::with_base_dir(app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> RegisterResult<Self> {
        fs::create_dir_all(&base)?;
        Ok(Self {
            path: base.join(CONFIG_FILE),
        })
    }

    pub fn load(&self) -> RegisterResult<RegisterConfig> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no register config; using defaults");
            return Ok(RegisterConfig::default());
        }
        let data = fs::read_to_string(&self.path)?;
        let config: RegisterConfig = serde_json::from_str(&data)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, config: &RegisterConfig) -> RegisterResult<()> {
        config.validate()?;
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> RegisterResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

//! Profile persistence
//!
//! The whole profile is one pretty-printed JSON file:
//! ```text
//! ~/.local/share/mnemo/profile.json
//! ```
//! A missing file loads as a fresh default profile.

use std::fs;
use std::path::PathBuf;

use thiserror::Error;

use crate::profile::Profile;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("could not determine a data directory for this platform")]
    NoDataDir,
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// Storage manager for the learner's profile
pub struct ProfileStorage {
    base_path: PathBuf,
}

impl ProfileStorage {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    /// Default platform data directory (e.g. ~/.local/share/mnemo)
    pub fn default_data_dir() -> Result<PathBuf> {
        dirs::data_local_dir()
            .map(|dir| dir.join("mnemo"))
            .ok_or(StorageError::NoDataDir)
    }

    fn profile_path(&self) -> PathBuf {
        self.base_path.join("profile.json")
    }

    /// Load the stored profile, or a fresh default if none exists yet
    pub fn load(&self) -> Result<Profile> {
        let path = self.profile_path();
        if !path.exists() {
            log::info!("No profile at {:?}, starting fresh", path);
            return Ok(Profile::new());
        }

        let content = fs::read_to_string(&path)?;
        let profile: Profile = serde_json::from_str(&content)?;
        Ok(profile)
    }

    /// Write the profile, creating the data directory if needed
    pub fn save(&self, profile: &Profile) -> Result<()> {
        fs::create_dir_all(&self.base_path)?;
        let content = serde_json::to_string_pretty(profile)?;
        fs::write(self.profile_path(), content)?;
        Ok(())
    }
}

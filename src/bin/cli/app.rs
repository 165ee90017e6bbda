use std::path::PathBuf;

use anyhow::{Context, Result};

use mnemo::storage::ProfileStorage;
use mnemo::Profile;

/// Shared application state for CLI commands
pub struct App {
    pub storage: ProfileStorage,
    pub profile: Profile,
}

impl App {
    /// Load the profile from the given directory, or the platform default
    pub fn new(data_dir: Option<PathBuf>) -> Result<Self> {
        let base_path = match data_dir {
            Some(dir) => dir,
            None => ProfileStorage::default_data_dir()
                .context("Failed to determine data directory")?,
        };

        let storage = ProfileStorage::new(base_path);
        let profile = storage.load().context("Failed to load profile")?;

        Ok(Self { storage, profile })
    }

    /// Persist the profile back to disk
    pub fn save(&self) -> Result<()> {
        self.storage
            .save(&self.profile)
            .context("Failed to save profile")
    }
}

//! Data directory storage
//!
//! Directory structure:
//! ~/.nestplan/
//!   plans.yaml       # Every plan, plus the active plan name
//!   settings.yaml    # Planner assumptions (inflation, withdrawal tiers)
//!   nestplan.log

use std::fs;
use std::path::{Path, PathBuf};

use nestplan_core::config::PlannerConfig;

use super::plan_data::PlanBook;
use crate::util::io::atomic_write;

/// Error types for storage operations
#[derive(Debug)]
pub enum StorageError {
    /// `plans.yaml` does not exist yet
    NotInitialized(PathBuf),
    Io(String),
    Parse(String),
    Serialize(String),
    /// Settings parsed but describe an unusable configuration
    InvalidSettings(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::NotInitialized(path) => write!(
                f,
                "No plans found at {}; run `nestplan init` first",
                path.display()
            ),
            StorageError::Io(msg) => write!(f, "IO error: {}", msg),
            StorageError::Parse(msg) => write!(f, "Parse error: {}", msg),
            StorageError::Serialize(msg) => write!(f, "Serialization error: {}", msg),
            StorageError::InvalidSettings(msg) => write!(f, "Invalid settings: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

/// Manages the data directory holding plans and settings
#[derive(Debug, Clone)]
pub struct DataDirectory {
    root: PathBuf,
}

impl DataDirectory {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Get the default data directory path (~/.nestplan/)
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".nestplan")
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn plans_path(&self) -> PathBuf {
        self.root.join("plans.yaml")
    }

    pub fn settings_path(&self) -> PathBuf {
        self.root.join("settings.yaml")
    }

    /// Check if the data directory has been initialized
    pub fn exists(&self) -> bool {
        self.plans_path().exists()
    }

    /// Create the directory and write a starter plan and default settings.
    ///
    /// Existing files are kept unless `force` is set.
    pub fn init(&self, sample: &PlanBook, force: bool) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root)
            .map_err(|e| StorageError::Io(format!("Failed to create data directory: {}", e)))?;

        if force || !self.plans_path().exists() {
            self.save_book(sample)?;
        }
        if force || !self.settings_path().exists() {
            self.save_settings(&PlannerConfig::default())?;
        }
        tracing::info!(root = %self.root.display(), force, "data directory initialized");
        Ok(())
    }

    pub fn load_book(&self) -> Result<PlanBook, StorageError> {
        let path = self.plans_path();
        if !path.exists() {
            return Err(StorageError::NotInitialized(path));
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| StorageError::Io(format!("Failed to read plans: {}", e)))?;
        let book = PlanBook::from_yaml(&content)
            .map_err(|e| StorageError::Parse(format!("Failed to parse plans: {}", e)))?;

        tracing::debug!(plans = book.plans.len(), "loaded plan book");
        Ok(book)
    }

    pub fn save_book(&self, book: &PlanBook) -> Result<(), StorageError> {
        let yaml = book
            .to_yaml()
            .map_err(|e| StorageError::Serialize(format!("Failed to serialize plans: {}", e)))?;

        atomic_write(&self.plans_path(), &yaml)
            .map_err(|e| StorageError::Io(format!("Failed to write plans: {}", e)))
    }

    /// Load and validate settings; a missing file means defaults
    pub fn load_settings(&self) -> Result<PlannerConfig, StorageError> {
        let path = self.settings_path();
        if !path.exists() {
            return Ok(PlannerConfig::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| StorageError::Io(format!("Failed to read settings: {}", e)))?;
        let config: PlannerConfig = serde_saphyr::from_str(&content)
            .map_err(|e| StorageError::Parse(format!("Failed to parse settings: {}", e)))?;

        config
            .validate()
            .map_err(|e| StorageError::InvalidSettings(e.to_string()))?;
        Ok(config)
    }

    pub fn save_settings(&self, config: &PlannerConfig) -> Result<(), StorageError> {
        let yaml = serde_saphyr::to_string(config)
            .map_err(|e| StorageError::Serialize(format!("Failed to serialize settings: {}", e)))?;

        atomic_write(&self.settings_path(), &yaml)
            .map_err(|e| StorageError::Io(format!("Failed to write settings: {}", e)))
    }
}

//! Builder for creating and configuring WizardController instances.

use std::path::{Path, PathBuf};

use tokio::task;

use super::WizardController;
use crate::{
    directory::Directory,
    error::{Result, ResultExt},
    models::PlanConfiguration,
};

/// Where the session's directory comes from.
#[derive(Debug, Clone)]
enum DirectorySource {
    /// `$XDG_CONFIG_HOME/planwright/directory.json` if present, else the sample
    Default,
    Path(PathBuf),
    Loaded(Directory),
    Sample,
}

/// Builder for creating and configuring WizardController instances.
#[derive(Debug, Clone)]
pub struct WizardBuilder {
    directory: DirectorySource,
    configuration: Option<PlanConfiguration>,
}

impl WizardBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            directory: DirectorySource::Default,
            configuration: None,
        }
    }

    /// Sets a directory file to load.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_CONFIG_HOME/planwright/directory.json` when that file exists,
    /// otherwise the built-in sample directory.
    pub fn with_directory_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.directory = DirectorySource::Path(path.as_ref().to_path_buf());
        }
        self
    }

    /// Uses an already loaded directory.
    pub fn with_directory(mut self, directory: Directory) -> Self {
        self.directory = DirectorySource::Loaded(directory);
        self
    }

    /// Uses the built-in sample directory without looking at the filesystem.
    pub fn with_sample_directory(mut self) -> Self {
        self.directory = DirectorySource::Sample;
        self
    }

    /// Starts the session from an existing configuration instead of defaults.
    pub fn with_configuration(mut self, configuration: Option<PlanConfiguration>) -> Self {
        if let Some(configuration) = configuration {
            self.configuration = Some(configuration);
        }
        self
    }

    /// Builds the configured wizard session.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::FileSystem` if the directory file cannot be read
    /// Returns `WizardError::Serialization` if the directory file is malformed
    pub async fn build(self) -> Result<WizardController> {
        let directory = match self.directory {
            DirectorySource::Loaded(directory) => directory,
            DirectorySource::Sample => Directory::sample(),
            DirectorySource::Path(path) => Self::load_directory(path).await?,
            DirectorySource::Default => match Self::default_directory_path() {
                Some(path) => Self::load_directory(path).await?,
                None => {
                    log::debug!("No directory file found, using the sample directory");
                    Directory::sample()
                }
            },
        };

        let mut configuration = self.configuration.unwrap_or_default();
        let dropped = configuration.drop_orphan_assignments();
        if !dropped.is_empty() {
            log::warn!(
                "Dropped {} entries of members who are not participants",
                dropped.join(" and ")
            );
        }

        Ok(WizardController::new(configuration, directory))
    }

    async fn load_directory(path: PathBuf) -> Result<Directory> {
        task::spawn_blocking(move || Directory::load(&path))
            .await
            .with_context("Directory loading task failed")?
    }

    /// Returns the XDG directory file if one exists.
    fn default_directory_path() -> Option<PathBuf> {
        xdg::BaseDirectories::with_prefix("planwright").find_config_file("directory.json")
    }
}

impl Default for WizardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

use std::path::{Path, PathBuf};

use super::{Config, parse::project_root};
use crate::{Error, Result};

/// A modelkit.toml file with both its project root and the parsed configuration.
#[derive(Debug)]
pub struct ConfigFile {
    root: PathBuf,
    config: Config,
}

impl ConfigFile {
    /// Open and parse a modelkit.toml file.
    ///
    /// The root is absolute, so configured paths stay valid for processes
    /// started from a different working directory.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::read(path, e))?;
        let absolute = std::path::absolute(path).map_err(|e| Error::read(path, e))?;
        let root = project_root(&absolute);
        let config = Config::from_str_with_root(&content, &path.display().to_string(), &root)?;

        Ok(Self { root, config })
    }

    /// Get the project root the configuration paths are resolved against.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the parsed configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }
}

//! Application context providing dependency injection root.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::{Config, ConfigError};
use crate::di::{Context as ContextDerive, FromRef};

/// The directory every relative operation is anchored to.
///
/// Fixed for the lifetime of the process. In production it is derived from
/// the executable location; tests build one over a temporary directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRoot(Arc<PathBuf>);

impl ProjectRoot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(Arc::new(path.into()))
    }

    /// Root derived from the running executable: the parent of the directory
    /// holding the binary (`<root>/mcp/jamkit` → `<root>`).
    pub fn from_executable() -> io::Result<Self> {
        let exe = std::env::current_exe()?.canonicalize()?;
        let bin_dir = exe
            .parent()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "executable has no parent"))?;
        let root = bin_dir.parent().unwrap_or(bin_dir);
        Ok(Self::new(root))
    }

    pub fn path(&self) -> &Path {
        &self.0
    }

    /// Join a relative path onto the root. Absolute paths are returned as-is.
    pub fn join(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.0.join(relative)
    }

    /// Directory name used as the first line of the rendered tree.
    pub fn display_name(&self) -> String {
        self.0
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.0.to_string_lossy().into_owned())
    }
}

/// Root application context for dependency injection.
///
/// `#[derive(Context)]` generates `FromRef` implementations for each field,
/// so services deriving `FromContext` can resolve them at compile time.
#[derive(ContextDerive, Clone)]
pub struct Context {
    /// Project root all tools operate under.
    pub root: ProjectRoot,
    /// Application configuration.
    pub config: Arc<Config>,
}

impl Context {
    /// Creates a new context with the given dependencies.
    pub fn new(root: ProjectRoot, config: Config) -> Self {
        Self {
            root,
            config: Arc::new(config),
        }
    }

    /// Resolve a dependency from the context.
    ///
    /// Works for any service that derives `FromContext`.
    pub fn resolve<T: FromRef<Context>>(&self) -> T {
        T::from_ref(self)
    }

    /// Build the production context: root from the executable, layered config.
    pub fn from_environment() -> color_eyre::Result<Self> {
        let root = ProjectRoot::from_executable()?;
        let config = Config::load(root.path()).map_err(|e: ConfigError| {
            color_eyre::eyre::eyre!("Failed to load configuration: {}", e)
        })?;
        Ok(Self::new(root, config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_uses_last_component() {
        let root = ProjectRoot::new("/tmp/my-jam");
        assert_eq!(root.display_name(), "my-jam");
        assert_eq!(root.join("docs/TASKS.md"), PathBuf::from("/tmp/my-jam/docs/TASKS.md"));
    }

    #[test]
    fn test_from_executable_is_absolute() {
        let root = ProjectRoot::from_executable().unwrap();
        assert!(root.path().is_absolute());
    }
}

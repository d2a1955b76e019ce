use log::trace;
use path_clean::PathClean;
use std::path::PathBuf;

use crate::constants::{GENERATION_DIR, MIDDLEWARE_FILE_STEM, ROUTE_EXTENSION, ROUTES_DIR};

/// Settings for a single route scan.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Project root containing the routes directory
    pub root: PathBuf,
    /// Name of the routes directory under `root`
    pub routes_dir: String,
    /// Extension (without the dot) of route source files
    pub route_extension: String,
    /// File stem of middleware files
    pub middleware_name: String,
    /// Directory under `root` that generated code is written to; import paths are relative to it
    pub generation_dir: PathBuf,
    /// Skip files excluded by .gitignore
    pub respect_gitignore: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            routes_dir: ROUTES_DIR.to_string(),
            route_extension: ROUTE_EXTENSION.to_string(),
            middleware_name: MIDDLEWARE_FILE_STEM.to_string(),
            generation_dir: PathBuf::from(GENERATION_DIR),
            respect_gitignore: false,
        }
    }
}

impl ScanConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into(), ..Self::default() }
    }

    pub fn routes_root(&self) -> PathBuf {
        let p = self.root.join(&self.routes_dir).clean();
        trace!("Routes root: {}", p.display());
        p
    }

    pub fn generation_root(&self) -> PathBuf {
        self.root.join(&self.generation_dir).clean()
    }

    /// File name of the middleware file, e.g. `_middleware.dart`
    pub fn middleware_file_name(&self) -> String {
        format!("{}.{}", self.middleware_name, self.route_extension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = ScanConfig::default();
        assert_eq!(cfg.routes_dir, "routes");
        assert_eq!(cfg.route_extension, "dart");
        assert_eq!(cfg.middleware_file_name(), "_middleware.dart");
        assert!(!cfg.respect_gitignore);
    }

    #[test]
    fn test_routes_root_is_cleaned() {
        let cfg = ScanConfig::new("/project/app/../api/.");
        assert_eq!(cfg.routes_root(), PathBuf::from("/project/api/routes"));
    }

    #[test]
    fn test_generation_root() {
        let cfg = ScanConfig::new("/project");
        assert_eq!(cfg.generation_root(), PathBuf::from("/project/.dart_frog"));
    }
}

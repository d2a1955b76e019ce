use anyhow::{Result, anyhow};
use clap::{Parser, ValueEnum};
use log::{debug, info};
use std::{env, path::PathBuf};

use routemap_core::{GENERATION_DIR, MIDDLEWARE_FILE_STEM, ROUTE_EXTENSION, ROUTES_DIR, ScanConfig};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Directory tree with routes and middleware
    #[default]
    Tree,
    /// The full route configuration as JSON
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "routes")]
#[command(about = "Scan a routes directory and show the routing table it produces")]
pub struct Config {
    /// Project root containing the routes directory (defaults to the current directory)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Name of the routes directory under the root
    #[arg(long, default_value = ROUTES_DIR)]
    pub routes_dir: String,

    /// Extension of route source files
    #[arg(long, default_value = ROUTE_EXTENSION)]
    pub extension: String,

    /// File stem of middleware files
    #[arg(long, default_value = MIDDLEWARE_FILE_STEM)]
    pub middleware: String,

    /// Directory generated code is written to, relative to the root
    #[arg(long, default_value = GENERATION_DIR)]
    pub generation_dir: PathBuf,

    /// Skip route files excluded by .gitignore
    #[arg(long)]
    pub respect_gitignore: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Tree)]
    pub format: OutputFormat,
}

impl Config {
    /// Initialize the config by resolving the root directory
    pub fn initialize(&mut self) -> Result<()> {
        let root = if let Some(r) = self.root.take() {
            debug!("Using provided root directory: {:?}", r);
            r.canonicalize().unwrap_or(r)
        } else {
            debug!("No root provided, using current directory");
            env::current_dir()?
        };
        info!("Using root directory: {}", root.display());

        self.root = Some(root);
        Ok(())
    }

    /// Get the root directory, returning an error if not initialized
    pub fn root(&self) -> Result<&PathBuf> {
        self.root
            .as_ref()
            .ok_or_else(|| anyhow!("Config not initialized - call initialize() first"))
    }

    pub fn scan_config(&self) -> Result<ScanConfig> {
        Ok(ScanConfig {
            root: self.root()?.clone(),
            routes_dir: self.routes_dir.clone(),
            route_extension: self.extension.clone(),
            middleware_name: self.middleware.clone(),
            generation_dir: self.generation_dir.clone(),
            respect_gitignore: self.respect_gitignore,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_defaults() {
        let cfg = Config::parse_from(["routes"]);
        assert_eq!(cfg.routes_dir, "routes");
        assert_eq!(cfg.extension, "dart");
        assert_eq!(cfg.middleware, "_middleware");
        assert_eq!(cfg.generation_dir, PathBuf::from(".dart_frog"));
        assert_eq!(cfg.format, OutputFormat::Tree);
        assert!(!cfg.respect_gitignore);
        assert!(cfg.root.is_none());
    }

    #[test]
    fn test_parse_overrides() {
        let cfg = Config::parse_from([
            "routes",
            "--root",
            "/srv/app",
            "--routes-dir",
            "api",
            "--format",
            "json",
            "--respect-gitignore",
        ]);
        assert_eq!(cfg.root, Some(PathBuf::from("/srv/app")));
        assert_eq!(cfg.routes_dir, "api");
        assert_eq!(cfg.format, OutputFormat::Json);
        assert!(cfg.respect_gitignore);
    }

    #[test]
    fn test_root_requires_initialize() {
        let cfg = Config::parse_from(["routes"]);
        assert!(cfg.root().is_err());
        assert!(cfg.scan_config().is_err());
    }

    #[test]
    fn test_initialize_canonicalizes_root() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("app");
        std::fs::create_dir_all(&nested).unwrap();

        let mut cfg = Config::parse_from(["routes"]);
        cfg.root = Some(nested.join("..").join("app"));
        cfg.initialize().unwrap();

        assert_eq!(cfg.root().unwrap(), &nested.canonicalize().unwrap());
        let scan = cfg.scan_config().unwrap();
        assert_eq!(scan.routes_root(), nested.canonicalize().unwrap().join("routes"));
    }
}

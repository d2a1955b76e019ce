//! Core of routemap.
//!
//! This crate turns a file-system routes tree into the metadata a code
//! generator needs to emit a server's routing table:
//! - Walking the `routes` directory and classifying route and middleware files
//! - Assigning deterministic aliases to directories, routes and middleware
//! - Deriving mount paths, route strings and import paths
//! - Assembling everything into a [`RouteConfiguration`]
//!
//! # Examples
//!
//! ```no_run
//! use routemap_core::{ScanConfig, build_route_configuration};
//!
//! # fn main() -> Result<(), routemap_core::RouteScanError> {
//! let configuration = build_route_configuration(&ScanConfig::new("/path/to/project"))?;
//!
//! // Compose nested routers leaves first
//! for dir in configuration.generation_order() {
//!     println!("{} mounts at {}", dir.name, dir.route);
//! }
//! # Ok(())
//! # }
//! ```

mod alias;
mod assembler;
mod config;
mod constants;
mod error;
mod paths;
mod types;
mod walker;

// Re-export public API
pub use alias::AliasCounter;
pub use assembler::{ModelAssembler, RouteVisitor};
pub use config::ScanConfig;
pub use constants::{GENERATION_DIR, MIDDLEWARE_FILE_STEM, ROUTE_EXTENSION, ROUTES_DIR};
pub use error::{Result, RouteScanError};
pub use paths::{join_route, to_path_pattern};
pub use types::{MiddlewareFile, RouteConfiguration, RouteDirectory, RouteFile};
pub use walker::{build_route_configuration, walk_routes};

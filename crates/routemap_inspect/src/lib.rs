//! Route scanning and reporting for file-system routed projects.
//!
//! This crate runs the `routemap_core` scan for a project, checks the result
//! for routes served by more than one file, and prints the routing table as a
//! tree or as JSON.
//!
//! # Examples
//!
//! ```no_run
//! use routemap_inspect::{Config, OutputFormat, run_route_scan};
//! use std::io::{BufWriter, Write};
//!
//! # fn main() -> anyhow::Result<()> {
//! let cfg = Config {
//!     root: Some(std::path::PathBuf::from("/path/to/project")),
//!     routes_dir: "routes".to_string(),
//!     extension: "dart".to_string(),
//!     middleware: "_middleware".to_string(),
//!     generation_dir: ".dart_frog".into(),
//!     respect_gitignore: false,
//!     format: OutputFormat::Tree,
//! };
//!
//! let result = run_route_scan(cfg)?;
//!
//! // Use buffered output for better performance
//! let mut stdout = BufWriter::new(std::io::stdout());
//! routemap_inspect::print_route_tree(&mut stdout, &result)?;
//! stdout.flush()?;
//! # Ok(())
//! # }
//! ```

mod checker;
mod config;
mod conflicts;
mod reporter;
mod types;

// Re-export public API
pub use checker::run_route_scan;
pub use config::{Config, OutputFormat};
pub use conflicts::find_conflicts;
pub use reporter::{print_conflicts, print_json, print_route_tree};
pub use types::{RouteConflict, ScanResult};

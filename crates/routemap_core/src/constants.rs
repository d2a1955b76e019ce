//! Naming conventions for file-system routing.
//!
//! A project keeps its handlers under a `routes` directory. Every file with
//! the routing source extension becomes a route, except the reserved
//! middleware file which applies to its directory and everything below it.
//!
//! ## Layout
//!
//! ```text
//! routes/
//! ├── _middleware.dart      global middleware
//! ├── index.dart            /
//! └── users/
//!     ├── _middleware.dart  nested middleware for /users
//!     ├── index.dart        /users
//!     └── [id].dart         /users/[id]
//! ```

/// Directory under the project root that holds route files
pub const ROUTES_DIR: &str = "routes";

/// Extension (without the dot) of route handler source files
pub const ROUTE_EXTENSION: &str = "dart";

/// File stem reserved for middleware
pub const MIDDLEWARE_FILE_STEM: &str = "_middleware";

/// File stem that maps to the enclosing directory itself
pub const INDEX_FILE_STEM: &str = "index";

/// Directory, relative to the project root, that generated code lives in
pub const GENERATION_DIR: &str = ".dart_frog";

/// Alias prefixes for the three alias namespaces
pub const DIRECTORY_ALIAS_PREFIX: &str = "d";
pub const MIDDLEWARE_ALIAS_PREFIX: &str = "m";
pub const ROUTE_ALIAS_PREFIX: &str = "r";

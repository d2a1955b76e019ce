use serde::Serialize;
use std::collections::BTreeMap;

use crate::paths::join_route;

/// A single route handler file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteFile {
    /// Alias used by generated code
    pub name: String,
    /// Import path relative to the generation directory
    pub path: String,
    /// Route relative to the enclosing directory's mount path
    pub route: String,
}

impl RouteFile {
    pub fn new(name: impl Into<String>, path: impl Into<String>, route: impl Into<String>) -> Self {
        Self { name: name.into(), path: path.into(), route: route.into() }
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({ "name": self.name, "path": self.path, "route": self.route })
    }
}

/// A `_middleware` file. The one at the routes root is the global middleware.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MiddlewareFile {
    pub name: String,
    pub path: String,
}

impl MiddlewareFile {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self { name: name.into(), path: path.into() }
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({ "name": self.name, "path": self.path })
    }
}

/// One directory of the routes tree mounted at `route`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteDirectory {
    pub name: String,
    /// Mount path, always starting with `/`
    #[serde(rename = "path")]
    pub route: String,
    /// Nested middleware only; the root's middleware is the global one
    pub middleware: Option<MiddlewareFile>,
    /// Route files directly inside this directory
    pub files: Vec<RouteFile>,
}

impl RouteDirectory {
    pub fn new(
        name: impl Into<String>,
        route: impl Into<String>,
        middleware: Option<MiddlewareFile>,
        files: Vec<RouteFile>,
    ) -> Self {
        Self { name: name.into(), route: route.into(), middleware, files }
    }

    pub fn with_middleware(&self, middleware: Option<MiddlewareFile>) -> Self {
        Self { middleware, ..self.clone() }
    }

    pub fn with_files(&self, files: Vec<RouteFile>) -> Self {
        Self { files, ..self.clone() }
    }

    /// Whether this directory sits at `route` or below it
    pub fn is_within(&self, route: &str) -> bool {
        let base = route.trim_end_matches('/');
        base.is_empty()
            || self.route == base
            || self.route.strip_prefix(base).is_some_and(|rest| rest.starts_with('/'))
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "name": self.name,
            "path": self.route,
            "middleware": self.middleware.as_ref().map(MiddlewareFile::to_json),
            "files": self.files.iter().map(RouteFile::to_json).collect::<Vec<_>>(),
        })
    }
}

/// Everything a generator needs to emit a routing table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteConfiguration {
    pub global_middleware: Option<MiddlewareFile>,
    /// Nested middleware in traversal order, excluding the global one
    pub middleware: Vec<MiddlewareFile>,
    /// Directory records, parents before their descendants
    pub directories: Vec<RouteDirectory>,
    pub routes: Vec<RouteFile>,
}

impl RouteConfiguration {
    /// Directories in the order nested routers are composed: leaves first,
    /// each directory after everything it mounts.
    pub fn generation_order(&self) -> impl Iterator<Item = &RouteDirectory> {
        self.directories.iter().rev()
    }

    /// Full route path to the files serving it.
    pub fn endpoints(&self) -> BTreeMap<String, Vec<&RouteFile>> {
        let mut endpoints: BTreeMap<String, Vec<&RouteFile>> = BTreeMap::new();
        for dir in &self.directories {
            for file in &dir.files {
                endpoints.entry(join_route(&dir.route, &file.route)).or_default().push(file);
            }
        }
        endpoints
    }

    /// Middleware applied to routes in `directory`, outermost first.
    pub fn middleware_chain(&self, directory: &RouteDirectory) -> Vec<&MiddlewareFile> {
        let mut chain: Vec<&MiddlewareFile> = self.global_middleware.iter().collect();
        let mut ancestors: Vec<&RouteDirectory> =
            self.directories.iter().filter(|d| directory.is_within(&d.route)).collect();
        ancestors.sort_by_key(|d| d.route.matches('/').count() - usize::from(d.route == "/"));
        chain.extend(ancestors.into_iter().filter_map(|d| d.middleware.as_ref()));
        chain
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "globalMiddleware": self.global_middleware.as_ref().map(MiddlewareFile::to_json),
            "middleware": self.middleware.iter().map(MiddlewareFile::to_json).collect::<Vec<_>>(),
            "directories": self.directories.iter().map(RouteDirectory::to_json).collect::<Vec<_>>(),
            "routes": self.routes.iter().map(RouteFile::to_json).collect::<Vec<_>>(),
        })
    }
}

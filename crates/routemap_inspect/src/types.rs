use routemap_core::RouteConfiguration;

/// A route served by more than one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteConflict {
    /// Full route path, e.g. `/users`
    pub route: String,
    /// Import paths of the files serving it, in traversal order
    pub files: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct ScanResult {
    pub configuration: RouteConfiguration,
    pub conflicts: Vec<RouteConflict>,
}

impl ScanResult {
    pub fn directory_count(&self) -> usize {
        self.configuration.directories.len()
    }

    pub fn route_count(&self) -> usize {
        self.configuration.routes.len()
    }

    pub fn middleware_count(&self) -> usize {
        self.configuration.middleware.len()
            + usize::from(self.configuration.global_middleware.is_some())
    }
}

use log::trace;

use crate::types::{MiddlewareFile, RouteConfiguration, RouteDirectory, RouteFile};

/// Receives route and nested middleware files as the walker discovers them.
pub trait RouteVisitor {
    fn on_route(&mut self, route: &RouteFile);
    fn on_middleware(&mut self, middleware: &MiddlewareFile);
}

/// Collects walker events into a [`RouteConfiguration`] in emission order.
#[derive(Debug, Default)]
pub struct ModelAssembler {
    routes: Vec<RouteFile>,
    middleware: Vec<MiddlewareFile>,
}

impl ModelAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finish(
        self,
        global_middleware: Option<MiddlewareFile>,
        directories: Vec<RouteDirectory>,
    ) -> RouteConfiguration {
        trace!(
            "Assembling configuration: {} directories, {} routes, {} nested middleware",
            directories.len(),
            self.routes.len(),
            self.middleware.len()
        );
        RouteConfiguration {
            global_middleware,
            middleware: self.middleware,
            directories,
            routes: self.routes,
        }
    }
}

impl RouteVisitor for ModelAssembler {
    fn on_route(&mut self, route: &RouteFile) {
        self.routes.push(route.clone());
    }

    fn on_middleware(&mut self, middleware: &MiddlewareFile) {
        self.middleware.push(middleware.clone());
    }
}

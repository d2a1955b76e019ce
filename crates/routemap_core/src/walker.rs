use ignore::WalkBuilder;
use log::{debug, info, trace};
use std::{
    io,
    path::{Path, PathBuf},
};

use crate::{
    alias::AliasCounter,
    assembler::{ModelAssembler, RouteVisitor},
    config::ScanConfig,
    error::{Result, RouteScanError},
    paths::{file_route, import_path, mount_path, relative_route},
    types::{MiddlewareFile, RouteConfiguration, RouteDirectory, RouteFile},
};

/// Scans `<root>/<routes_dir>` and builds the route configuration.
///
/// Directory records come back parents first; generators compose nested
/// routers by walking them in reverse.
pub fn build_route_configuration(cfg: &ScanConfig) -> Result<RouteConfiguration> {
    let mut assembler = ModelAssembler::new();
    let (global_middleware, directories) = walk_routes(cfg, &mut assembler)?;
    let configuration = assembler.finish(global_middleware, directories);
    info!(
        "Built route configuration: {} directories, {} routes, {} middleware",
        configuration.directories.len(),
        configuration.routes.len(),
        configuration.middleware.len() + usize::from(configuration.global_middleware.is_some())
    );
    Ok(configuration)
}

/// Walks the routes tree, reporting route files and nested middleware to
/// `visitor` in traversal order.
///
/// Returns the global middleware, if any, and the directory records.
pub fn walk_routes<V: RouteVisitor>(
    cfg: &ScanConfig,
    visitor: &mut V,
) -> Result<(Option<MiddlewareFile>, Vec<RouteDirectory>)> {
    let routes_root = cfg.routes_root();
    debug!("Walking routes from: {}", routes_root.display());
    if !routes_root.is_dir() {
        return Err(RouteScanError::RoutesDirectoryNotFound { path: routes_root });
    }

    let walker = TreeWalker { cfg, generation_root: cfg.generation_root(), routes_root };
    let mut aliases = AliasCounter::new();

    // The root middleware goes through the same listing as every nested one
    let listing = walker.list(&walker.routes_root)?;
    let global_middleware = listing.files.iter().find(|p| walker.is_middleware(p)).map(|path| {
        let middleware = walker.middleware_file(&mut aliases, path);
        debug!("Found global middleware: {}", middleware.path);
        middleware
    });

    let mut ancestors = vec![canonical(&walker.routes_root)?];
    let directories =
        walker.visit(&walker.routes_root, listing, 0, &mut ancestors, &mut aliases, visitor)?;
    Ok((global_middleware, directories))
}

fn canonical(dir: &Path) -> Result<PathBuf> {
    dir.canonicalize().map_err(|err| RouteScanError::FilesystemAccess {
        path: dir.to_path_buf(),
        source: ignore::Error::Io(err),
    })
}

/// A symlink whose target no longer exists.
fn dangling_link(err: &ignore::Error) -> Option<&Path> {
    match err {
        ignore::Error::WithDepth { err, .. } => dangling_link(err),
        ignore::Error::WithPath { path, err }
            if err.io_error().is_some_and(|e| e.kind() == io::ErrorKind::NotFound)
                && path.symlink_metadata().is_ok_and(|m| m.file_type().is_symlink()) =>
        {
            Some(path)
        }
        _ => None,
    }
}

struct TreeWalker<'a> {
    cfg: &'a ScanConfig,
    routes_root: PathBuf,
    generation_root: PathBuf,
}

#[derive(Debug, Default)]
struct Listing {
    files: Vec<PathBuf>,
    directories: Vec<PathBuf>,
}

impl TreeWalker<'_> {
    /// `ancestors` holds the canonical paths of `dir` and every directory above it.
    fn visit<V: RouteVisitor>(
        &self,
        dir: &Path,
        listing: Listing,
        depth: usize,
        ancestors: &mut Vec<PathBuf>,
        aliases: &mut AliasCounter,
        visitor: &mut V,
    ) -> Result<Vec<RouteDirectory>> {
        let dir_route = mount_path(&self.routes_root, dir);
        trace!(
            "Visiting {} at depth {} ({} files, {} subdirectories)",
            dir_route,
            depth,
            listing.files.len(),
            listing.directories.len()
        );

        let mut files = Vec::new();
        let mut middleware_path = None;
        for path in &listing.files {
            if self.is_middleware(path) {
                middleware_path = Some(path);
            } else if self.is_route(path) {
                let file = self.route_file(aliases, path, &dir_route);
                trace!("Found route {} -> {}", file.path, file.route);
                visitor.on_route(&file);
                files.push(file);
            } else {
                trace!("Ignoring file: {}", path.display());
            }
        }

        // The root's middleware is the global one and was registered up front
        let middleware = match middleware_path {
            Some(path) if depth > 0 => {
                let middleware = self.middleware_file(aliases, path);
                debug!("Found nested middleware for {}: {}", dir_route, middleware.path);
                visitor.on_middleware(&middleware);
                Some(middleware)
            }
            _ => None,
        };

        let mut directories =
            vec![RouteDirectory::new(aliases.next_directory(), dir_route, middleware, files)];
        for child in &listing.directories {
            let target = canonical(child)?;
            if let Some(ancestor) = ancestors.iter().find(|a| **a == target) {
                return Err(RouteScanError::FilesystemAccess {
                    path: child.clone(),
                    source: ignore::Error::Loop { ancestor: ancestor.clone(), child: child.clone() },
                });
            }

            let child_listing = self.list(child)?;
            ancestors.push(target);
            let result = self.visit(child, child_listing, depth + 1, ancestors, aliases, visitor);
            ancestors.pop();
            directories.extend(result?);
        }
        Ok(directories)
    }

    fn list(&self, dir: &Path) -> Result<Listing> {
        let walker = WalkBuilder::new(dir)
            .standard_filters(false)
            .git_ignore(self.cfg.respect_gitignore)
            .parents(self.cfg.respect_gitignore)
            .follow_links(true)
            .max_depth(Some(1))
            .sort_by_file_name(|a, b| a.cmp(b))
            .build();

        let mut listing = Listing::default();
        for res in walker {
            let dent = match res {
                Ok(dent) => dent,
                Err(err) => {
                    if let Some(link) = dangling_link(&err) {
                        debug!("Skipping dangling symlink: {}", link.display());
                        continue;
                    }
                    return Err(RouteScanError::FilesystemAccess {
                        path: dir.to_path_buf(),
                        source: err,
                    });
                }
            };
            if dent.depth() == 0 {
                continue;
            }
            match dent.file_type() {
                Some(ft) if ft.is_dir() => listing.directories.push(dent.into_path()),
                Some(ft) if ft.is_file() => listing.files.push(dent.into_path()),
                _ => debug!("Skipping non-regular entry: {}", dent.path().display()),
            }
        }
        Ok(listing)
    }

    fn is_middleware(&self, path: &Path) -> bool {
        path.file_name().and_then(|n| n.to_str()) == Some(self.cfg.middleware_file_name().as_str())
    }

    fn is_route(&self, path: &Path) -> bool {
        path.extension().and_then(|e| e.to_str()) == Some(self.cfg.route_extension.as_str())
            && path.file_stem().and_then(|s| s.to_str()) != Some(self.cfg.middleware_name.as_str())
    }

    fn route_file(&self, aliases: &mut AliasCounter, path: &Path, dir_route: &str) -> RouteFile {
        let full_route = file_route(&mount_path(&self.routes_root, path), &self.cfg.route_extension);
        RouteFile::new(
            aliases.next_route(),
            import_path(&self.generation_root, path),
            relative_route(&full_route, dir_route),
        )
    }

    fn middleware_file(&self, aliases: &mut AliasCounter, path: &Path) -> MiddlewareFile {
        MiddlewareFile::new(aliases.next_middleware(), import_path(&self.generation_root, path))
    }
}

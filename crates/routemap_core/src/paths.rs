//! Conversions from filesystem locations to mount paths, route strings and
//! import paths.
//!
//! All route-shaped strings produced here use `/` separators and start with
//! `/`, independent of the host's path separator.

use log::trace;
use std::path::{Component, Path, PathBuf};

use crate::constants::INDEX_FILE_STEM;

/// Mount path of `path` relative to the routes root.
///
/// The routes root itself mounts at `/`; `routes/users/admin` mounts at
/// `/users/admin`. Paths outside the routes root fall back to their full
/// component list.
pub fn mount_path(routes_root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(routes_root).unwrap_or(path);
    let segments: Vec<String> = rel
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().to_string()),
            _ => None,
        })
        .collect();
    format!("/{}", segments.join("/"))
}

/// Full route served by a file, given its mount path.
///
/// The extension is dropped and a trailing `index` segment maps to the
/// enclosing directory: `/users/index.dart` -> `/users`, `/index.dart` -> `/`.
pub fn file_route(file_mount_path: &str, extension: &str) -> String {
    let suffix = format!(".{}", extension);
    let without_ext = file_mount_path.strip_suffix(suffix.as_str()).unwrap_or(file_mount_path);

    let route = match without_ext.strip_suffix(INDEX_FILE_STEM) {
        Some(rest) if rest.ends_with('/') => rest,
        _ => without_ext,
    };
    with_leading_slash(route.trim_end_matches('/'))
}

/// Route of a file relative to its directory's mount path.
///
/// An empty remainder means the directory index and becomes `/`.
pub fn relative_route(file_route: &str, directory_mount_path: &str) -> String {
    let base = directory_mount_path.trim_end_matches('/');
    let rest = match file_route.strip_prefix(base) {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
        _ => file_route,
    };
    with_leading_slash(rest)
}

/// Joins a directory mount path and a route relative to it.
pub fn join_route(directory_mount_path: &str, route: &str) -> String {
    let base = directory_mount_path.trim_end_matches('/');
    let rest = route.trim_start_matches('/');
    match (base.is_empty(), rest.is_empty()) {
        (true, true) => "/".to_string(),
        (true, false) => format!("/{}", rest),
        (false, true) => base.to_string(),
        (false, false) => format!("{}/{}", base, rest),
    }
}

/// Import path of `file` as seen from the generation directory.
///
/// Always uses forward slashes. With the generation directory one level
/// below the project root this yields `../routes/...`.
pub fn import_path(generation_root: &Path, file: &Path) -> String {
    let rel = match make_relative(file, generation_root) {
        Some(rel) => rel,
        None => {
            trace!("No relative path from {:?} to {:?}", generation_root, file);
            file.to_path_buf()
        }
    };
    let segments: Vec<String> = rel
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().to_string()),
            Component::ParentDir => Some("..".to_string()),
            _ => None,
        })
        .collect();
    segments.join("/")
}

/// Rewrites bracketed dynamic segments for display: `/users/[id]` -> `/users/<id>`
pub fn to_path_pattern(route: &str) -> String {
    route
        .split('/')
        .map(|segment| match segment.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
            Some(name) => format!("<{}>", name),
            None => segment.to_string(),
        })
        .collect::<Vec<_>>()
        .join("/")
}

fn with_leading_slash(route: &str) -> String {
    if route.starts_with('/') { route.to_string() } else { format!("/{}", route) }
}

/// Create a relative path from `base` to `target`
fn make_relative(target: &Path, base: &Path) -> Option<PathBuf> {
    let target_components: Vec<Component> =
        target.components().filter(|c| *c != Component::CurDir).collect();
    let base_components: Vec<Component> =
        base.components().filter(|c| *c != Component::CurDir).collect();

    // Relative paths share an implicit anchor; absolute ones must agree on root and prefix
    if anchor(&target_components) != anchor(&base_components) {
        return None;
    }

    let common = target_components
        .iter()
        .zip(base_components.iter())
        .take_while(|(t, b)| t == b)
        .count();

    let mut result = PathBuf::new();
    for _ in common..base_components.len() {
        result.push("..");
    }
    for component in &target_components[common..] {
        match component {
            Component::Normal(p) => result.push(p),
            Component::ParentDir => result.push(".."),
            Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
        }
    }

    if result.as_os_str().is_empty() { Some(PathBuf::from(".")) } else { Some(result) }
}

fn anchor<'a>(components: &'a [Component<'a>]) -> &'a [Component<'a>] {
    let len = components
        .iter()
        .take_while(|c| matches!(c, Component::Prefix(_) | Component::RootDir))
        .count();
    &components[..len]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mount_path_root() {
        let root = Path::new("/app/routes");
        assert_eq!(mount_path(root, root), "/");
    }

    #[test]
    fn test_mount_path_nested() {
        let root = Path::new("/app/routes");
        assert_eq!(mount_path(root, &root.join("users").join("admin")), "/users/admin");
        assert_eq!(mount_path(root, &root.join("users").join("[id].dart")), "/users/[id].dart");
    }

    #[test]
    fn test_file_route_index() {
        assert_eq!(file_route("/index.dart", "dart"), "/");
        assert_eq!(file_route("/users/index.dart", "dart"), "/users");
    }

    #[test]
    fn test_file_route_keeps_non_index_names() {
        assert_eq!(file_route("/about.dart", "dart"), "/about");
        assert_eq!(file_route("/users/[id].dart", "dart"), "/users/[id]");
        // Only a whole trailing segment named index is dropped
        assert_eq!(file_route("/reindex.dart", "dart"), "/reindex");
        assert_eq!(file_route("/index/list.dart", "dart"), "/index/list");
    }

    #[test]
    fn test_relative_route() {
        assert_eq!(relative_route("/", "/"), "/");
        assert_eq!(relative_route("/about", "/"), "/about");
        assert_eq!(relative_route("/users", "/users"), "/");
        assert_eq!(relative_route("/users/[id]", "/users"), "/[id]");
        assert_eq!(relative_route("/users/[id]/posts", "/users/[id]"), "/posts");
    }

    #[test]
    fn test_relative_route_respects_segment_boundaries() {
        assert_eq!(relative_route("/usersettings", "/users"), "/usersettings");
    }

    #[test]
    fn test_join_route() {
        assert_eq!(join_route("/", "/"), "/");
        assert_eq!(join_route("/", "/about"), "/about");
        assert_eq!(join_route("/users", "/"), "/users");
        assert_eq!(join_route("/users", "/[id]"), "/users/[id]");
    }

    #[test]
    fn test_import_path_escapes_generation_dir() {
        let generation = Path::new("/app/.dart_frog");
        let file = Path::new("/app/routes/users/[id].dart");
        assert_eq!(import_path(generation, file), "../routes/users/[id].dart");
    }

    #[test]
    fn test_import_path_deeper_generation_dir() {
        let generation = Path::new("/app/build/gen");
        let file = Path::new("/app/routes/index.dart");
        assert_eq!(import_path(generation, file), "../../routes/index.dart");
    }

    #[test]
    fn test_import_path_relative_roots() {
        let generation = Path::new(".dart_frog");
        assert_eq!(import_path(generation, Path::new("routes/index.dart")), "../routes/index.dart");
        assert_eq!(
            import_path(Path::new("./.dart_frog"), Path::new("./routes/users/[id].dart")),
            "../routes/users/[id].dart"
        );
        assert_eq!(
            import_path(Path::new("app/.dart_frog"), Path::new("app/routes/index.dart")),
            "../routes/index.dart"
        );
    }

    #[test]
    fn test_make_relative_mixed_anchors() {
        assert_eq!(make_relative(Path::new("/app/routes/a.dart"), Path::new(".dart_frog")), None);
        assert_eq!(
            make_relative(Path::new("routes/a.dart"), Path::new(".dart_frog")),
            Some(PathBuf::from("../routes/a.dart"))
        );
    }

    #[test]
    fn test_to_path_pattern() {
        assert_eq!(to_path_pattern("/users/[id]"), "/users/<id>");
        assert_eq!(to_path_pattern("/"), "/");
        assert_eq!(to_path_pattern("/a/[b]/c/[d]"), "/a/<b>/c/<d>");
    }

    #[test]
    fn test_make_relative_same_path() {
        let p = Path::new("/project/src");
        assert_eq!(make_relative(p, p), Some(PathBuf::from(".")));
    }

    #[test]
    fn test_make_relative_sibling_dir() {
        let target = Path::new("/project/apps/web/index.ts");
        let base = Path::new("/project/apps/api");
        assert_eq!(make_relative(target, base), Some(PathBuf::from("../web/index.ts")));
    }
}

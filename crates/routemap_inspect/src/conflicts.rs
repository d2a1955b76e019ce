use log::{debug, warn};
use routemap_core::RouteConfiguration;

use crate::types::RouteConflict;

/// Routes that more than one file resolves to.
///
/// `routes/users.dart` and `routes/users/index.dart` both serve `/users`.
/// Conflicts are only reported; the configuration is left untouched.
pub fn find_conflicts(configuration: &RouteConfiguration) -> Vec<RouteConflict> {
    let conflicts: Vec<RouteConflict> = configuration
        .endpoints()
        .into_iter()
        .filter(|(_, files)| files.len() > 1)
        .map(|(route, files)| {
            warn!("Route {} is served by {} files", route, files.len());
            RouteConflict { route, files: files.iter().map(|f| f.path.clone()).collect() }
        })
        .collect();
    debug!("Found {} route conflicts", conflicts.len());
    conflicts
}

#[cfg(test)]
mod tests {
    use super::*;
    use routemap_core::{RouteDirectory, RouteFile};

    #[test]
    fn test_no_conflicts() {
        let cfg = RouteConfiguration {
            directories: vec![RouteDirectory::new(
                "d0",
                "/",
                None,
                vec![
                    RouteFile::new("r0", "../routes/index.dart", "/"),
                    RouteFile::new("r1", "../routes/about.dart", "/about"),
                ],
            )],
            ..Default::default()
        };
        assert!(find_conflicts(&cfg).is_empty());
    }

    #[test]
    fn test_file_and_directory_index_conflict() {
        let users = RouteFile::new("r0", "../routes/users.dart", "/users");
        let users_index = RouteFile::new("r1", "../routes/users/index.dart", "/");
        let cfg = RouteConfiguration {
            directories: vec![
                RouteDirectory::new("d0", "/", None, vec![users.clone()]),
                RouteDirectory::new("d1", "/users", None, vec![users_index.clone()]),
            ],
            routes: vec![users, users_index],
            ..Default::default()
        };

        let conflicts = find_conflicts(&cfg);
        assert_eq!(
            conflicts,
            vec![RouteConflict {
                route: "/users".to_string(),
                files: vec![
                    "../routes/users.dart".to_string(),
                    "../routes/users/index.dart".to_string()
                ],
            }]
        );
        // Reporting never removes routes
        assert_eq!(cfg.routes.len(), 2);
    }
}

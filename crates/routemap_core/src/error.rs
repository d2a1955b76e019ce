use std::path::PathBuf;

/// Errors that abort a route scan. No partial configuration is produced.
#[derive(Debug, thiserror::Error)]
pub enum RouteScanError {
    #[error("Could not find routes directory: {}", path.display())]
    RoutesDirectoryNotFound { path: PathBuf },
    #[error("Failed to read {}: {source}", path.display())]
    FilesystemAccess {
        path: PathBuf,
        #[source]
        source: ignore::Error,
    },
}

pub type Result<T> = std::result::Result<T, RouteScanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_the_path() {
        let err = RouteScanError::RoutesDirectoryNotFound { path: PathBuf::from("/app/routes") };
        assert_eq!(err.to_string(), "Could not find routes directory: /app/routes");
    }

    #[test]
    fn test_filesystem_access_keeps_source() {
        use std::error::Error;

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = RouteScanError::FilesystemAccess {
            path: PathBuf::from("/app/routes/admin"),
            source: ignore::Error::Io(io),
        };
        assert!(err.to_string().starts_with("Failed to read /app/routes/admin"));
        assert!(err.source().is_some());
    }
}

//! Test utilities for guacgen
//!
//! Shared testing utilities used across the guacgen workspace: a
//! workspace-local temporary directory helper and serialized
//! environment-variable mutation.

use tempfile::TempDir;

pub mod env;

pub use env::{with_env_vars, ENV_LOCK};

/// Creates a temporary directory within `.tmp/` at the project root
///
/// This keeps all test temporary files centralized in a single gitignored
/// location that is easy to clean up manually if needed.
///
/// # Returns
///
/// A `TempDir` instance that automatically cleans up on drop.
/// The directory is created at `.tmp/<random-name>` relative to the
/// current directory.
///
/// # Panics
///
/// Panics if the current directory cannot be determined or the temporary
/// directory cannot be created.
///
/// # Examples
///
/// ```rust
/// use guacgen_testkit::temp_dir_in_workspace;
///
/// let temp = temp_dir_in_workspace();
/// let file_path = temp.path().join("psql.mustache.sh");
/// std::fs::write(&file_path, "-d {{POSTGRESQL_DB_NAME}}").unwrap();
/// // Cleanup happens automatically when temp is dropped
/// ```
pub fn temp_dir_in_workspace() -> TempDir {
    let workspace_root = std::env::current_dir().expect("Failed to get current directory");

    let tmp_base = workspace_root.join(".tmp");

    // Ensure .tmp/ exists
    std::fs::create_dir_all(&tmp_base).expect("Failed to create .tmp directory");

    // Create unique subdirectory within .tmp/
    TempDir::new_in(&tmp_base).expect("Failed to create temporary directory in .tmp/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_dir_is_created_under_tmp() {
        let temp = temp_dir_in_workspace();
        assert!(temp.path().exists());
        assert!(temp.path().to_string_lossy().contains(".tmp"));
    }

    #[test]
    fn test_temp_dir_cleans_up_on_drop() {
        let path = {
            let temp = temp_dir_in_workspace();
            temp.path().to_path_buf()
        };
        assert!(!path.exists());
    }
}

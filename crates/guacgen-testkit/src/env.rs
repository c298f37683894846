//! Environment isolation utilities for testing
//!
//! Helpers for mutating process environment variables under a lock so that
//! parallel tests cannot observe each other's changes.

use std::sync::Mutex;

/// Static mutex to serialize tests that modify environment variables
pub static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Run a closure with a temporarily modified process environment
///
/// Each `(name, value)` pair is applied before the closure runs: `Some`
/// sets the variable, `None` removes it. The previous values are restored
/// afterwards. Not reentrant: calls must not nest, the lock is a plain
/// `Mutex`.
///
/// # Arguments
///
/// * `vars` - Variables to set (`Some`) or remove (`None`) for the duration
/// * `f` - Test closure to run with the modified environment
///
/// # Returns
///
/// The result returned by the test closure
///
/// # Examples
///
/// ```rust
/// use guacgen_testkit::with_env_vars;
///
/// let value = with_env_vars(
///     &[("LDAP_PORT", Some("636")), ("POSTGRESQL_DB_NAME", None)],
///     || std::env::var("LDAP_PORT").unwrap(),
/// );
/// assert_eq!(value, "636");
/// ```
pub fn with_env_vars<F, R>(vars: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| {
        // Recover from poisoned mutex
        // Safe because:
        // - Environment variables remain valid after panic
        // - We're just serializing access, not protecting data
        poisoned.into_inner()
    });

    // Save original values for restoration
    let originals: Vec<(String, Option<String>)> = vars
        .iter()
        .map(|(name, _)| ((*name).to_string(), std::env::var(name).ok()))
        .collect();

    // SAFETY: We hold ENV_LOCK, ensuring no other test is modifying env vars
    // concurrently. Environment variable modification is inherently unsafe in
    // multi-threaded contexts, but the mutex guarantees exclusive access.
    unsafe {
        for (name, value) in vars {
            match value {
                Some(v) => std::env::set_var(name, v),
                None => std::env::remove_var(name),
            }
        }
    }

    let result = f();

    // Restore environment (important for test isolation)
    // SAFETY: We still hold ENV_LOCK, ensuring exclusive access to env vars.
    unsafe {
        for (name, original) in originals {
            match original {
                Some(v) => std::env::set_var(&name, v),
                None => std::env::remove_var(&name),
            }
        }
    }

    result
}

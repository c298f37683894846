//! Shared test helpers for template engine tests

use crate::template::engine::VarMap;

/// Create a variable map with a few environment-style entries
pub(super) fn simple_vars() -> VarMap {
    let mut vars = VarMap::new();
    vars.set("DB_NAME", "guacamole");
    vars.set("DB_PORT", "5432");
    vars.set("DB_HOST", "db.example.com");
    vars.set("EMPTY", "");
    vars
}

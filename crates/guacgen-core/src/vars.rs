//! Variable declarations and environment resolution
//!
//! Every builtin artifact declares the variables it consumes as a [`VarSpec`]
//! list: a canonical environment-variable name, optional legacy aliases, and
//! an optional default. Resolution happens once, while building the
//! [`VarMap`](crate::template::VarMap) — never inside the template.
//!
//! The process environment is captured into an [`EnvSnapshot`] at startup and
//! injected; nothing below this module touches `std::env` during rendering.

use std::collections::BTreeMap;

use crate::template::VarMap;

/// Immutable snapshot of environment variables, taken once per invocation.
///
/// Rendering code receives this snapshot instead of reading the process
/// environment, which keeps the pipeline pure and testable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    values: BTreeMap<String, String>,
}

impl EnvSnapshot {
    /// Create an empty snapshot
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture the current process environment
    pub fn from_process() -> Self {
        std::env::vars().collect()
    }

    /// Look up a variable by exact name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// True when `name` is set to a non-empty value
    ///
    /// An empty-string value counts as unset, matching the default policy:
    /// `FOO=` behaves like `unset FOO`.
    pub fn is_set(&self, name: &str) -> bool {
        self.get(name).is_some_and(|v| !v.is_empty())
    }

    /// Convert the whole snapshot into a variable map, one entry per variable
    ///
    /// Used by the generic renderer, where every environment variable is fair
    /// game. Builtin artifacts use [`build_var_map`] instead, which only
    /// admits declared variables.
    pub fn to_var_map(&self) -> VarMap {
        self.values
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for EnvSnapshot {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut snapshot = EnvSnapshot::new();
        for (name, value) in iter {
            snapshot.values.insert(name.into(), value.into());
        }
        snapshot
    }
}

/// Declaration of one variable an artifact consumes
///
/// Resolution order: canonical name, then each alias in declaration order,
/// then the default. Set-but-empty counts as unset at every step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VarSpec {
    name: &'static str,
    aliases: &'static [&'static str],
    default: Option<&'static str>,
}

impl VarSpec {
    /// A variable with no default: unset renders as the empty string
    pub const fn required(name: &'static str) -> Self {
        Self {
            name,
            aliases: &[],
            default: None,
        }
    }

    /// A variable with a fallback applied when unset or empty
    pub const fn with_default(name: &'static str, default: &'static str) -> Self {
        Self {
            name,
            aliases: &[],
            default: Some(default),
        }
    }

    /// Attach legacy alias names, consulted after the canonical name
    pub const fn aliased(mut self, aliases: &'static [&'static str]) -> Self {
        self.aliases = aliases;
        self
    }

    /// Canonical environment-variable name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Legacy alias names, in lookup order
    pub fn aliases(&self) -> &'static [&'static str] {
        self.aliases
    }

    /// Declared default, if any
    pub fn default_value(&self) -> Option<&'static str> {
        self.default
    }

    /// True when `name` is the canonical name or one of the aliases
    pub fn declares(&self, name: &str) -> bool {
        self.name == name || self.aliases.contains(&name)
    }

    /// Resolve this variable against an environment snapshot
    ///
    /// Returns `None` only when the variable is unset everywhere and has no
    /// default; such variables stay unmapped and render empty.
    pub fn resolve<'a>(&self, env: &'a EnvSnapshot) -> Option<&'a str> {
        if env.is_set(self.name) {
            return env.get(self.name);
        }
        for alias in self.aliases {
            if env.is_set(alias) {
                return env.get(alias);
            }
        }
        self.default
    }
}

/// Build the variable map for a declared spec list
///
/// Each resolved value is published under the canonical name and every
/// alias, so templates written against either naming convention render the
/// same value. Undeclared environment variables never enter the map.
pub fn build_var_map(specs: &[VarSpec], env: &EnvSnapshot) -> VarMap {
    let mut vars = VarMap::new();
    for spec in specs {
        if let Some(value) = spec.resolve(env) {
            vars.set(spec.name(), value);
            for alias in spec.aliases() {
                vars.set(*alias, value);
            }
        }
    }
    vars
}

#[cfg(test)]
mod tests {
    use super::*;
    use guacgen_testkit::with_env_vars;

    fn env(pairs: &[(&str, &str)]) -> EnvSnapshot {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_resolve_uses_set_value_over_default() {
        let spec = VarSpec::with_default("POSTGRESQL_DB_NAME", "guacamole");
        let env = env(&[("POSTGRESQL_DB_NAME", "other")]);
        assert_eq!(spec.resolve(&env), Some("other"));
    }

    #[test]
    fn test_resolve_falls_back_to_default_when_unset() {
        let spec = VarSpec::with_default("POSTGRESQL_DB_NAME", "guacamole");
        assert_eq!(spec.resolve(&EnvSnapshot::new()), Some("guacamole"));
    }

    #[test]
    fn test_resolve_treats_empty_value_as_unset() {
        let spec = VarSpec::with_default("LDAP_PORT", "389");
        let env = env(&[("LDAP_PORT", "")]);
        assert_eq!(spec.resolve(&env), Some("389"));
    }

    #[test]
    fn test_resolve_without_default_is_none() {
        let spec = VarSpec::required("LDAP_HOST");
        assert_eq!(spec.resolve(&EnvSnapshot::new()), None);
    }

    #[test]
    fn test_resolve_canonical_beats_alias() {
        let spec =
            VarSpec::with_default("POSTGRESQL_DB_NAME", "guacamole").aliased(&["POSTGRES_DB_NAME"]);
        let env = env(&[
            ("POSTGRESQL_DB_NAME", "canonical"),
            ("POSTGRES_DB_NAME", "legacy"),
        ]);
        assert_eq!(spec.resolve(&env), Some("canonical"));
    }

    #[test]
    fn test_resolve_alias_beats_default() {
        let spec =
            VarSpec::with_default("POSTGRESQL_DB_NAME", "guacamole").aliased(&["POSTGRES_DB_NAME"]);
        let env = env(&[("POSTGRES_DB_NAME", "legacy")]);
        assert_eq!(spec.resolve(&env), Some("legacy"));
    }

    #[test]
    fn test_declares_covers_canonical_and_aliases() {
        let spec = VarSpec::required("POSTGRESQL_HOST").aliased(&["POSTGRES_HOST"]);
        assert!(spec.declares("POSTGRESQL_HOST"));
        assert!(spec.declares("POSTGRES_HOST"));
        assert!(!spec.declares("PG_HOST"));
    }

    #[test]
    fn test_build_var_map_publishes_aliases() {
        let specs = [
            VarSpec::with_default("POSTGRESQL_PORT", "5432").aliased(&["POSTGRES_PORT"]),
            VarSpec::required("LDAP_HOST"),
        ];
        let vars = build_var_map(&specs, &EnvSnapshot::new());
        assert_eq!(vars.get("POSTGRESQL_PORT"), Some("5432"));
        assert_eq!(vars.get("POSTGRES_PORT"), Some("5432"));
        // unresolved variables stay unmapped
        assert_eq!(vars.get("LDAP_HOST"), None);
    }

    #[test]
    fn test_build_var_map_iterates_in_name_order() {
        let specs = [
            VarSpec::with_default("LDAP_PORT", "389"),
            VarSpec::with_default("LDAP_GROUP_NAME_ATTR", "cn"),
        ];
        let vars = build_var_map(&specs, &EnvSnapshot::new());
        let entries: Vec<(&str, &str)> = vars.iter().collect();
        assert_eq!(
            entries,
            vec![("LDAP_GROUP_NAME_ATTR", "cn"), ("LDAP_PORT", "389")]
        );
    }

    #[test]
    fn test_build_var_map_skips_undeclared_environment() {
        let specs = [VarSpec::required("LDAP_HOST")];
        let env = env(&[("LDAP_HOST", "ldap.example.com"), ("SECRET", "hunter2")]);
        let vars = build_var_map(&specs, &env);
        assert_eq!(vars.get("LDAP_HOST"), Some("ldap.example.com"));
        assert_eq!(vars.get("SECRET"), None);
    }

    #[test]
    fn test_from_process_captures_current_environment() {
        with_env_vars(
            &[
                ("GUACGEN_TEST_FROM_PROCESS", Some("captured")),
                ("GUACGEN_TEST_ABSENT", None),
            ],
            || {
                let snapshot = EnvSnapshot::from_process();
                assert_eq!(snapshot.get("GUACGEN_TEST_FROM_PROCESS"), Some("captured"));
                assert_eq!(snapshot.get("GUACGEN_TEST_ABSENT"), None);
            },
        );
    }

    #[test]
    fn test_to_var_map_carries_everything() {
        let snapshot = env(&[("A", "1"), ("B", "")]);
        let vars = snapshot.to_var_map();
        assert_eq!(vars.get("A"), Some("1"));
        // full-snapshot maps keep empty values as-is; defaults are an
        // artifact-level concern
        assert_eq!(vars.get("B"), Some(""));
    }
}

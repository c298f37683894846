//! Builtin artifact catalog
//!
//! One artifact per configuration file the suite can produce. Each entry
//! bundles an embedded template and the curated [`VarSpec`] list of the
//! variables that template may consume. Only declared variables ever reach
//! the renderer, so the rest of the process environment cannot leak into an
//! artifact.
//!
//! Canonical naming: `POSTGRESQL_*` everywhere, with `POSTGRES_*` accepted
//! as a documented legacy alias. Resolved values are published under both
//! spellings, so templates written against either convention keep working.

use std::borrow::Cow;
use std::path::Path;

use crate::error::{GuacgenError, Result};
use crate::template::{self, TemplateError, VarMap};
use crate::vars::{build_var_map, EnvSnapshot, VarSpec};

const POSTGRESQL_DB_NAME: VarSpec =
    VarSpec::with_default("POSTGRESQL_DB_NAME", "guacamole").aliased(&["POSTGRES_DB_NAME"]);
const POSTGRESQL_HOST: VarSpec = VarSpec::required("POSTGRESQL_HOST").aliased(&["POSTGRES_HOST"]);
const POSTGRESQL_PASSWORD: VarSpec =
    VarSpec::required("POSTGRESQL_PASSWORD").aliased(&["POSTGRES_PASSWORD"]);
const POSTGRESQL_PORT: VarSpec =
    VarSpec::with_default("POSTGRESQL_PORT", "5432").aliased(&["POSTGRES_PORT"]);
const POSTGRESQL_USERNAME: VarSpec =
    VarSpec::required("POSTGRESQL_USERNAME").aliased(&["POSTGRES_USERNAME"]);

/// A renderable configuration artifact with its embedded template
#[derive(Debug, Clone, Copy)]
pub struct Artifact {
    name: &'static str,
    template_file: &'static str,
    template_text: &'static str,
    specs: &'static [VarSpec],
}

/// Every builtin artifact, one per configuration file
pub const ARTIFACTS: &[Artifact] = &[
    Artifact {
        name: "init-db",
        template_file: "init_db.mustache.sh",
        template_text: include_str!("../templates/init_db.mustache.sh"),
        specs: &[VarSpec::with_default(
            "SYSTEM_ADMINISTRATOR_GROUP_NAME",
            "System Administrators",
        )],
    },
    Artifact {
        name: "pg-ldap-sync",
        template_file: "pg_ldap_sync.mustache.yaml",
        template_text: include_str!("../templates/pg_ldap_sync.mustache.yaml"),
        specs: &[
            VarSpec::required("LDAP_BIND_DN"),
            VarSpec::required("LDAP_BIND_PASSWORD"),
            VarSpec::required("LDAP_GROUP_BASE_DN"),
            VarSpec::required("LDAP_GROUP_FILTER"),
            VarSpec::with_default("LDAP_GROUP_NAME_ATTR", "cn"),
            VarSpec::required("LDAP_HOST"),
            VarSpec::with_default("LDAP_PORT", "389"),
            VarSpec::required("LDAP_USER_BASE_DN"),
            VarSpec::required("LDAP_USER_FILTER"),
            VarSpec::with_default("LDAP_USER_NAME_ATTR", "userPrincipalName"),
            POSTGRESQL_DB_NAME,
            POSTGRESQL_HOST,
            POSTGRESQL_PASSWORD,
            POSTGRESQL_PORT,
            POSTGRESQL_USERNAME,
        ],
    },
    Artifact {
        name: "psql",
        template_file: "psql.mustache.sh",
        template_text: include_str!("../templates/psql.mustache.sh"),
        specs: &[
            POSTGRESQL_DB_NAME,
            POSTGRESQL_HOST,
            POSTGRESQL_PASSWORD,
            POSTGRESQL_PORT,
            POSTGRESQL_USERNAME,
        ],
    },
    Artifact {
        name: "update-users",
        template_file: "update_users.mustache.sql",
        template_text: include_str!("../templates/update_users.mustache.sql"),
        specs: &[
            VarSpec::required("ADMINISTRATORS_GROUP_NAME"),
            VarSpec::required("LDAP_GROUP_BASE_DN"),
            VarSpec::required("LDAP_GROUP_FILTER"),
            POSTGRESQL_DB_NAME,
            POSTGRESQL_HOST,
            POSTGRESQL_PASSWORD,
            POSTGRESQL_USERNAME,
            VarSpec::required("USERS_GROUP_NAME"),
        ],
    },
];

/// Look up an artifact by name
///
/// # Errors
///
/// Returns [`GuacgenError::ArtifactNotFound`] for unknown names.
pub fn find(name: &str) -> Result<&'static Artifact> {
    ARTIFACTS
        .iter()
        .find(|a| a.name == name)
        .ok_or_else(|| GuacgenError::ArtifactNotFound(name.to_string()))
}

impl Artifact {
    /// Artifact name as used on the command line
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Template file name, used for override lookup in a template directory
    pub fn template_file(&self) -> &'static str {
        self.template_file
    }

    /// Declared variables, in the order they are documented
    pub fn specs(&self) -> &'static [VarSpec] {
        self.specs
    }

    /// True when `name` is declared by this artifact, canonically or by alias
    pub fn declares(&self, name: &str) -> bool {
        self.specs.iter().any(|spec| spec.declares(name))
    }

    /// Resolve the template text, honoring a template-directory override
    ///
    /// If `template_dir` contains a file named like the builtin template, it
    /// wins. A present-but-unreadable override is an error, never a silent
    /// fallback to the builtin.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::NotFound`] when the override file exists but
    /// cannot be read.
    pub fn template_text(
        &self,
        template_dir: Option<&Path>,
    ) -> std::result::Result<Cow<'static, str>, TemplateError> {
        if let Some(dir) = template_dir {
            let path = dir.join(self.template_file);
            if path.exists() {
                let text =
                    std::fs::read_to_string(&path).map_err(|source| TemplateError::NotFound {
                        path: path.clone(),
                        source,
                    })?;
                return Ok(Cow::Owned(text));
            }
        }
        Ok(Cow::Borrowed(self.template_text))
    }

    /// Build the variable map for this artifact from an environment snapshot
    pub fn variables(&self, env: &EnvSnapshot) -> VarMap {
        build_var_map(self.specs, env)
    }

    /// Render this artifact against an environment snapshot
    ///
    /// # Errors
    ///
    /// Returns [`GuacgenError::Template`] when the override template cannot
    /// be read or the template is malformed.
    pub fn render(&self, env: &EnvSnapshot, template_dir: Option<&Path>) -> Result<String> {
        let text = self.template_text(template_dir)?;
        let vars = self.variables(env);
        Ok(template::render(&text, &vars)?)
    }
}

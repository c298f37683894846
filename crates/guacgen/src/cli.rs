//! CLI command structure using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "guacgen")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Template override directory, consulted before the builtin templates
    #[arg(long, global = true, env = "GUACGEN_TEMPLATE_DIR", value_name = "PATH")]
    pub template_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the database initialization script
    InitDb,

    /// Render the pg-ldap-sync configuration
    PgLdapSync,

    /// Render the psql wrapper script
    Psql,

    /// Render the SQL that refreshes Guacamole users from PostgreSQL roles
    UpdateUsers,

    /// Render an arbitrary template file from the environment
    Render {
        /// Template file path
        template: PathBuf,

        /// Override a variable (NAME=VALUE); takes precedence over the
        /// environment
        #[arg(long = "set", value_name = "NAME=VALUE")]
        set: Vec<String>,
    },

    /// Document the variable mapping: names, aliases, defaults, set status
    Vars {
        /// Artifact to describe; all artifacts if omitted
        artifact: Option<String>,

        #[arg(long)]
        json: bool,
    },

    /// Preflight an artifact render without producing the artifact
    Check {
        /// Artifact to check; all artifacts if omitted
        artifact: Option<String>,

        #[arg(long)]
        json: bool,
    },
}

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    let template_dir = cli.template_dir.as_deref();

    let result = match cli.command {
        Commands::InitDb => commands::artifact::run("init-db", template_dir, cli.verbose),
        Commands::PgLdapSync => commands::artifact::run("pg-ldap-sync", template_dir, cli.verbose),
        Commands::Psql => commands::artifact::run("psql", template_dir, cli.verbose),
        Commands::UpdateUsers => commands::artifact::run("update-users", template_dir, cli.verbose),
        Commands::Render { template, set } => commands::render::run(&template, &set, cli.verbose),
        Commands::Vars { artifact, json } => commands::vars::run(artifact.as_deref(), json),
        Commands::Check { artifact, json } => {
            commands::check::run(artifact.as_deref(), json, template_dir, cli.verbose)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

//! orc - list repositories in a GitHub organization and clone the
//! selected repository.

mod app;
mod commands;
mod prompt;

use anyhow::Result;
use app::App;
use clap::Parser;
use orc_core::storage::{self, ConfigFile};
use orc_core::ConfigService;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "orc")]
#[command(version)]
#[command(
    about = "List repositories in a GitHub organization and clone the selected repository",
    long_about = None
)]
struct Args {
    /// Add an organization
    #[arg(short, long)]
    add: Option<String>,

    /// Pick an organization to list repositories from
    #[arg(short, long)]
    list: bool,

    /// Set the default organization
    #[arg(short, long)]
    set: bool,

    /// Remove an organization
    #[arg(short, long)]
    remove: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();

    let service = ConfigService::new(ConfigFile::new(storage::default_config_path()));
    tracing::debug!(path = %service.config_file().display(), "using config file");

    let app = App::bootstrap(service)?;

    if args.list {
        return commands::browse_organization(&app);
    }

    if let Some(org) = args.add {
        return commands::add_organization(&app, &org);
    }

    if args.set {
        return commands::set_default_organization(&app);
    }

    if args.remove {
        return commands::delete_organization(&app);
    }

    commands::list_repositories(&app, &app.config.default_organization)
}

//! Command flows for the orc CLI

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;

use crate::app::App;
use crate::prompt;

/// Pick an organization from the configured list and browse its
/// repositories.
pub fn browse_organization(app: &App) -> Result<()> {
    let index = prompt::select("Select an organization:", &app.config.organizations)?;
    let org = app.config.organizations[index].clone();

    list_repositories(app, &org)
}

pub fn add_organization(app: &App, org: &str) -> Result<()> {
    let already = app.service.add_organization(org)?;

    if already {
        println!(
            "Organization {} is already in the list, operation ignored",
            org
        );
    } else {
        println!("{}", format!("Organization {} successfully added", org).green());
    }

    Ok(())
}

pub fn set_default_organization(app: &App) -> Result<()> {
    println!(
        "Current default organization: {}",
        app.config.default_organization.bold()
    );

    let index = prompt::select(
        "Select the default organization:",
        &app.config.organizations,
    )?;
    let org = &app.config.organizations[index];

    app.service.update_default_organization(org)?;
    println!("{}", format!("Default organization set to {}", org).green());

    Ok(())
}

pub fn delete_organization(app: &App) -> Result<()> {
    let index = prompt::select(
        "Select an organization to delete:",
        &app.config.organizations,
    )?;
    let org = &app.config.organizations[index];

    app.service.delete_organization(org)?;
    println!("{}", format!("Organization {} deleted", org).green());

    Ok(())
}

/// Fetch the repositories of `org`, prompt for one and clone it into
/// the current directory.
pub fn list_repositories(app: &App, org: &str) -> Result<()> {
    println!("Fetching repositories from {}...", org.bold());

    let repos = app.github.repositories(org)?;

    if repos.is_empty() {
        println!("No repositories found in {}", org);
        return Ok(());
    }

    let names = repos.display_names();
    let index = prompt::select("Select a repository to clone:", &names)?;
    let repo = repos
        .find_by_display_name(&names[index])
        .context("selected repository is no longer in the list")?;

    println!("Cloning {}...", repo.name.bold());
    let target = repo.clone_into(Path::new("."))?;

    println!(
        "{}",
        format!("Repository cloned to {}", target.display()).green()
    );

    Ok(())
}

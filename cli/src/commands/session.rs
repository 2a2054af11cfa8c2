use anyhow::{Context, Result};
use api::{ApiError, BackendClient};
use authz::types::Identity;
use colored::*;
use serde_json::json;
use tracing::info;

use super::TabContext;

/// Sign in against the backend and remember the identity in this tab
pub async fn login(ctx: &TabContext, username: &str, password: &str) -> Result<()> {
    let client = BackendClient::new(ctx.config.client_config())?;
    let identity = client
        .login(username, password)
        .await
        .map_err(report_backend_error)?;

    remember(ctx, identity)
}

/// Create a guest account, then sign in as it
pub async fn signup(ctx: &TabContext, username: &str, password: &str, confirm: &str) -> Result<()> {
    let client = BackendClient::new(ctx.config.client_config())?;
    let identity = client
        .signup(username, password, confirm)
        .await
        .map_err(report_backend_error)?;

    remember(ctx, identity)
}

fn remember(ctx: &TabContext, identity: Identity) -> Result<()> {
    let mut shell = ctx.shell()?;
    let username = identity.username.clone();
    let role = identity.role;

    let landing = shell.login(identity).context("Failed to store session")?;
    info!("Signed in as {} in tab {}", username, ctx.tab);

    println!(
        "{} {} ({})",
        "Signed in as".green().bold(),
        username,
        role
    );
    println!("Navigated to: {}", landing);
    Ok(())
}

fn report_backend_error(err: ApiError) -> anyhow::Error {
    match &err {
        ApiError::MissingFields | ApiError::PasswordMismatch | ApiError::Rejected { .. } => {
            anyhow::anyhow!("{}", err)
        }
        _ => anyhow::Error::new(err).context("Unexpected error"),
    }
}

/// Sign out; safe to run when already signed out
pub fn logout(ctx: &TabContext) -> Result<()> {
    let mut shell = ctx.shell()?;
    let path = shell.logout().context("Failed to clear session")?;

    println!("{}", "Signed out".yellow().bold());
    println!("Navigated to: {}", path);
    Ok(())
}

/// Show the identity held by this tab
pub fn whoami(ctx: &TabContext, format: String) -> Result<()> {
    let shell = ctx.shell()?;
    let identity = shell.session().current_identity();

    match format.as_str() {
        "json" => {
            let value = json!({ "tab": ctx.tab, "identity": identity });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        _ => match identity {
            Some(identity) => {
                println!("{} {}", "User:".bold(), identity.username);
                println!("{} {}", "Id:".bold(), identity.id);
                println!("{} {}", "Role:".bold(), identity.role);
            }
            None => println!("{}", "Not signed in".yellow()),
        },
    }

    Ok(())
}

/// Discard everything the tab has stored
pub fn close_tab(ctx: &TabContext) -> Result<()> {
    let mut storage = ctx.storage()?;
    storage.clear().context("Failed to clear tab storage")?;

    println!("Closed tab '{}'", ctx.tab);
    Ok(())
}

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use voyage_app::{logging, AppConfig};

mod commands;

use commands::{browse, session, TabContext};

/// Voyage CLI - Command line front-end for the Voyage travel agency
#[derive(Parser)]
#[command(name = "voyage")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Browser tab to act in; each tab keeps its own session
    #[arg(short, long, global = true, env = "VOYAGE_TAB", default_value = "default")]
    tab: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in against the backend
    Login {
        #[arg(short, long)]
        username: String,

        #[arg(short, long)]
        password: String,
    },

    /// Create a guest account and sign in
    Signup {
        #[arg(short, long)]
        username: String,

        #[arg(short, long)]
        password: String,

        /// Repeat the password
        #[arg(short, long)]
        confirm: String,
    },

    /// Sign out of the current tab
    Logout,

    /// Show who is signed in
    Whoami {
        /// Output format (json, text)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Navigate to a page and show what renders
    Visit {
        /// Location, e.g. "/admin/dashboard"
        path: String,

        /// Output format (json, text)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Show the navigation bar for the current session
    Nav {
        /// Output format (json, text)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// List registered routes and their access classes
    Routes {
        /// Output format (json, text)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Close the tab, discarding its stored session
    CloseTab,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load()?;

    let _guard = logging::init_logging(&config, cli.verbose)
        .map_err(|e| anyhow!("Failed to initialize logging: {}", e))?;
    info!(
        "voyage {} starting in {} environment, tab {}",
        env!("CARGO_PKG_VERSION"),
        config.environment,
        cli.tab
    );

    let ctx = TabContext::new(config, cli.tab);

    match cli.command {
        Commands::Login { username, password } => {
            session::login(&ctx, &username, &password).await?;
        }
        Commands::Signup {
            username,
            password,
            confirm,
        } => {
            session::signup(&ctx, &username, &password, &confirm).await?;
        }
        Commands::Logout => {
            session::logout(&ctx)?;
        }
        Commands::Whoami { format } => {
            session::whoami(&ctx, format)?;
        }
        Commands::CloseTab => {
            session::close_tab(&ctx)?;
        }
        Commands::Visit { path, format } => {
            browse::visit(&ctx, &path, format)?;
        }
        Commands::Nav { format } => {
            browse::nav(&ctx, format)?;
        }
        Commands::Routes { format } => {
            browse::routes(&ctx, format)?;
        }
    }

    Ok(())
}

pub mod browse;
pub mod session;

use anyhow::{Context, Result};
use user::RedbStorage;
use voyage_app::{AppConfig, AppShell};

/// Configuration plus the tab a command acts in.
pub struct TabContext {
    pub config: AppConfig,
    pub tab: String,
}

impl TabContext {
    pub fn new(config: AppConfig, tab: String) -> Self {
        Self { config, tab }
    }

    /// Open the tab's storage area without starting a shell.
    pub fn storage(&self) -> Result<RedbStorage> {
        RedbStorage::open_tab(self.config.tabs_path(), &self.tab)
            .with_context(|| format!("Failed to open storage for tab '{}'", self.tab))
    }

    /// Start the application shell for this tab.
    pub fn shell(&self) -> Result<AppShell<RedbStorage>> {
        let storage = self.storage()?;
        AppShell::new(storage).context("Failed to start application shell")
    }
}

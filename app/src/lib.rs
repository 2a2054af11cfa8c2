//! Application shell for the Voyage travel-agency front-end.
//!
//! The shell owns the tab's [`Session`](user::Session), registers the route
//! table, and exposes navigation: every page request goes through the route
//! guard, and the navigation bar is derived from the session on demand.

pub mod config;
pub mod error;
pub mod logging;
pub mod navigation;
pub mod pages;
pub mod shell;

pub use config::AppConfig;
pub use error::{AppError, Result};
pub use navigation::{Affordance, NavBar, NavigationSurface};
pub use pages::{default_routes, landing_for, self_redirect, Page};
pub use shell::{AppShell, Navigation, MAX_REDIRECTS};

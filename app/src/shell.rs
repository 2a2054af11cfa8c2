//! The application shell: sole owner of the tab's session and route table.
//!
//! Every navigation runs the route guard again against the session as it is
//! at that moment; nothing about a previous decision is remembered.

use authz::types::{Decision, Identity, SIGN_IN_PATH};
use authz::{authorize, normalize_path, RouteTable};
use serde::Serialize;
use tracing::{debug, info};
use user::{Session, StorageArea};

use crate::error::{AppError, Result};
use crate::navigation::{Affordance, NavBar, NavigationSurface};
use crate::pages::{default_routes, landing_for, self_redirect, Page};

/// Redirects followed for one navigation before giving up.
pub const MAX_REDIRECTS: usize = 8;

/// Outcome of a navigation attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Navigation {
    /// Location originally asked for
    pub requested: String,
    /// Path of the page that renders
    pub path: String,
    pub page: Page,
    /// Paths redirected through, in order
    pub redirects: Vec<String>,
}

impl Navigation {
    pub fn was_redirected(&self) -> bool {
        !self.redirects.is_empty()
    }
}

pub struct AppShell<S> {
    session: Session<S>,
    routes: RouteTable<Page>,
}

impl<S: StorageArea> AppShell<S> {
    /// Start a tab over `storage` with the application's routes.
    pub fn new(storage: S) -> Result<Self> {
        let routes = default_routes()?;
        Ok(Self::with_routes(storage, routes))
    }

    pub fn with_routes(storage: S, routes: RouteTable<Page>) -> Self {
        let session = Session::initialize(storage);
        info!(
            "Shell started with {} routes, signed in: {}",
            routes.len(),
            session.is_authenticated()
        );
        Self { session, routes }
    }

    pub fn session(&self) -> &Session<S> {
        &self.session
    }

    pub fn routes(&self) -> &RouteTable<Page> {
        &self.routes
    }

    /// Resolve `location` to the page that actually renders.
    ///
    /// Unknown paths fall back to the sign-in page. Guard redirects and the
    /// auth pages' own redirect are followed until a page renders.
    pub fn navigate(&self, location: &str) -> Result<Navigation> {
        let identity = self.session.current_identity();
        let mut path = normalize_path(location);
        let mut redirects = Vec::new();

        loop {
            let next = match self.routes.resolve(&path) {
                None => {
                    debug!("No route for {}, falling back to {}", path, SIGN_IN_PATH);
                    SIGN_IN_PATH.to_string()
                }
                Some(route) => match authorize(identity, route.access) {
                    Decision::RedirectTo(target) => target,
                    Decision::Allow => match self_redirect(route.page, identity) {
                        Some(target) => target,
                        None => {
                            return Ok(Navigation {
                                requested: location.to_string(),
                                path,
                                page: route.page,
                                redirects,
                            });
                        }
                    },
                },
            };

            if redirects.len() >= MAX_REDIRECTS {
                return Err(AppError::RedirectLoop(location.to_string()));
            }

            path = normalize_path(&next);
            redirects.push(path.clone());
        }
    }

    /// Remember `identity` and return the page the user lands on.
    pub fn login(&mut self, identity: Identity) -> Result<String> {
        self.session.login(identity)?;
        Ok(landing_for(self.session.current_identity()))
    }

    /// Sign out and return the path navigated to.
    pub fn logout(&mut self) -> Result<String> {
        self.activate(Affordance::Logout)
    }

    /// The navigation bar for the current session.
    pub fn navigation(&self) -> NavBar {
        NavigationSurface::new(&self.routes).project(&self.session)
    }

    /// Carry out a navigation bar action and return the path it leads to.
    pub fn activate(&mut self, affordance: Affordance) -> Result<String> {
        NavigationSurface::new(&self.routes).activate(affordance, &mut self.session)
    }

    /// Close the shell and hand back the tab's storage area.
    pub fn into_storage(self) -> S {
        self.session.into_storage()
    }
}

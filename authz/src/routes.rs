//! Static route registration.
//!
//! Each path is tied to exactly one page and one [`AccessClass`] when the
//! table is built. Malformed registrations fail here, so guard evaluation
//! never has to deal with them.

use serde::Serialize;
use tracing::debug;

use crate::error::{AuthzError, Result};
use crate::types::AccessClass;

/// A registered route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route<P> {
    pub path: String,
    pub page: P,
    pub access: AccessClass,
}

/// Ordered table of routes, generic over the application's page type.
#[derive(Debug, Clone)]
pub struct RouteTable<P> {
    routes: Vec<Route<P>>,
}

impl<P: Clone> RouteTable<P> {
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Registers `page` under `path` with the given access class.
    pub fn register(&mut self, path: &str, page: P, access: AccessClass) -> Result<()> {
        if !path.starts_with('/')
            || path.chars().any(|c| c.is_whitespace() || c == '?' || c == '#')
        {
            return Err(AuthzError::InvalidPath(path.to_string()));
        }

        let path = normalize_path(path);
        if self.routes.iter().any(|r| r.path == path) {
            return Err(AuthzError::DuplicateRoute(path));
        }

        debug!(path = %path, access = %access, "registered route");
        self.routes.push(Route { path, page, access });
        Ok(())
    }

    /// Registers a route whose access class is given as text, e.g. from a
    /// configuration file.
    pub fn register_parsed(&mut self, path: &str, page: P, access: &str) -> Result<()> {
        let access = access.parse::<AccessClass>()?;
        self.register(path, page, access)
    }

    /// Looks up the route for a requested location.
    pub fn resolve(&self, location: &str) -> Option<&Route<P>> {
        let path = normalize_path(location);
        self.routes.iter().find(|r| r.path == path)
    }

    /// Access class of a registered path.
    pub fn access_class(&self, location: &str) -> Option<AccessClass> {
        self.resolve(location).map(|r| r.access)
    }

    /// All routes in registration order.
    pub fn routes(&self) -> &[Route<P>] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl<P: Clone> Default for RouteTable<P> {
    fn default() -> Self {
        Self::new()
    }
}

/// Reduces a location to the path used for route matching.
///
/// Query string and fragment are dropped, as is a trailing slash on anything
/// but the root.
pub fn normalize_path(location: &str) -> String {
    let end = location.find(&['?', '#'][..]).unwrap_or(location.len());
    let path = location[..end].trim();

    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        trimmed.to_string()
    }
}

//! Core access-control types shared by the session store, the route guard and
//! the navigation surface.
//!
//! # Trust Model
//!
//! An [`Identity`] is whatever the backend returned after a successful
//! credential exchange. The client never re-validates it against the server:
//! it is remembered for the lifetime of the tab and trusted until logout.
//!
//! [`Role`] is a closed enumeration. Role-dependent behaviour anywhere in the
//! workspace must go through [`crate::authorize`] rather than matching on the
//! role directly, so the decision table has exactly one implementation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AuthzError;

/// Root path; the sign-in page.
pub const SIGN_IN_PATH: &str = "/";

/// Landing page for guests.
pub const GUEST_HOME_PATH: &str = "/guest/home";

/// Landing page for admins.
pub const ADMIN_DASHBOARD_PATH: &str = "/admin/dashboard";

/// Opaque, backend-assigned identifier.
///
/// The backend currently emits integer ids, but nothing in the client depends
/// on that. Both JSON numbers and strings are accepted and written back in the
/// form they arrived in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    Number(i64),
    Text(String),
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserId::Number(n) => write!(f, "{}", n),
            UserId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        UserId::Number(id)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        UserId::Text(id.to_string())
    }
}

/// The role attached to an authenticated identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Guest,
    Admin,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Guest => write!(f, "guest"),
            Role::Admin => write!(f, "admin"),
        }
    }
}

/// The authenticated principal for the current tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Backend-assigned identifier
    pub id: UserId,

    /// Display name
    pub username: String,

    /// Exactly one of the two known roles
    pub role: Role,
}

impl Identity {
    /// Creates a new Identity.
    pub fn new(id: impl Into<UserId>, username: impl Into<String>, role: Role) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            role,
        }
    }

    /// Creates an Identity with the guest role.
    pub fn guest(id: impl Into<UserId>, username: impl Into<String>) -> Self {
        Self::new(id, username, Role::Guest)
    }

    /// Creates an Identity with the admin role.
    pub fn admin(id: impl Into<UserId>, username: impl Into<String>) -> Self {
        Self::new(id, username, Role::Admin)
    }
}

/// The declared visibility tier of a route.
///
/// Attached to a route at registration time and never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessClass {
    /// No identity required
    Public,
    /// Requires an identity with the guest role
    GuestOnly,
    /// Requires an identity with the admin role
    AdminOnly,
}

impl AccessClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessClass::Public => "public",
            AccessClass::GuestOnly => "guest_only",
            AccessClass::AdminOnly => "admin_only",
        }
    }
}

impl fmt::Display for AccessClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccessClass {
    type Err = AuthzError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "public" => Ok(AccessClass::Public),
            "guest_only" | "guest-only" | "guest" => Ok(AccessClass::GuestOnly),
            "admin_only" | "admin-only" | "admin" => Ok(AccessClass::AdminOnly),
            other => Err(AuthzError::UnknownAccessClass(other.to_string())),
        }
    }
}

/// The guard's answer for a navigation attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "decision", content = "path", rename_all = "snake_case")]
pub enum Decision {
    Allow,
    RedirectTo(String),
}

impl Decision {
    pub(crate) fn redirect(path: &str) -> Self {
        Decision::RedirectTo(path.to_string())
    }

    pub fn is_allow(&self) -> bool {
        matches!(self, Decision::Allow)
    }
}

//! Client-side access control for the Voyage travel-agency front-end.
//!
//! This crate defines the authenticated [`Identity`](types::Identity), the
//! [`AccessClass`](types::AccessClass) attached to every route, and the route
//! guard [`authorize`] that turns the two into a
//! [`Decision`](types::Decision).
//!
//! # Flow
//!
//! 1. **Navigation attempt** reaches the application shell
//! 2. **Route table** resolves the path to a page and its access class
//! 3. **authorize** compares the class against the current identity
//! 4. **Decision** is returned: Allow, or RedirectTo a fallback path
//!
//! The guard is a pure function. It must be evaluated again on every
//! navigation because the session can change between navigations without a
//! reload.

pub mod error;
pub mod routes;
pub mod types;

use tracing::trace;
use types::{
    AccessClass, Decision, Identity, Role, ADMIN_DASHBOARD_PATH, GUEST_HOME_PATH, SIGN_IN_PATH,
};

pub use error::{AuthzError, Result};
pub use routes::{normalize_path, Route, RouteTable};

/// Decides whether `identity` may view a page of class `requested`.
///
/// The rules are evaluated in this order, and the order matters:
///
/// 1. `Public` pages are always allowed.
/// 2. Without an identity, redirect to the sign-in page.
/// 3. A guest asking for an admin page goes to the guest home.
/// 4. An admin asking for a guest page goes to the admin dashboard.
/// 5. Anything else is allowed.
///
/// This is the only place in the workspace that inspects [`Role`].
///
/// # Example
///
/// ```rust
/// use authz::authorize;
/// use authz::types::{AccessClass, Decision, Identity};
///
/// let guest = Identity::guest(1, "alice");
/// assert_eq!(authorize(Some(&guest), AccessClass::GuestOnly), Decision::Allow);
/// assert_eq!(
///     authorize(None, AccessClass::AdminOnly),
///     Decision::RedirectTo("/".to_string())
/// );
/// ```
pub fn authorize(identity: Option<&Identity>, requested: AccessClass) -> Decision {
    let decision = match (requested, identity.map(|i| i.role)) {
        (AccessClass::Public, _) => Decision::Allow,
        (_, None) => Decision::redirect(SIGN_IN_PATH),
        (AccessClass::AdminOnly, Some(Role::Guest)) => Decision::redirect(GUEST_HOME_PATH),
        (AccessClass::GuestOnly, Some(Role::Admin)) => Decision::redirect(ADMIN_DASHBOARD_PATH),
        (AccessClass::GuestOnly, Some(Role::Guest)) | (AccessClass::AdminOnly, Some(Role::Admin)) => {
            Decision::Allow
        }
    };

    trace!(
        class = %requested,
        role = ?identity.map(|i| i.role),
        ?decision,
        "route guard evaluated"
    );
    decision
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guest() -> Identity {
        Identity::guest(1, "alice")
    }

    fn admin() -> Identity {
        Identity::admin(2, "root")
    }

    fn redirect(path: &str) -> Decision {
        Decision::RedirectTo(path.to_string())
    }

    /// Every access class crossed with every kind of identity.
    #[test]
    fn test_guard_decision_table() {
        let guest = guest();
        let admin = admin();

        let cases: Vec<(Option<&Identity>, AccessClass, Decision)> = vec![
            (None, AccessClass::Public, Decision::Allow),
            (None, AccessClass::GuestOnly, redirect("/")),
            (None, AccessClass::AdminOnly, redirect("/")),
            (Some(&guest), AccessClass::Public, Decision::Allow),
            (Some(&guest), AccessClass::GuestOnly, Decision::Allow),
            (Some(&guest), AccessClass::AdminOnly, redirect("/guest/home")),
            (Some(&admin), AccessClass::Public, Decision::Allow),
            (Some(&admin), AccessClass::GuestOnly, redirect("/admin/dashboard")),
            (Some(&admin), AccessClass::AdminOnly, Decision::Allow),
        ];

        for (identity, class, expected) in cases {
            assert_eq!(
                authorize(identity, class),
                expected,
                "identity={:?} class={}",
                identity.map(|i| i.role),
                class
            );
        }
    }

    #[test]
    fn test_public_allowed_regardless_of_identity() {
        for identity in [None, Some(guest()), Some(admin())] {
            assert!(authorize(identity.as_ref(), AccessClass::Public).is_allow());
        }
    }

    #[test]
    fn test_guard_is_reevaluated_per_call() {
        let mut current: Option<Identity> = None;
        assert_eq!(authorize(current.as_ref(), AccessClass::GuestOnly), redirect("/"));

        current = Some(guest());
        assert_eq!(
            authorize(current.as_ref(), AccessClass::GuestOnly),
            Decision::Allow
        );

        current = Some(admin());
        assert_eq!(
            authorize(current.as_ref(), AccessClass::GuestOnly),
            redirect("/admin/dashboard")
        );
    }
}

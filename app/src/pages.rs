//! Pages of the travel-agency front-end and the landing policy layered on
//! top of the route guard.
//!
//! Access control lives in [`authz::authorize`]. What this module adds is a
//! presentation decision: which page a signed-in user should land on, and
//! which public pages bounce them there instead of rendering.

use std::fmt;

use authz::types::{AccessClass, Decision, Identity, SIGN_IN_PATH};
use authz::{authorize, RouteTable};
use serde::Serialize;

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    SignIn,
    SignUp,
    GuestHome,
    GuestBookings,
    SearchResults,
    BookingConfirm,
    AdminDashboard,
    ManageGuests,
    ManagePackages,
    ManageStaff,
    EditAddPackage,
    EditAddStaff,
}

impl Page {
    pub fn title(&self) -> &'static str {
        match self {
            Page::SignIn => "Sign In",
            Page::SignUp => "Sign Up",
            Page::GuestHome => "Search Packages",
            Page::GuestBookings => "My Bookings",
            Page::SearchResults => "Search Results",
            Page::BookingConfirm => "Confirm Booking",
            Page::AdminDashboard => "Dashboard",
            Page::ManageGuests => "Manage Guests",
            Page::ManagePackages => "Manage Packages",
            Page::ManageStaff => "Manage Staff",
            Page::EditAddPackage => "Edit Package",
            Page::EditAddStaff => "Edit Staff",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// The route table of the application.
pub fn default_routes() -> Result<RouteTable<Page>> {
    let mut routes = RouteTable::new();

    // Auth
    routes.register("/", Page::SignIn, AccessClass::Public)?;
    routes.register("/signup", Page::SignUp, AccessClass::Public)?;

    // Guest
    routes.register("/guest/home", Page::GuestHome, AccessClass::GuestOnly)?;
    routes.register("/guest/booked", Page::GuestBookings, AccessClass::GuestOnly)?;
    routes.register("/guest/searchresults", Page::SearchResults, AccessClass::GuestOnly)?;
    routes.register("/guest/bookingconfirm", Page::BookingConfirm, AccessClass::GuestOnly)?;

    // Admin
    routes.register("/admin/dashboard", Page::AdminDashboard, AccessClass::AdminOnly)?;
    routes.register("/admin/manageguests", Page::ManageGuests, AccessClass::AdminOnly)?;
    routes.register("/admin/managepackages", Page::ManagePackages, AccessClass::AdminOnly)?;
    routes.register("/admin/managestaff", Page::ManageStaff, AccessClass::AdminOnly)?;
    routes.register("/admin/editaddpackage", Page::EditAddPackage, AccessClass::AdminOnly)?;
    routes.register("/admin/editaddstaff", Page::EditAddStaff, AccessClass::AdminOnly)?;

    Ok(routes)
}

/// Where a user belongs by default.
///
/// Signed out users belong on the sign-in page. Otherwise the guard is asked
/// whether the identity may see a guest page: if so that is the guest home,
/// if not the guard's redirect names the right landing page.
pub fn landing_for(identity: Option<&Identity>) -> String {
    if identity.is_none() {
        return SIGN_IN_PATH.to_string();
    }

    match authorize(identity, AccessClass::GuestOnly) {
        Decision::Allow => authz::types::GUEST_HOME_PATH.to_string(),
        Decision::RedirectTo(path) => path,
    }
}

/// Redirect a page applies to itself at render time, if any.
///
/// The sign-in and sign-up pages send an already signed-in user to their
/// landing page.
pub fn self_redirect(page: Page, identity: Option<&Identity>) -> Option<String> {
    match page {
        Page::SignIn | Page::SignUp if identity.is_some() => Some(landing_for(identity)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_routes_register() {
        let routes = default_routes().unwrap();
        assert_eq!(routes.len(), 12);

        assert_eq!(routes.resolve("/").unwrap().page, Page::SignIn);
        assert_eq!(
            routes.access_class("/guest/booked"),
            Some(AccessClass::GuestOnly)
        );
        assert_eq!(
            routes.access_class("/admin/editaddstaff"),
            Some(AccessClass::AdminOnly)
        );
    }

    #[test]
    fn test_every_guest_and_admin_page_is_protected() {
        let routes = default_routes().unwrap();
        for route in routes.routes() {
            if route.path.starts_with("/guest/") {
                assert_eq!(route.access, AccessClass::GuestOnly, "{}", route.path);
            } else if route.path.starts_with("/admin/") {
                assert_eq!(route.access, AccessClass::AdminOnly, "{}", route.path);
            } else {
                assert_eq!(route.access, AccessClass::Public, "{}", route.path);
            }
        }
    }

    #[test]
    fn test_landing_pages() {
        assert_eq!(landing_for(None), "/");
        assert_eq!(landing_for(Some(&Identity::guest(1, "a"))), "/guest/home");
        assert_eq!(
            landing_for(Some(&Identity::admin(2, "b"))),
            "/admin/dashboard"
        );
    }

    #[test]
    fn test_auth_pages_bounce_signed_in_users() {
        let guest = Identity::guest(1, "a");
        let admin = Identity::admin(2, "b");

        assert_eq!(self_redirect(Page::SignIn, None), None);
        assert_eq!(self_redirect(Page::SignUp, None), None);
        assert_eq!(
            self_redirect(Page::SignIn, Some(&guest)).as_deref(),
            Some("/guest/home")
        );
        assert_eq!(
            self_redirect(Page::SignUp, Some(&admin)).as_deref(),
            Some("/admin/dashboard")
        );
        assert_eq!(self_redirect(Page::GuestHome, Some(&guest)), None);
    }
}

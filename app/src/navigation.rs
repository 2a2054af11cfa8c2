//! The navigation bar: a projection of the session onto visible actions.
//!
//! The surface keeps no state. Which links a signed-in user sees is decided by
//! asking the route guard about each link's target, so no role check is
//! repeated here.

use authz::types::{AccessClass, Identity, SIGN_IN_PATH};
use authz::{authorize, RouteTable};
use serde::Serialize;
use tracing::{debug, warn};
use user::{Session, StorageArea};

use crate::error::Result;
use crate::pages::{landing_for, Page};

/// An action the navigation bar can offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Affordance {
    SignIn,
    Register,
    SearchPackages,
    MyBookings,
    ManagePackages,
    ManageStaff,
    ManageGuests,
    Logout,
}

impl Affordance {
    pub fn label(&self) -> &'static str {
        match self {
            Affordance::SignIn => "Sign In",
            Affordance::Register => "Register",
            Affordance::SearchPackages => "Search Packages",
            Affordance::MyBookings => "My Bookings",
            Affordance::ManagePackages => "Manage Packages",
            Affordance::ManageStaff => "Manage Staff",
            Affordance::ManageGuests => "Manage Guests",
            Affordance::Logout => "Logout",
        }
    }

    /// Path the affordance leads to.
    pub fn target(&self) -> &'static str {
        match self {
            Affordance::SignIn => SIGN_IN_PATH,
            Affordance::Register => "/signup",
            Affordance::SearchPackages => "/guest/home",
            Affordance::MyBookings => "/guest/booked",
            Affordance::ManagePackages => "/admin/managepackages",
            Affordance::ManageStaff => "/admin/managestaff",
            Affordance::ManageGuests => "/admin/manageguests",
            Affordance::Logout => SIGN_IN_PATH,
        }
    }
}

const SIGNED_OUT: [Affordance; 2] = [Affordance::SignIn, Affordance::Register];

const SIGNED_IN_LINKS: [Affordance; 5] = [
    Affordance::SearchPackages,
    Affordance::MyBookings,
    Affordance::ManagePackages,
    Affordance::ManageStaff,
    Affordance::ManageGuests,
];

/// What the navigation bar shows for the current session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavBar {
    pub greeting: Option<String>,
    pub affordances: Vec<Affordance>,
    /// Where clicking the logo goes
    pub logo_target: String,
}

impl NavBar {
    pub fn contains(&self, affordance: Affordance) -> bool {
        self.affordances.contains(&affordance)
    }
}

/// Projects a [`Session`] onto a [`NavBar`] and carries out chosen actions.
pub struct NavigationSurface<'a> {
    routes: &'a RouteTable<Page>,
}

impl<'a> NavigationSurface<'a> {
    pub fn new(routes: &'a RouteTable<Page>) -> Self {
        Self { routes }
    }

    pub fn project<S: StorageArea>(&self, session: &Session<S>) -> NavBar {
        let identity = session.current_identity();

        let Some(current) = identity else {
            return NavBar {
                greeting: None,
                affordances: SIGNED_OUT.to_vec(),
                logo_target: landing_for(None),
            };
        };

        let mut affordances: Vec<Affordance> = SIGNED_IN_LINKS
            .iter()
            .copied()
            .filter(|a| self.offers(*a, current))
            .collect();
        affordances.push(Affordance::Logout);

        NavBar {
            greeting: Some(format!("Welcome, {}", current.username)),
            affordances,
            logo_target: landing_for(identity),
        }
    }

    /// Carry out `affordance` and return the path to navigate to.
    ///
    /// Logout clears the session before returning the sign-in path; every
    /// other action is plain navigation.
    pub fn activate<S: StorageArea>(
        &self,
        affordance: Affordance,
        session: &mut Session<S>,
    ) -> Result<String> {
        debug!("Navigation action: {}", affordance.label());
        if affordance == Affordance::Logout {
            session.logout()?;
        }
        Ok(affordance.target().to_string())
    }

    fn offers(&self, affordance: Affordance, identity: &Identity) -> bool {
        match self.routes.access_class(affordance.target()) {
            Some(AccessClass::Public) => false,
            Some(class) => authorize(Some(identity), class).is_allow(),
            None => {
                warn!("Navigation link to unregistered route {}", affordance.target());
                false
            }
        }
    }
}

//! Route guards: who may open which screen.

use violetta_core::session::Session;

/// Screen groups with distinct access rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Welcome, login, registration and onboarding screens.
    Public,
    /// The personal dashboard.
    Private,
    /// The business admin dashboard.
    Admin,
}

impl Route {
    /// Classifies an app path such as `/dashboard/journal`.
    pub fn from_path(path: &str) -> Self {
        if path.starts_with("/admin") {
            Route::Admin
        } else if path.starts_with("/dashboard") {
            Route::Private
        } else {
            Route::Public
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Allow,
    RedirectWelcome,
    RedirectOnboarding,
    RedirectHome,
}

pub struct RouteAccess;

impl RouteAccess {
    pub fn access(session: Option<&Session>, route: Route) -> Access {
        if route == Route::Public {
            return Access::Allow;
        }
        let Some(session) = session else {
            return Access::RedirectWelcome;
        };
        if !session.has_completed_onboarding {
            return Access::RedirectOnboarding;
        }
        if route == Route::Admin && !session.is_admin() {
            return Access::RedirectHome;
        }
        Access::Allow
    }

    /// Where the app opens: admins to their dashboard, onboarded users home,
    /// everyone else to the welcome screen.
    pub fn landing_path(session: Option<&Session>) -> &'static str {
        match session {
            Some(s) if s.has_completed_onboarding && s.is_admin() => "/admin/dashboard",
            Some(s) if s.has_completed_onboarding => "/dashboard/home",
            _ => "/auth/welcome",
        }
    }
}

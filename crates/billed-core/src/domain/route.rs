//! Navigation Routes
//!
//! The small fixed set of pages the app can display. The UI owns the
//! route signal; flows only ever return a `Route` for the caller to apply.

/// A navigable page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Login,
    Bills,
    NewBill,
    Dashboard,
}

impl Route {
    /// Hash path mirrored into the browser location bar
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/",
            Route::Bills => "#employee/bills",
            Route::NewBill => "#employee/bill/new",
            Route::Dashboard => "#admin/dashboard",
        }
    }

    /// Resolve a location hash back to a page; anything unknown lands on
    /// the login page
    pub fn from_path(path: &str) -> Self {
        match path {
            "#employee/bills" => Route::Bills,
            "#employee/bill/new" => Route::NewBill,
            "#admin/dashboard" => Route::Dashboard,
            _ => Route::Login,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_round_trip() {
        for route in [Route::Bills, Route::NewBill, Route::Dashboard] {
            assert_eq!(Route::from_path(route.path()), route);
        }
    }

    #[test]
    fn test_unknown_path_falls_back_to_login() {
        assert_eq!(Route::from_path(""), Route::Login);
        assert_eq!(Route::from_path("#nowhere"), Route::Login);
    }
}

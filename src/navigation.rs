use clap::ValueEnum;
use std::sync::OnceLock;

/// A destination in the settings window
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Route {
    #[default]
    About,
    ProjectLicense,
    ThirdPartyLicenses,
}

impl Route {
    /// Title shown in the window header
    pub fn title(self) -> &'static str {
        match self {
            Route::About => "About",
            Route::ProjectLicense => "Project license",
            Route::ThirdPartyLicenses => "Third-party licenses",
        }
    }
}

/// Requests a transition to another route
pub trait Navigator {
    fn navigate(&self, route: Route);
}

/// Route the first window opens with (only first call takes effect)
static INITIAL_ROUTE: OnceLock<Route> = OnceLock::new();

pub fn set_initial_route(route: Route) {
    let _ = INITIAL_ROUTE.set(route);
}

pub fn initial_route() -> Route {
    INITIAL_ROUTE.get().copied().unwrap_or_default()
}

/// Back/forward stack of visited routes
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationStack {
    routes: Vec<Route>,
    current_index: usize,
}

impl Default for NavigationStack {
    fn default() -> Self {
        Self::new(Route::default())
    }
}

impl NavigationStack {
    pub fn new(root: Route) -> Self {
        Self {
            routes: vec![root],
            current_index: 0,
        }
    }

    /// Push a route, clearing forward history
    pub fn push(&mut self, route: Route) {
        // Don't add duplicate if it's the same as current
        if self.current() == route {
            return;
        }
        self.routes.truncate(self.current_index + 1);
        self.routes.push(route);
        self.current_index += 1;
    }

    pub fn can_go_back(&self) -> bool {
        self.current_index > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.current_index + 1 < self.routes.len()
    }

    /// Go back, returns the route now shown
    pub fn go_back(&mut self) -> Option<Route> {
        if !self.can_go_back() {
            return None;
        }
        self.current_index -= 1;
        Some(self.current())
    }

    /// Go forward, returns the route now shown
    pub fn go_forward(&mut self) -> Option<Route> {
        if !self.can_go_forward() {
            return None;
        }
        self.current_index += 1;
        Some(self.current())
    }

    pub fn current(&self) -> Route {
        self.routes[self.current_index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stack() {
        let stack = NavigationStack::new(Route::About);
        assert_eq!(stack.current(), Route::About);
        assert!(!stack.can_go_back());
        assert!(!stack.can_go_forward());
    }

    #[test]
    fn test_push_and_go_back() {
        let mut stack = NavigationStack::default();
        stack.push(Route::ProjectLicense);
        assert_eq!(stack.current(), Route::ProjectLicense);
        assert!(stack.can_go_back());

        assert_eq!(stack.go_back(), Some(Route::About));
        assert_eq!(stack.go_back(), None);
        assert_eq!(stack.current(), Route::About);
    }

    #[test]
    fn test_push_same_route_is_ignored() {
        let mut stack = NavigationStack::default();
        stack.push(Route::ThirdPartyLicenses);
        stack.push(Route::ThirdPartyLicenses);

        assert_eq!(stack.go_back(), Some(Route::About));
        assert!(!stack.can_go_back());
    }

    #[test]
    fn test_push_clears_forward_history() {
        let mut stack = NavigationStack::default();
        stack.push(Route::ProjectLicense);
        stack.go_back();
        assert!(stack.can_go_forward());

        stack.push(Route::ThirdPartyLicenses);
        assert!(!stack.can_go_forward());
        assert_eq!(stack.go_back(), Some(Route::About));
        assert_eq!(stack.go_forward(), Some(Route::ThirdPartyLicenses));
        assert_eq!(stack.go_forward(), None);
    }

    #[test]
    fn test_route_titles() {
        assert_eq!(Route::About.title(), "About");
        assert_eq!(Route::ProjectLicense.title(), "Project license");
        assert_eq!(Route::ThirdPartyLicenses.title(), "Third-party licenses");
    }

    #[test]
    fn test_route_cli_names() {
        assert_eq!(
            Route::from_str("third-party-licenses", false),
            Ok(Route::ThirdPartyLicenses)
        );
        assert_eq!(
            Route::from_str("project-license", false),
            Ok(Route::ProjectLicense)
        );
    }
}

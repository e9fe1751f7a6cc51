//! Screen routing.
//!
//! The settings screen only talks to the router through [`Navigator`];
//! [`NavigationStack`] is the stack-based implementation the app uses.

/// Named screens reachable from the settings area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// First-run onboarding flow
    OnBoarding,
    /// Recorded entries list
    Records,
    /// Voice recording screen
    Recording,
    /// User profile
    Profile,
    /// Social feed
    Feed,
    /// Archive of past entries
    Archive,
    /// Settings screen
    Settings,
}

impl Route {
    /// Get the display title for this route.
    pub fn title(&self) -> &'static str {
        match self {
            Route::OnBoarding => "Welcome",
            Route::Records => "Records",
            Route::Recording => "Recording",
            Route::Profile => "Profile",
            Route::Feed => "Feed",
            Route::Archive => "Archive",
            Route::Settings => "Settings",
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// Router collaborator.
pub trait Navigator {
    /// Transition to a named screen.
    fn navigate(&mut self, route: Route);

    /// Return to the previous screen.
    fn go_back(&mut self);
}

/// Stack of visited routes.
#[derive(Debug, Clone)]
pub struct NavigationStack {
    stack: Vec<Route>,
}

impl NavigationStack {
    /// Create a stack rooted at `root`.
    pub fn new(root: Route) -> Self {
        Self { stack: vec![root] }
    }

    /// The route currently on top.
    pub fn current(&self) -> Route {
        // The root is never popped.
        self.stack[self.stack.len() - 1]
    }

    /// Number of routes on the stack.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Clear history and show `route` alone.
    pub fn reset(&mut self, route: Route) {
        self.stack.clear();
        self.stack.push(route);
    }
}

impl Navigator for NavigationStack {
    fn navigate(&mut self, route: Route) {
        if self.current() == route {
            return;
        }
        tracing::info!("Navigating {} -> {}", self.current(), route);
        self.stack.push(route);
    }

    fn go_back(&mut self) {
        if self.stack.len() > 1 {
            let from = self.stack.pop();
            tracing::info!("Back from {:?} to {}", from, self.current());
        }
    }
}

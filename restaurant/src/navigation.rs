//! Screen routes and the navigation stack

use std::fmt;

/// Every screen in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Welcome,
    Menu,
    OwnerDashboard,
    AddToMenu,
    RemoveFromMenu,
    ResetConfirmation,
    Filter,
    OrderDetails,
    Help,
}

impl Route {
    /// Header shown above the screen
    pub fn title(&self) -> &'static str {
        match self {
            Route::Welcome => "Welcome",
            Route::Menu => "Menu",
            Route::OwnerDashboard => "Menu (Owner)",
            Route::AddToMenu => "Add to Menu",
            Route::RemoveFromMenu => "Remove from Menu",
            Route::ResetConfirmation => "Reset Menu",
            Route::Filter => "Filter",
            Route::OrderDetails => "Order Details",
            Route::Help => "Help",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Route::Welcome => "welcome",
            Route::Menu => "menu",
            Route::OwnerDashboard => "owner_dashboard",
            Route::AddToMenu => "add_to_menu",
            Route::RemoveFromMenu => "remove_from_menu",
            Route::ResetConfirmation => "reset_confirmation",
            Route::Filter => "filter",
            Route::OrderDetails => "order_details",
            Route::Help => "help",
        };
        write!(f, "{name}")
    }
}

/// What a screen asks the app loop to do once it has handled one interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Render the same screen again
    Stay,
    Navigate(Route),
    Back,
    /// End the session
    Quit,
}

/// Stack navigator rooted at the welcome screen
#[derive(Debug, Clone)]
pub struct Navigator {
    stack: Vec<Route>,
}

impl Navigator {
    pub fn new(root: Route) -> Self {
        Self { stack: vec![root] }
    }

    /// Screen currently on top
    pub fn current(&self) -> Route {
        // The root is never popped
        self.stack.last().copied().unwrap_or(Route::Welcome)
    }

    /// Go to `route`, unwinding to it if it is already on the stack
    pub fn navigate(&mut self, route: Route) {
        match self.stack.iter().position(|&r| r == route) {
            Some(index) => self.stack.truncate(index + 1),
            None => self.stack.push(route),
        }
    }

    /// Pop the current screen
    ///
    /// # Returns
    /// `false` when already at the root
    pub fn go_back(&mut self) -> bool {
        if self.stack.len() > 1 {
            self.stack.pop();
            true
        } else {
            false
        }
    }

    /// Apply a screen's transition
    ///
    /// # Returns
    /// `false` once the session should end
    pub fn apply(&mut self, transition: Transition) -> bool {
        match transition {
            Transition::Stay => true,
            Transition::Navigate(route) => {
                self.navigate(route);
                true
            }
            Transition::Back => {
                self.go_back();
                true
            }
            Transition::Quit => false,
        }
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn stack(&self) -> &[Route] {
        &self.stack
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(Route::Welcome)
    }
}

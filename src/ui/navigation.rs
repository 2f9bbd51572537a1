//! Screen routing: login, dashboard, profile.
//!
//! The back stack is plain state driven by [`NavigationReducer`]. Reaching
//! the dashboard removes the login screen from the stack so "back" never
//! returns to the credentials form.

use std::fmt;

use crate::ui::mvi::{Intent, Reducer, UiState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Login,
    Dashboard { token: String },
    Profile { token: String },
}

// Macros so `concat!` can build the patterns from the same names.
macro_rules! login_route {
    () => {
        "login_screen"
    };
}
macro_rules! dashboard_route {
    () => {
        "dashboard_screen"
    };
}
macro_rules! profile_route {
    () => {
        "profile_screen"
    };
}

const LOGIN_ROUTE: &str = login_route!();
const DASHBOARD_ROUTE: &str = dashboard_route!();
const PROFILE_ROUTE: &str = profile_route!();

impl Screen {
    /// Route pattern as registered, e.g. `dashboard_screen/{token}`.
    pub fn pattern(&self) -> &'static str {
        match self {
            Screen::Login => login_route!(),
            Screen::Dashboard { .. } => concat!(dashboard_route!(), "/{token}"),
            Screen::Profile { .. } => concat!(profile_route!(), "/{token}"),
        }
    }

    /// Concrete route with the token filled in.
    pub fn route(&self) -> String {
        match self {
            Screen::Login => LOGIN_ROUTE.to_string(),
            Screen::Dashboard { token } => format!("{}/{}", DASHBOARD_ROUTE, token),
            Screen::Profile { token } => format!("{}/{}", PROFILE_ROUTE, token),
        }
    }

    /// Parse a concrete route. A token-bearing route needs a non-empty token.
    pub fn from_route(route: &str) -> Option<Self> {
        if route == LOGIN_ROUTE {
            return Some(Screen::Login);
        }
        let (name, token) = route.split_once('/')?;
        if token.is_empty() {
            return None;
        }
        let token = token.to_string();
        match name {
            DASHBOARD_ROUTE => Some(Screen::Dashboard { token }),
            PROFILE_ROUTE => Some(Screen::Profile { token }),
            _ => None,
        }
    }

    pub fn token(&self) -> Option<&str> {
        match self {
            Screen::Login => None,
            Screen::Dashboard { token } | Screen::Profile { token } => Some(token),
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.pattern())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    back_stack: Vec<Screen>,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            back_stack: vec![Screen::Login],
        }
    }
}

impl UiState for NavigationState {}

impl NavigationState {
    pub fn current(&self) -> &Screen {
        // Never empty: Back refuses to pop the last entry.
        self.back_stack.last().unwrap_or(&Screen::Login)
    }

    pub fn back_stack(&self) -> &[Screen] {
        &self.back_stack
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationIntent {
    Navigate(Screen),
    Back,
}

impl Intent for NavigationIntent {}

pub struct NavigationReducer;

impl Reducer for NavigationReducer {
    type State = NavigationState;
    type Intent = NavigationIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let mut back_stack = state.back_stack;
        match intent {
            NavigationIntent::Navigate(Screen::Login) => {
                back_stack = vec![Screen::Login];
            }
            NavigationIntent::Navigate(screen @ Screen::Dashboard { .. }) => {
                // pop up to login, inclusive
                if let Some(pos) = back_stack.iter().position(|s| *s == Screen::Login) {
                    back_stack.truncate(pos);
                }
                back_stack.push(screen);
            }
            NavigationIntent::Navigate(screen) => {
                if back_stack.last() != Some(&screen) {
                    back_stack.push(screen);
                }
            }
            NavigationIntent::Back => {
                if back_stack.len() > 1 {
                    back_stack.pop();
                }
            }
        }
        NavigationState { back_stack }
    }
}

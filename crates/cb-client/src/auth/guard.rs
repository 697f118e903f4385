use crate::{AuthState, Navigator, Route};

use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardState {
    /// Session still being restored
    Checking,
    Authenticated,
    Unauthenticated,
}

impl From<&AuthState> for GuardState {
    fn from(state: &AuthState) -> Self {
        if state.is_loading {
            Self::Checking
        } else if state.is_authenticated {
            Self::Authenticated
        } else {
            Self::Unauthenticated
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Show a loading indicator, nothing else
    Loading,
    Redirect(Route),
    Render,
}

/// Decides what a page may show for the current auth state.
pub struct RouteGuard {
    navigator: Arc<dyn Navigator>,
}

impl RouteGuard {
    pub fn new(navigator: Arc<dyn Navigator>) -> Self {
        Self { navigator }
    }

    /// Pure decision, no side effects
    pub fn decide(state: GuardState, route: &Route) -> GuardDecision {
        match state {
            GuardState::Checking => GuardDecision::Loading,
            GuardState::Unauthenticated if !route.is_public() => {
                GuardDecision::Redirect(Route::Login)
            }
            GuardState::Authenticated if *route == Route::Login => {
                GuardDecision::Redirect(Route::Dashboard)
            }
            _ => GuardDecision::Render,
        }
    }

    /// Decide, and follow a redirect through the navigator
    pub fn enforce(&self, state: GuardState, route: &Route) -> GuardDecision {
        let decision = Self::decide(state, route);
        if let GuardDecision::Redirect(ref target) = decision {
            self.navigator.navigate(target);
        }
        decision
    }
}

use cb_client::{Navigator, Route};

use std::sync::{Mutex, PoisonError};

use log::info;

/// Navigator for a terminal: there is no page to change, so the last
/// requested route is remembered and reported after the command finishes.
#[derive(Debug, Default)]
pub struct ConsoleNavigator {
    last: Mutex<Option<Route>>,
}

impl ConsoleNavigator {
    pub fn last_route(&self) -> Option<Route> {
        self.last
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Navigator for ConsoleNavigator {
    fn navigate(&self, route: &Route) {
        info!("Navigate to {route}");
        *self.last.lock().unwrap_or_else(PoisonError::into_inner) = Some(route.clone());
    }
}

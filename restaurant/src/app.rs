//! Application event loop
//!
//! Owns the store and the navigation stack, renders whichever screen is on top
//! and applies the transition it returns. Each screen runs to completion
//! before the next input is read.

use shared::{logging, screen_debug, screen_error};

use crate::config::AppConfig;
use crate::core::{MenuStore, OwnerCredentials};
use crate::error::{RestaurantError, RestaurantResult};
use crate::navigation::{Navigator, Route};
use crate::screens::{self, ScreenContext};
use crate::traits::{Console, IdGenerator};

pub struct App<C, G>
where
    C: Console,
    G: IdGenerator,
{
    store: MenuStore<G>,
    console: C,
    navigator: Navigator,
    owner: OwnerCredentials,
}

impl<C, G> App<C, G>
where
    C: Console,
    G: IdGenerator,
{
    /// Create an app on the welcome screen with injected services
    pub fn new(config: &AppConfig, console: C, ids: G) -> Self {
        Self {
            store: MenuStore::new(config.initial_catalog, ids),
            console,
            navigator: Navigator::new(Route::Welcome),
            owner: config.owner.clone(),
        }
    }

    /// Run until the user quits or input ends
    pub async fn run(&mut self) -> RestaurantResult<()> {
        logging::log_startup(&self.navigator.current(), "restaurant session");

        loop {
            let route = self.navigator.current();
            let mut ctx = ScreenContext {
                store: &mut self.store,
                console: &mut self.console,
                owner: &self.owner,
            };

            let transition = match screens::run(route, &mut ctx).await {
                Ok(transition) => transition,
                Err(RestaurantError::InputClosed) => {
                    logging::log_shutdown(&route, "input closed");
                    return Ok(());
                }
                Err(error) => {
                    screen_error!(route, error = %error, "Screen failed");
                    return Err(error);
                }
            };

            screen_debug!(route, transition = ?transition, "Screen finished");
            if !self.navigator.apply(transition) {
                logging::log_shutdown(&route, "user quit");
                return Ok(());
            }
        }
    }

    pub fn store(&self) -> &MenuStore<G> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut MenuStore<G> {
        &mut self.store
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn console(&self) -> &C {
        &self.console
    }
}

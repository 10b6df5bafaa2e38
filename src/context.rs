//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::models::User;
use crate::storage;

/// Which screen is currently rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    Login,
    Register,
    Todos,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Logged-in user (None = logged out) - read
    pub user: ReadSignal<Option<User>>,
    set_user: WriteSignal<Option<User>>,
    /// Current screen - read
    pub screen: ReadSignal<Screen>,
    set_screen: WriteSignal<Screen>,
    /// Trigger to reload todos from the backend - read
    pub reload_trigger: ReadSignal<u32>,
    set_reload_trigger: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(
        user: (ReadSignal<Option<User>>, WriteSignal<Option<User>>),
        screen: (ReadSignal<Screen>, WriteSignal<Screen>),
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
    ) -> Self {
        Self {
            user: user.0,
            set_user: user.1,
            screen: screen.0,
            set_screen: screen.1,
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
        }
    }

    /// Navigate to another screen
    pub fn goto(&self, screen: Screen) {
        self.set_screen.set(screen);
    }

    /// Record a successful login and show the todo list
    pub fn login(&self, user: User) {
        self.set_user.set(Some(user));
        self.set_screen.set(Screen::Todos);
    }

    /// Drop the session: clear the stored token and in-memory user
    pub fn logout(&self) {
        storage::clear_token();
        self.set_user.set(None);
        self.set_screen.set(Screen::Home);
    }

    /// Trigger a reload of the todo list
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }
}

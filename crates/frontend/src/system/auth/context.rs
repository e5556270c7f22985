//! Client-side session state. There is no backend: credentials are only
//! validated for presence, and the username is kept for display.

use contracts::error::{require, ValidationError};
use leptos::prelude::*;

use super::storage;

#[derive(Clone, Copy)]
pub struct AuthContext {
    pub user: RwSignal<Option<String>>,
}

impl AuthContext {
    pub fn new() -> Self {
        Self {
            user: RwSignal::new(storage::get_user()),
        }
    }

    pub fn login(&self, username: &str, password: &str) -> Result<(), ValidationError> {
        let username = require("username", username)?;
        require("password", password)?;
        storage::save_user(&username);
        self.user.set(Some(username));
        Ok(())
    }

    pub fn logout(&self) {
        storage::clear_user();
        self.user.set(None);
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.get().is_some()
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext not found")
}

//! Session persistence in localStorage so a refresh keeps the user
//! signed in.

use web_sys::window;

const USER_KEY: &str = "balai_yasa_user";

pub fn get_user() -> Option<String> {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(USER_KEY).ok().flatten())
}

pub fn save_user(username: &str) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(USER_KEY, username);
    }
}

pub fn clear_user() {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.remove_item(USER_KEY);
    }
}

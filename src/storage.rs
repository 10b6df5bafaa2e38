//! Token Storage
//!
//! The bearer token lives in browser local storage so a reload keeps the
//! session alive.

const TOKEN_KEY: &str = "token";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

pub fn get_token() -> Option<String> {
    local_storage()?.get_item(TOKEN_KEY).ok().flatten()
}

pub fn set_token(token: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
    }
}

pub fn clear_token() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
    }
}

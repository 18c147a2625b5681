use contracts::system::auth::UserProfile;
use web_sys::window;

const CREDENTIAL_KEY: &str = "credential";
const PROFILE_KEY: &str = "backendData";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Save the backend credential to localStorage
pub fn save_credential(token: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(CREDENTIAL_KEY, token);
    }
}

/// Get the backend credential from localStorage
pub fn get_credential() -> Option<String> {
    get_local_storage()?
        .get_item(CREDENTIAL_KEY)
        .ok()?
        .filter(|token| !token.trim().is_empty())
}

/// Cache the employee profile returned by `/user/`
pub fn save_profile(profile: &UserProfile) {
    match serde_json::to_string(profile) {
        Ok(json) => {
            if let Some(storage) = get_local_storage() {
                let _ = storage.set_item(PROFILE_KEY, &json);
            }
        }
        Err(e) => log::warn!("Could not cache profile: {}", e),
    }
}

/// Cached profile; an unreadable entry counts as absent
pub fn get_profile() -> Option<UserProfile> {
    let json = get_local_storage()?.get_item(PROFILE_KEY).ok()??;
    serde_json::from_str(&json)
        .map_err(|e| log::warn!("Discarding cached profile: {}", e))
        .ok()
}

/// Remove the credential and the cached profile
pub fn clear() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(CREDENTIAL_KEY);
        let _ = storage.remove_item(PROFILE_KEY);
    }
}

use contracts::system::auth::session::SESSION_STORAGE_KEY;
use contracts::system::auth::SessionUser;
use contracts::system::modules::{ModulePermissions, PERMISSIONS_STORAGE_KEY};

use crate::shared::storage;

/// Save the signed-in roster record
pub fn save_session(user: &SessionUser) {
    match user.to_json() {
        Ok(json) => storage::set_item(SESSION_STORAGE_KEY, &json),
        Err(e) => log::error!("Cannot serialize session: {}", e),
    }
}

/// Stored session; an unreadable entry is dropped.
pub fn load_session() -> Option<SessionUser> {
    let json = storage::get_item(SESSION_STORAGE_KEY)?;
    match SessionUser::from_json(&json) {
        Ok(user) => Some(user),
        Err(e) => {
            log::warn!("Discarding unreadable session: {}", e);
            clear_session();
            None
        }
    }
}

pub fn clear_session() {
    storage::remove_item(SESSION_STORAGE_KEY);
}

/// Admin overrides of module access. Missing or unreadable means none.
pub fn load_permissions() -> ModulePermissions {
    storage::get_item(PERMISSIONS_STORAGE_KEY)
        .and_then(|json| match ModulePermissions::from_json(&json) {
            Ok(permissions) => Some(permissions),
            Err(e) => {
                log::warn!("Ignoring unreadable module permissions: {}", e);
                None
            }
        })
        .unwrap_or_default()
}

pub fn save_permissions(permissions: &ModulePermissions) {
    match permissions.to_json() {
        Ok(json) => storage::set_item(PERMISSIONS_STORAGE_KEY, &json),
        Err(e) => log::error!("Cannot serialize module permissions: {}", e),
    }
}

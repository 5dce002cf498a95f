use contracts::system::auth::SessionUser;
use contracts::system::modules::{
    has_module_access, Block, ModuleKey, ModulePermissions, UserAccess,
};
use leptos::prelude::*;

use super::storage;

/// Signed-in user and the module permission overrides, shared by all
/// screens. Presence of `user` is the authentication signal.
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub user: RwSignal<Option<SessionUser>>,
    pub permissions: RwSignal<ModulePermissions>,
}

impl SessionContext {
    /// Restores both values from localStorage.
    pub fn new() -> Self {
        Self {
            user: RwSignal::new(storage::load_session()),
            permissions: RwSignal::new(storage::load_permissions()),
        }
    }

    pub fn sign_in(&self, user: SessionUser) {
        log::info!("Signed in: {}", user.email());
        storage::save_session(&user);
        self.user.set(Some(user));
    }

    pub fn sign_out(&self) {
        storage::clear_session();
        self.user.set(None);
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.with(Option::is_some)
    }

    pub fn user_access(&self, admin_email: &str) -> UserAccess {
        self.user.with(|user| {
            user.as_ref()
                .map(|u| UserAccess::of(&u.employee, admin_email))
                .unwrap_or_default()
        })
    }

    pub fn can_open(&self, module: ModuleKey, admin_email: &str) -> bool {
        let access = self.user_access(admin_email);
        self.permissions
            .with(|permissions| has_module_access(module, &access, permissions))
    }

    /// Admin toggle of one block for one module; persisted immediately.
    pub fn toggle_permission(&self, module: ModuleKey, block: Block) {
        self.permissions.update(|permissions| {
            permissions.toggle(module.permission_id(), block);
            storage::save_permissions(permissions);
        });
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook to access the session
pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}

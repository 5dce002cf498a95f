//! Sign-in, session identity and row-level access scoping.

pub mod access;
pub mod role;
pub mod scope_filter;
pub mod session;

pub use access::{resolve_access, AccessContext};
pub use role::Role;
pub use session::{login, LoginError, SessionUser};
